//! Tests for TOML configuration loading.

use std::io::Write;
use strictly_connect_four::{Color, Quality};
use strictly_connect_four_cli::{ConfigOverrides, GameConfig};

#[test]
fn test_defaults_for_empty_file() {
    let config = GameConfig::from_toml("").expect("empty config is valid");
    assert_eq!(config, GameConfig::default());
    assert_eq!(*config.quality(), Quality::Best);
    assert_eq!(*config.human(), Color::Red);
    assert_eq!(*config.seed(), None);
    assert_eq!(*config.games(), 1);
}

#[test]
fn test_all_keys_parsed() {
    let config = GameConfig::from_toml(
        r#"
quality = "medium"
human = "yellow"
seed = 42
games = 10
"#,
    )
    .expect("valid config");
    assert_eq!(*config.quality(), Quality::Medium);
    assert_eq!(*config.human(), Color::Yellow);
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(*config.games(), 10);
}

#[test]
fn test_unknown_quality_rejected() {
    let result = GameConfig::from_toml(r#"quality = "grandmaster""#);
    assert!(result.is_err());
}

#[test]
fn test_overrides_take_precedence() {
    let config = GameConfig::from_toml("quality = \"bad\"\nseed = 1")
        .expect("valid config")
        .with_overrides(ConfigOverrides {
            quality: Some(Quality::Best),
            games: Some(3),
            ..Default::default()
        });
    assert_eq!(*config.quality(), Quality::Best);
    assert_eq!(*config.seed(), Some(1));
    assert_eq!(*config.games(), 3);
    assert_eq!(*config.human(), Color::Red);
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "human = \"yellow\"").expect("write config");
    let config = GameConfig::load(Some(file.path())).expect("config loads");
    assert_eq!(*config.human(), Color::Yellow);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");
    let err = GameConfig::load(Some(&path)).expect_err("missing file");
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_duel_qualities_fall_back_to_config() {
    let config = GameConfig::from_toml("quality = \"medium\"").expect("valid config");
    assert_eq!(
        config.duel_qualities(None, None),
        (Quality::Medium, Quality::Medium)
    );
    assert_eq!(
        config.duel_qualities(Some(Quality::Bad), None),
        (Quality::Bad, Quality::Medium)
    );
    assert_eq!(
        config.duel_qualities(None, Some(Quality::Best)),
        (Quality::Medium, Quality::Best)
    );
}
