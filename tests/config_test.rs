//! Tests for TOML configuration loading.

use gridtac::{GameConfig, Locale};
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        "games_to_win = 5\nrows = 4\ncols = 5\nlocale = \"en_US\"\nseed = 42\n",
    );
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.games_to_win(), 5);
    assert_eq!(*config.rows(), 4);
    assert_eq!(*config.cols(), 5);
    assert_eq!(*config.locale(), Locale::EnUs);
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_invalid_board_rejected() {
    let file = write_config("rows = 0\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("at least 1x1"));
}

#[test]
fn test_unknown_key_rejected() {
    let file = write_config("board_size = 3\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config("rows = 4\ncols = 4\n");
    let config = GameConfig::from_file(file.path())
        .unwrap()
        .with_overrides(None, Some(6), None, None, Some(1))
        .unwrap();
    assert_eq!(*config.rows(), 6);
    assert_eq!(*config.cols(), 4);
    assert_eq!(*config.seed(), Some(1));
}
