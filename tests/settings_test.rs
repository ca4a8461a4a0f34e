//! Tests for settings loading.

use std::io::Write;
use std::time::Duration;
use tictactoe_duel::{MAX_THINK_DELAY_MS, Mode, Settings};

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(*settings.mode(), Mode::HumanVsHuman);
    assert_eq!(settings.think_delay(), Duration::from_millis(500));
    assert_eq!(*settings.seed(), None);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let settings = Settings::from_toml("mode = \"human-vs-automated\"\n").unwrap();
    assert_eq!(*settings.mode(), Mode::HumanVsAutomated);
    assert_eq!(*settings.think_delay_ms(), 500);
}

#[test]
fn test_rejects_unknown_keys_and_long_delay() {
    assert!(Settings::from_toml("colour = \"blue\"\n").is_err());

    let err = Settings::from_toml(&format!("think_delay_ms = {}\n", MAX_THINK_DELAY_MS + 1))
        .unwrap_err();
    assert!(err.message.contains("think_delay_ms"));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"human-vs-automated\"").unwrap();
    writeln!(file, "think_delay_ms = 250").unwrap();
    writeln!(file, "seed = 42").unwrap();

    let settings = Settings::load_or_default(file.path()).unwrap();
    assert_eq!(settings.think_delay(), Duration::from_millis(250));
    assert_eq!(*settings.seed(), Some(42));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_overrides_win_over_file_values() {
    let settings = Settings::from_toml("think_delay_ms = 100\nseed = 1\n")
        .unwrap()
        .with_overrides(Some(Mode::HumanVsHuman), None, Some(9))
        .unwrap();
    assert_eq!(*settings.mode(), Mode::HumanVsHuman);
    assert_eq!(*settings.think_delay_ms(), 100);
    assert_eq!(*settings.seed(), Some(9));

    assert!(
        Settings::default()
            .with_overrides(None, Some(MAX_THINK_DELAY_MS * 2), None)
            .is_err()
    );
}

#[test]
fn test_mode_parses_short_names() {
    assert_eq!("hvh".parse::<Mode>().unwrap(), Mode::HumanVsHuman);
    assert_eq!("HVA".parse::<Mode>().unwrap(), Mode::HumanVsAutomated);
    assert_eq!("human-vs-automated".parse::<Mode>().unwrap(), Mode::HumanVsAutomated);
}
