//! Config file → credential table → controller.

use indoc::indoc;
use profilegate::config::Config;
use profilegate::keymap::{Action, KeymapPreset};
use profilegate::{NullRenderer, Navigator, ScreenController};
use crossterm::event::{KeyCode, KeyModifiers};
use tempfile::TempDir;

#[test]
fn test_configured_profiles_drive_navigation() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        indoc! {r#"
            theme = "light"

            [keymap]
            preset = "vim"
            overrides = [{ key = "x", action = "quit" }]

            [[profiles]]
            name = "Parents"
            pin = "2468"

            [[profiles]]
            name = "Kids"
        "#},
    )
    .unwrap();

    let config = Config::load_or_create(&config_path).unwrap();
    assert_eq!(config.theme, "light");
    assert_eq!(config.keymap.preset, KeymapPreset::Vim);
    assert_eq!(
        config.keymap.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
        Some(Action::Quit)
    );
    assert_eq!(config.profile_names(), vec!["Parents", "Kids"]);

    let mut c = ScreenController::new(config.credential_table(), NullRenderer);
    c.select_profile("Kids");
    assert_eq!(c.state(), &Navigator::profile_home("Kids"));

    c.return_to_selector();
    c.select_profile("Parents");
    assert_eq!(c.state(), &Navigator::pin_entry("Parents"));
    c.submit_pin("2468");
    assert_eq!(c.state(), &Navigator::profile_home("Parents"));
}

#[test]
fn test_first_run_uses_builtin_profiles() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("profilegate").join("config.toml");

    let config = Config::load_or_create(&config_path).unwrap();
    assert!(config_path.exists());

    let mut c = ScreenController::new(config.credential_table(), NullRenderer);
    c.select_profile("MKA");
    c.submit_pin("1234");
    assert_eq!(c.state(), &Navigator::profile_home("MKA"));

    // A second load reads the written file back unchanged
    assert_eq!(Config::load_or_create(&config_path).unwrap(), config);
}

#[test]
fn test_invalid_config_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "profiles = 3").unwrap();

    let err = Config::load_or_create(&config_path).unwrap_err();
    assert!(format!("{:#}", err).contains("config.toml"));
}
