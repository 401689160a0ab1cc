//! Integration tests for ConfigManager and settings-driven discovery
//!
//! These tests verify:
//! - Settings loading and saving
//! - Default settings when no file exists
//! - Hand-written YAML with partial keys
//! - Loaded settings feeding the GameInfoBuilder

use asset_identity::services::GAMEINFO_FILE_NAME;
use asset_identity::{ConfigManager, GameInfoBuilder, ResolverSettings};
use camino::Utf8PathBuf;
use std::fs;
use tempfile::TempDir;

fn create_test_config_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, config_path)
}

#[test]
fn test_create_config_manager() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    assert_eq!(manager.config_dir(), &config_path);
}

#[test]
fn test_config_dir_created() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let nested = config_path.join("Rbx2Source").join("config");

    let manager = ConfigManager::new(&nested).unwrap();

    assert!(nested.exists());
    assert_eq!(manager.settings_path(), nested.join("Resolver Settings.yaml"));
}

#[test]
fn test_load_default_settings() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    let settings = manager.load_settings().unwrap();

    assert_eq!(settings.model_compiler, "studiomdl.exe");
    assert_eq!(settings.model_viewer, "hlmv.exe");
    assert_eq!(settings.preferred_directory("Half-Life 2"), Some("hl2"));
    assert!(!settings.debug_mode);
}

#[test]
fn test_hand_written_settings() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    let yaml = r#"Resolver_Settings:
  Preferred Directories:
    Half-Life 2: hl2
    "Half-Life 2: Episode Two": ep2
  Model Viewer: hlmv_x64.exe
"#;
    fs::write(manager.settings_path(), yaml).unwrap();

    let settings = manager.load_settings().unwrap();

    assert_eq!(
        settings.preferred_directory("Half-Life 2: Episode Two"),
        Some("ep2")
    );
    assert_eq!(settings.model_viewer, "hlmv_x64.exe");
    assert_eq!(settings.model_compiler, "studiomdl.exe");
}

#[test]
fn test_settings_round_trip() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    let mut settings = ResolverSettings::default();
    settings.debug_mode = true;
    settings.model_compiler = "studiomdl_x64.exe".to_string();
    manager.save_settings(&settings).unwrap();

    let loaded = manager.load_settings().unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_loaded_settings_drive_builder() {
    let (_temp_dir, root) = create_test_config_dir();
    let manager = ConfigManager::new(root.join("config")).unwrap();

    let mut settings = ResolverSettings::default();
    settings.model_viewer = "hlmv_x64.exe".to_string();
    manager.save_settings(&settings).unwrap();

    let game_dir = root.join("garrysmod");
    fs::create_dir_all(&game_dir).unwrap();
    let gameinfo = game_dir.join(GAMEINFO_FILE_NAME);
    fs::write(&gameinfo, "\"GameInfo\"\n{\n\tgame \"Garry's Mod\"\n}\n").unwrap();
    fs::create_dir_all(root.join("bin")).unwrap();
    fs::write(root.join("bin").join("hlmv_x64.exe"), b"MZ").unwrap();

    let builder = GameInfoBuilder::with_settings(manager.load_settings().unwrap());
    let info = builder.build(&gameinfo).unwrap();

    assert_eq!(info.game_name(), "Garry's Mod");
    assert_eq!(
        info.model_viewer_path(),
        Some(root.join("bin").join("hlmv_x64.exe").as_path())
    );
    assert!(!info.is_ready_to_use());
}
