//! Settings persistence
//!
//! Saves and loads [`TrainerSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! Settings live in `settings.json` inside the user's configuration
//! directory, e.g. `~/.config/opening-trainer/settings.json` on Linux.
//! Falls back to `./settings.json` if no configuration directory exists.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings
//! - Save failures are returned to the caller, who logs them

use crate::core::error::CoreResult;
use crate::core::settings::TrainerSettings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the settings file path
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "opening-trainer") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Load settings from the default location
pub fn load_settings() -> TrainerSettings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`, using defaults if the file is missing or invalid
pub fn load_settings_from(path: &Path) -> TrainerSettings {
    if !path.exists() {
        info!(
            "[SETTINGS] No settings file found at {:?}. Using defaults.",
            path
        );
        return TrainerSettings::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<TrainerSettings>(&contents) {
            Ok(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to parse settings file at {:?}: {}. Using defaults.",
                    path, e
                );
                TrainerSettings::default()
            }
        },
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to read settings file at {:?}: {}. Using defaults.",
                path, e
            );
            TrainerSettings::default()
        }
    }
}

/// Save settings to the default location
pub fn save_settings(settings: &TrainerSettings) -> CoreResult<PathBuf> {
    let path = settings_path();
    save_settings_to(settings, &path)?;
    Ok(path)
}

/// Save settings to `path`, creating the parent directory if needed
pub fn save_settings_to(settings: &TrainerSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "opening-trainer-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = scratch_dir("missing");
        let settings = load_settings_from(&dir.join(SETTINGS_FILENAME));
        assert_eq!(settings, TrainerSettings::default());
    }

    #[test]
    fn test_save_then_load_preserves_values() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("nested").join(SETTINGS_FILENAME);
        let settings = TrainerSettings {
            skill_level: 7,
            opening: "sicilian".to_string(),
            rng_seed: Some(42),
            ..Default::default()
        };

        save_settings_to(&settings, &path).unwrap();
        assert_eq!(load_settings_from(&path), settings);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_garbage_file_yields_defaults() {
        let dir = scratch_dir("garbage");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(SETTINGS_FILENAME);
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_settings_from(&path), TrainerSettings::default());

        let _ = fs::remove_dir_all(&dir);
    }
}
