//! config.rs
//!
//! Runtime-tunable settings, optionally overridden by a json file sitting
//! next to the binary. Anything missing from the file falls back to the
//! default, so a partial file is fine.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use crate::systems::ui::RotationSpeed;

pub const SETTINGS_PATH: &str = "globe.json";

#[derive(Resource, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Settings {
    /// Globe spin per frame, radians.
    pub rotation_speed: f32,
    pub rotation_speed_min: f32,
    pub rotation_speed_max: f32,
    pub rotation_speed_step: f32,
    pub star_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rotation_speed: 0.001,
            rotation_speed_min: 0.0,
            rotation_speed_max: 0.01,
            rotation_speed_step: 0.0005,
            star_count: 400,
        }
    }
}

impl Settings {
    // a missing file is fine, a file that fails to parse is worth a warning
    pub fn load(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(settings) => {
                    info!("loaded settings from {path}");
                    settings
                }
                Err(e) => {
                    warn!("could not parse {path}: {e}, using defaults");
                    Settings::default()
                }
            },
            Err(_) => Settings::default(),
        }
    }
}

// runs in PreStartup so every Startup system sees the final values
pub fn load_settings(mut commands: Commands) {
    let settings = Settings::load(SETTINGS_PATH);
    commands.insert_resource(RotationSpeed(settings.rotation_speed));
    commands.insert_resource(settings);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load("no_such_settings_file.json");
        assert_eq!(settings.star_count, Settings::default().star_count);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"star_count": 12}"#).unwrap();
        assert_eq!(settings.star_count, 12);
        assert_eq!(settings.rotation_speed, Settings::default().rotation_speed);
    }

    #[test]
    fn test_garbage_falls_back() {
        assert!(serde_json::from_str::<Settings>("not json").is_err());
        // Settings::load maps that error to defaults
        let settings = Settings::load("/dev/null");
        assert_eq!(settings.rotation_speed, Settings::default().rotation_speed);
    }
}
