//! Game settings and preferences
//!
//! Read once at startup from the JSON file named by `CMD_INVADER_SETTINGS`.
//! Cosmetic only: gameplay timing is fixed.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{PLAYER_GLYPH, PROJECTILE_GLYPH};
use crate::renderer::Glyphs;

/// Environment variable pointing at a settings file
pub const SETTINGS_ENV: &str = "CMD_INVADER_SETTINGS";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Glyph drawn for the player
    pub player_glyph: char,
    /// Glyph drawn for each projectile
    pub projectile_glyph: char,
    /// Draw on the alternate screen (restores the shell view on exit)
    pub alternate_screen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_glyph: PLAYER_GLYPH,
            projectile_glyph: PROJECTILE_GLYPH,
            alternate_screen: true,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load settings from the file named by `CMD_INVADER_SETTINGS`, if any.
    ///
    /// A missing or broken file is never fatal; defaults are used instead.
    pub fn load() -> Self {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring invalid settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn glyphs(&self) -> Glyphs {
        Glyphs {
            player: self.player_glyph,
            projectile: self.projectile_glyph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "player_glyph": "^" }"#).unwrap();
        assert_eq!(settings.player_glyph, '^');
        assert_eq!(settings.projectile_glyph, PROJECTILE_GLYPH);
        assert!(settings.alternate_screen);
    }

    #[test]
    fn test_invalid_json() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{ "player_glyph": "too long" }"#).is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_from(Path::new("/nonexistent/cmd-invader.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_glyphs() {
        let settings = Settings {
            player_glyph: 'W',
            projectile_glyph: '!',
            alternate_screen: false,
        };
        assert_eq!(
            settings.glyphs(),
            Glyphs {
                player: 'W',
                projectile: '!'
            }
        );
    }
}
