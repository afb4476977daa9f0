//! Runtime configuration
//!
//! Window and surface settings, loaded from a JSON file so a deployment can
//! change resolution or scaling without a rebuild. Missing file means
//! defaults; a file that exists but fails to parse is an error the caller
//! decides about.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_title() -> String {
    "slate".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Integer factor between surface pixels and window pixels.
    pub scale: u32,
    /// Lock presentation to the monitor refresh.
    pub vsync: bool,
    /// Linear filtering on scale-up (smoother and blurrier vs hard edges).
    pub interpolate: bool,
    /// Window title.
    pub title: String,
    /// Quit when escape is pressed.
    pub exit_on_escape: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 160,
            height: 120,
            scale: 4,
            vsync: true,
            interpolate: false,
            title: default_title(),
            exit_on_escape: true,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::default();
        assert_eq!(c.width, 160);
        assert_eq!(c.height, 120);
        assert_eq!(c.scale, 4);
        assert!(c.vsync);
        assert!(!c.interpolate);
        assert!(c.exit_on_escape);
    }

    #[test]
    fn test_json_round_trip() {
        let mut c = Config::default();
        c.width = 320;
        c.scale = 2;
        c.vsync = false;
        c.title = "demo".to_string();

        let path = std::env::temp_dir().join(format!("slate-config-{}.json", std::process::id()));
        c.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.width, 320);
        assert_eq!(loaded.height, c.height);
        assert_eq!(loaded.scale, 2);
        assert!(!loaded.vsync);
        assert_eq!(loaded.title, "demo");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: Config = serde_json::from_str(r#"{"width": 64, "height": 64}"#).unwrap();
        assert_eq!(parsed.width, 64);
        assert_eq!(parsed.scale, Config::default().scale);
        assert_eq!(parsed.title, "slate");
    }
}
