//! Runtime configuration.
//!
//! Everything has a default, so a config file only needs the keys it changes:
//!
//! ```json
//! { "seed": 7, "rules": { "target_score": 3000 }, "audio": { "enabled": false } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::layout::Layout;
use crate::core::rules::{Difficulty, Rules};
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
    pub cell_size: f32,
    pub fps: u32,
    /// How long the outcome message stays up before the process exits.
    pub end_hold_ms: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            title: "HydroDrive 5000 Challenge".to_string(),
            cell_size: 40.0,
            fps: 30,
            end_hold_ms: 2000,
        }
    }
}

impl WindowConfig {
    pub fn layout(&self) -> Layout {
        Layout::new(self.width, self.height, self.cell_size)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    pub music_volume: f32,
    pub alert_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { enabled: true, music_volume: 0.5, alert_volume: 0.55 }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub rules: Rules,
    pub audio: AudioConfig,
    /// Directory searched for textures and sounds.
    pub assets: Option<PathBuf>,
    /// Authored maze file; the built-in course when absent.
    pub maze: Option<PathBuf>,
    pub seed: Option<u64>,
    /// Preselected difficulty; skips the menu.
    pub difficulty: Option<Difficulty>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        serde_json::from_str(&text).map_err(|source| Error::Config { path: path.to_path_buf(), source })
    }

    pub fn asset_dir(&self) -> PathBuf {
        self.assets.clone().unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{ "seed": 7, "difficulty": "hard", "rules": {{ "target_score": 3000 }} }}"#).unwrap();
        let cfg = Config::load(f.path()).unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.difficulty, Some(Difficulty::Hard));
        assert_eq!(cfg.rules.target_score, 3000);
        assert_eq!(cfg.rules.station_cost, 100);
        assert_eq!(cfg.window, WindowConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_bad_json() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{{ not json").unwrap();
        assert!(matches!(Config::load(f.path()).unwrap_err(), Error::Config { .. }));
    }

    #[test]
    fn test_default_layout() {
        assert_eq!(WindowConfig::default().layout(), Layout::default());
    }
}
