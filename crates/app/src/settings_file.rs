//! Persistent player settings: name, theme and audio levels.
//!
//! Settings are read once at startup and only affect presentation; the
//! simulation never sees them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::APP_NAME;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SettingsFile {
    pub format_version: u32,
    pub player_name: String,
    pub theme_index: usize,
    pub music_volume: f32,
    pub sounds_volume: f32,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            format_version: 1,
            player_name: "player".to_string(),
            theme_index: 0,
            music_volume: 0.7,
            sounds_volume: 0.7,
        }
    }
}

impl SettingsFile {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("settings.json");
            path
        })
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(settings)
    }

    /// Best-effort load; a missing or corrupt file falls back to defaults
    /// with a note on stderr, never an error dialog.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => settings,
            Err(error) if error.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(error) => {
                eprintln!("settings file unreadable ({error}); using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn settings_roundtrip_through_json() {
        let settings = SettingsFile {
            format_version: 1,
            player_name: "ada".to_string(),
            theme_index: 2,
            music_volume: 0.5,
            sounds_volume: 0.9,
        };
        let json = serde_json::to_string(&settings).expect("serialize");
        let decoded: SettingsFile = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(settings, decoded);
    }

    #[test]
    fn atomic_write_then_load() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        let settings = SettingsFile { theme_index: 1, ..SettingsFile::default() };

        settings.write_atomic(&path).expect("write");
        let loaded = SettingsFile::load(&path).expect("load");
        assert_eq!(settings, loaded);

        let tmp_path = path.with_extension("json.tmp");
        assert!(!tmp_path.exists());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("absent.json");
        assert_eq!(SettingsFile::load_or_default(Some(&path)), SettingsFile::default());
        assert_eq!(SettingsFile::load_or_default(None), SettingsFile::default());
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").expect("write corrupt file");
        assert_eq!(SettingsFile::load_or_default(Some(&path)), SettingsFile::default());
    }
}
