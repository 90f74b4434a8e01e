#![forbid(unsafe_code)]

//! Persisted showcase toggles: dark mode and right-to-left layout.
//!
//! The pair is process-wide and shared by every widget mounted in the
//! showcase; mutation happens only through explicit user toggles, and
//! each toggle persists best-effort. Missing or corrupt files load as
//! defaults (both off) — a broken settings file must never keep the
//! showcase from starting.
//!
//! Writes use the write-then-rename pattern so a crash mid-save leaves
//! the previous file intact.

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const SETTINGS_FILE: &str = "showcase.json";

/// Errors from loading or saving settings.
#[derive(Debug)]
pub enum SettingsError {
    /// I/O failure reading or writing the settings file.
    Io(io::Error),
    /// The settings could not be encoded.
    Serialization(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "I/O error: {e}"),
            SettingsError::Serialization(e) => write!(f, "serialization error: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Serialization(e) => Some(e),
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(e: io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Serialization(e)
    }
}

/// The persisted toggle pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseSettings {
    /// Dark color scheme.
    pub dark_mode: bool,
    /// Right-to-left layout direction.
    pub rtl: bool,
}

/// Settings plus the file they round-trip through.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    /// Current settings values.
    pub settings: ShowcaseSettings,
}

impl SettingsStore {
    /// The default settings file location.
    ///
    /// `VITRINE_CONFIG_DIR` overrides the platform config directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(dir) = env::var("VITRINE_CONFIG_DIR") {
            return Some(PathBuf::from(dir).join(SETTINGS_FILE));
        }
        dirs::config_dir().map(|dir| dir.join("vitrine").join(SETTINGS_FILE))
    }

    /// Load from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    #[must_use]
    pub fn load(path: PathBuf) -> Self {
        let settings = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "corrupt settings, using defaults");
                    ShowcaseSettings::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => ShowcaseSettings::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable settings, using defaults");
                ShowcaseSettings::default()
            }
        };
        Self { path, settings }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flip dark mode and persist.
    pub fn toggle_dark_mode(&mut self) {
        self.settings.dark_mode = !self.settings.dark_mode;
        self.persist();
    }

    /// Flip layout direction and persist.
    pub fn toggle_rtl(&mut self) {
        self.settings.rtl = !self.settings.rtl;
        self.persist();
    }

    /// Write settings atomically.
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.settings)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to save settings");
        }
    }
}
