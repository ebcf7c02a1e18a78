use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{FontId, ThemeId};

pub const DEFAULT_FOCUS_SECS: u32 = 25 * 60;
pub const DEFAULT_BREAK_SECS: u32 = 5 * 60;

/// User-chosen configuration. An immutable copy is handed to every session;
/// edits made afterwards only affect sessions started later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub focus_secs: u32,
    pub break_secs: u32,
    pub font: FontId,
    pub theme: ThemeId,
    /// Generated backdrop URL; when present it overrides the theme's
    /// backdrop identity and the theme colors act as fallback only.
    pub custom_background: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_secs: DEFAULT_FOCUS_SECS,
            break_secs: DEFAULT_BREAK_SECS,
            font: FontId::Block,
            theme: ThemeId::ClassicBlack,
            custom_background: None,
        }
    }
}

impl Settings {
    /// A record read back from disk is only trusted if both durations are
    /// usable. Enum fields already failed deserialization if unknown.
    pub fn is_valid(&self) -> bool {
        self.focus_secs > 0 && self.break_secs > 0
    }
}

pub trait SettingsStore {
    fn load(&self) -> Settings;
    fn save(&self, settings: &Settings) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "fokus") {
            pd.config_dir().join("settings.json")
        } else {
            PathBuf::from("fokus_settings.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Settings {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(settings) = serde_json::from_slice::<Settings>(&bytes) {
                if settings.is_valid() {
                    return settings;
                }
            }
        }
        Settings::default()
    }

    fn save(&self, settings: &Settings) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(settings).unwrap_or_default();
        fs::write(&self.path, data)
    }
}
