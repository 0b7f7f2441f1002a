// src/storage.rs

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::constants::{APP_DIR, STORAGE_KEY, THEME_KEY};
use crate::errors::{ParleyError, ParleyResult};
use crate::models::ChatState;
use crate::theme::Theme;

/// Durable key-value storage for the chat state and theme preference.
///
/// Each key is a file inside the state directory; the chat state is one
/// JSON document written synchronously after every mutation.
#[derive(Debug, Clone)]
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    /// Opens the store at `~/.config/parley`, creating the directory if
    /// missing.
    pub fn open_default() -> ParleyResult<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| ParleyError::storage_error("could not determine home directory"))?;
        Self::open(home.join(".config").join(APP_DIR))
    }

    /// Opens the store rooted at an explicit directory.
    pub fn open(dir: impl Into<PathBuf>) -> ParleyResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(StateStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn read_key(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn write_key(&self, key: &str, value: &str) -> ParleyResult<()> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    /// Loads the persisted chat state. Absent or malformed data falls back
    /// to the default empty state rather than failing.
    pub fn load_state(&self) -> ChatState {
        let Some(raw) = self.read_key(STORAGE_KEY) else {
            return ChatState::default();
        };
        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                warn!("discarding malformed chat state: {e}");
                ChatState::default()
            }
        }
    }

    pub fn save_state(&self, state: &ChatState) -> ParleyResult<()> {
        let serialized = serde_json::to_string_pretty(state)?;
        self.write_key(STORAGE_KEY, &serialized)
    }

    /// Loads the theme preference. Anything other than "light" means dark.
    pub fn load_theme(&self) -> Theme {
        match self.read_key(THEME_KEY).as_deref().map(str::trim) {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn save_theme(&self, theme: Theme) -> ParleyResult<()> {
        self.write_key(THEME_KEY, theme.as_str())
    }
}
