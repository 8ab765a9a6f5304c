use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;

pub const INITIAL_WIDTH: i32 = 600;
pub const INITIAL_HEIGHT: i32 = 300;

/// Feedback window geometry remembered between runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowState {
    /// Default geometry: 600x300 centred on a screen of the given size
    pub fn centered(screen_width: i32, screen_height: i32) -> Self {
        Self {
            x: ((screen_width - INITIAL_WIDTH) / 2).max(0),
            y: ((screen_height - INITIAL_HEIGHT) / 2).max(0),
            width: INITIAL_WIDTH,
            height: INITIAL_HEIGHT,
        }
    }

    pub fn is_usable(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Load saved geometry, or None if missing, corrupt or degenerate
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        let contents = fs::read_to_string(path).ok()?;
        match serde_json::from_str::<WindowState>(&contents) {
            Ok(state) if state.is_usable() => Some(state),
            Ok(state) => {
                log::warn!("Ignoring saved window geometry {:?}", state);
                None
            }
            Err(e) => {
                log::warn!("Failed to parse window state: {}. Using defaults.", e);
                None
            }
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get window state file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("interactive-feedback");
        path.push("window.json");
        path
    }
}
