//! JSON persistence for ~/.skyward/ save files.

use crate::constants::{HIGH_SCORE_FILE, SAVE_DIR_NAME};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Get the ~/.skyward/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(SAVE_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a save file in ~/.skyward/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Load a JSON file from ~/.skyward/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let path = match save_path(filename) {
        Ok(p) => p,
        Err(_) => return T::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON to ~/.skyward/.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    let path = save_path(filename)?;
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

/// On-disk high score record.
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
struct HighScoreRecord {
    best: u32,
}

/// Durable best-score store. Missing or corrupt files read as 0.
pub struct HighScoreStore {
    filename: String,
}

impl HighScoreStore {
    pub fn new() -> Self {
        Self::with_filename(HIGH_SCORE_FILE)
    }

    /// Store backed by a custom filename (used by tests to avoid clobbering
    /// a real save).
    pub fn with_filename(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
        }
    }

    pub fn get(&self) -> u32 {
        load_json_or_default::<HighScoreRecord>(&self.filename).best
    }

    pub fn set(&self, best: u32) -> io::Result<()> {
        save_json(&self.filename, &HighScoreRecord { best })
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new()
    }
}
