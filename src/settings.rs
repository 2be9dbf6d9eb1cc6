//! Persisted visualizer settings.
//!
//! A small key=value store holding the last-used algorithm, buffer/grid
//! sizes, and playback speed. Loaded once at startup and written back
//! whenever the host changes a value. A missing or malformed file is
//! treated as empty and write failures are logged and dropped — nothing in
//! the stepping core depends on persistence existing or succeeding.

use rustc_hash::FxHashMap;
use std::fs;
use std::path::PathBuf;

/// File name under the home directory.
pub const SETTINGS_FILE: &str = ".stepviz";

pub const KEY_ALGORITHM: &str = "algorithm";
pub const KEY_SORT_LENGTH: &str = "sort_length";
pub const KEY_MAZE_WIDTH: &str = "maze_width";
pub const KEY_MAZE_HEIGHT: &str = "maze_height";
pub const KEY_SPEED: &str = "speed";

/// Key-value settings backed by a dotfile.
pub struct Settings {
    path: PathBuf,
    values: FxHashMap<String, String>,
}

impl Settings {
    /// Load from `path`, treating a missing or unreadable file as empty.
    ///
    /// Lines are `key=value`; blank lines and `#` comments are skipped, and
    /// lines without a `=` are ignored rather than rejected.
    pub fn load(path: PathBuf) -> Self {
        let mut values = FxHashMap::default();
        match fs::read_to_string(&path) {
            Ok(text) => {
                for line in text.lines() {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some((key, value)) = line.split_once('=') {
                        values.insert(key.trim().to_string(), value.trim().to_string());
                    }
                }
            }
            Err(err) => {
                log::debug!("no settings loaded from {}: {}", path.display(), err);
            }
        }
        Settings { path, values }
    }

    /// The default location: `$HOME/.stepviz`, or the current directory
    /// when no home is set.
    pub fn default_path() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(SETTINGS_FILE)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    /// Fetch and parse a numeric setting; unparsable values read as absent.
    pub fn get_usize(&self, key: &str) -> Option<usize> {
        self.get(key)?.parse().ok()
    }

    /// Store a value and write the file back immediately.
    pub fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
        self.save();
    }

    /// Write all values back, sorted for a stable file. Failures are
    /// logged and swallowed.
    pub fn save(&self) {
        let mut keys: Vec<&String> = self.values.keys().collect();
        keys.sort();

        let mut out = String::new();
        for key in keys {
            out.push_str(key);
            out.push('=');
            out.push_str(&self.values[key]);
            out.push('\n');
        }

        if let Err(err) = fs::write(&self.path, out) {
            log::warn!("failed to save settings to {}: {}", self.path.display(), err);
        }
    }
}
