// File: src/persistence.rs
use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Application-scoped preferences file name.
pub const PREFERENCES_FILE: &str = "ekf-preferences.bin";

/// The only state that outlives a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Preferences {
    pub dark_mode: bool,
}

pub fn default_preferences_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("keyword-finder");
    path.push(PREFERENCES_FILE);
    path
}

pub fn save_to_disk(prefs: &Preferences, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let writer = BufWriter::new(&temp_file);
        bincode::serialize_into(writer, prefs)?;
    }
    temp_file.persist(path)?;
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<Preferences> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(bincode::deserialize_from(reader)?)
}

/// Preferences bound to a file. Storage failures never bubble up: a missing
/// or unreadable file reads as defaults and failed writes are only logged.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
    prefs: Preferences,
}

impl PreferenceStore {
    /// A store with no backing file; toggles last for the process only.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            prefs: Preferences::default(),
        }
    }

    pub fn from_file_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let prefs = match load_from_disk(&path) {
            Ok(prefs) => prefs,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no readable preferences, using defaults");
                Preferences::default()
            }
        };
        Self { path: Some(path), prefs }
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    pub fn dark_mode(&self) -> bool {
        self.prefs.dark_mode
    }

    /// Flips the dark-mode flag, persists it and returns the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.prefs.dark_mode = !self.prefs.dark_mode;
        if let Some(path) = &self.path {
            if let Err(e) = save_to_disk(&self.prefs, path) {
                warn!(path = %path.display(), error = %e, "could not persist preferences");
            }
        }
        self.prefs.dark_mode
    }
}
