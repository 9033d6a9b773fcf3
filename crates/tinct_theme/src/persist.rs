//! Theme selection persistence
//!
//! Only the selected style tag (`"system"`, `"light"`, `"dark"`, `"custom"`)
//! is persisted, never palette contents. Persistence is best-effort
//! throughout: the manager logs failures and carries on, and a missing
//! selection simply means "use the default".

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("selection io: {0}")]
    Io(#[from] io::Error),

    #[error("selection parse: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("selection encode: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Backing storage for the persisted style selection
pub trait SelectionStore: Send + Sync {
    /// Read the persisted tag. `Ok(None)` means nothing was ever saved.
    fn load(&self) -> Result<Option<String>, PersistError>;

    /// Persist a tag, replacing any previous selection.
    fn save(&self, tag: &str) -> Result<(), PersistError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct SelectionFile {
    theme: String,
}

/// TOML-file-backed selection store
#[derive(Debug)]
pub struct FileSelectionStore {
    path: PathBuf,
}

impl FileSelectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SelectionStore for FileSelectionStore {
    fn load(&self) -> Result<Option<String>, PersistError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let file: SelectionFile = toml::from_str(&content)?;
        Ok(Some(file.theme))
    }

    fn save(&self, tag: &str) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(&SelectionFile {
            theme: tag.to_string(),
        })?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory selection store for tests and previews
#[derive(Debug, Default)]
pub struct MemorySelectionStore {
    slot: Mutex<Option<String>>,
}

impl MemorySelectionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for MemorySelectionStore {
    fn load(&self) -> Result<Option<String>, PersistError> {
        Ok(self.slot.lock().expect("selection slot lock poisoned").clone())
    }

    fn save(&self, tag: &str) -> Result<(), PersistError> {
        *self.slot.lock().expect("selection slot lock poisoned") = Some(tag.to_string());
        Ok(())
    }
}
