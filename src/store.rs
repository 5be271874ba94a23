use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::diagram::Diagram;

/// Errors surfaced by a diagram store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize diagram: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write diagram: {0}")]
    Io(#[from] std::io::Error),

    #[error("store rejected diagram: {0}")]
    Rejected(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Narrow gateway the editor calls to persist a diagram.
///
/// Success yields the authoritative persisted value (the store may rewrite
/// or augment what it was given); failure must leave the caller free to keep
/// its in-memory state untouched.
pub trait DiagramStore {
    fn create(&self, diagram: Diagram) -> StoreResult<Diagram>;
}

/// Stores each diagram as a pretty-printed JSON file named after it.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    /// Load a previously saved diagram by name.
    pub fn open(&self, name: &str) -> StoreResult<Diagram> {
        let json = fs::read_to_string(self.path_for(name))?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Names of all saved diagrams, sorted, for the Open menu.
    pub fn list(&self) -> StoreResult<Vec<String>> {
        let mut names = Vec::new();
        if !self.dir.exists() {
            return Ok(names);
        }
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem() {
                    names.push(stem.to_string_lossy().into_owned());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

impl DiagramStore for FileStore {
    fn create(&self, diagram: Diagram) -> StoreResult<Diagram> {
        if diagram.name.trim().is_empty() {
            return Err(StoreError::Rejected("diagram name is empty".into()));
        }
        // The name becomes the filename; separators would let a save escape
        // the store directory.
        if diagram.name.contains(['/', '\\']) {
            return Err(StoreError::Rejected(
                "diagram name contains a path separator".into(),
            ));
        }
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(&diagram)?;
        fs::write(self.path_for(&diagram.name), &json)?;
        // Parse back what was written so callers adopt exactly the persisted
        // representation.
        Ok(serde_json::from_str(&json)?)
    }
}
