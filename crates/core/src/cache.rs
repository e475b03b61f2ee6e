//! Process-wide parse cache for fixture files.

use dashmap::DashMap;
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::FixtureError;

/// Write-once cache of parsed fixture documents keyed by file path.
///
/// Entries are never invalidated. Two concurrent first loads of the same path
/// may both parse the file, but only the first insert is kept and both callers
/// observe equal documents. Failed loads are not cached.
#[derive(Debug, Default)]
pub struct FixtureCache {
    documents: DashMap<PathBuf, Arc<JsonValue>>,
}

impl FixtureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached parse of `path`, reading and parsing it on first use
    pub fn load(&self, path: &Path) -> Result<Arc<JsonValue>, FixtureError> {
        if let Some(document) = self.documents.get(path) {
            return Ok(Arc::clone(document.value()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: JsonValue =
            serde_json::from_str(&content).map_err(|source| FixtureError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "Fixture loaded");

        let entry = self
            .documents
            .entry(path.to_path_buf())
            .or_insert_with(|| Arc::new(parsed));
        Ok(Arc::clone(entry.value()))
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.documents.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
