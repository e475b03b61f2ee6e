use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a fixture file from disk
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in fixture {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
