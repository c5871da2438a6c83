use std::path::PathBuf;

use thiserror::Error;

/// Fatal registry load failures. A source that exists but cannot be read
/// aborts the whole load; there is no partial-registry recovery because
/// match ordering depends on having the complete set.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read registry directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read registry source {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
