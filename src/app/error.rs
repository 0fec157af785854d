use std::path::PathBuf;
use thiserror::Error;

/// Every way a dump run can abort. Nothing is written once one of these is raised.
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("failed to determine working directory: {0}")]
    Resolution(#[source] std::io::Error),

    #[error("failed to traverse {path}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type DumpResult<T> = Result<T, DumpError>;
