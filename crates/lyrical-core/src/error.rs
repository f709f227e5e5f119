use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by catalog storage operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Catalog not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Invalid catalog {}: {source}", .path.display())]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Line {line}: expected 3 fields, found {found}")]
    Import { line: usize, found: usize },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
