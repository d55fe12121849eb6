use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Storage error ({}): {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog file ({}): {source}", .path.display())]
    StorageFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Lookup error: {0}")]
    Lookup(String),

    #[error("Lookup request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Index {index} is out of range (catalog has {len} movies)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid index: {0:?}")]
    InvalidIndex(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            CatalogError::Storage { .. } | CatalogError::StorageFormat { .. }
        )
    }

    pub fn is_lookup(&self) -> bool {
        matches!(self, CatalogError::Lookup(_) | CatalogError::Http(_))
    }

    pub fn is_index(&self) -> bool {
        matches!(
            self,
            CatalogError::IndexOutOfRange { .. } | CatalogError::InvalidIndex(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
