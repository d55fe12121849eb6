use super::CatalogStore;
use crate::error::{CatalogError, Result};
use crate::model::Movie;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_err(&self, source: std::io::Error) -> CatalogError {
        CatalogError::Storage {
            path: self.path.clone(),
            source,
        }
    }
}

impl CatalogStore for FileStore {
    fn load(&self) -> Result<Vec<Movie>> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.storage_err(e))?;
        let movies: Vec<Movie> =
            serde_json::from_str(&content).map_err(|source| CatalogError::StorageFormat {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), count = movies.len(), "catalog loaded");
        Ok(movies)
    }

    fn save(&mut self, movies: &[Movie]) -> Result<()> {
        let content =
            serde_json::to_string_pretty(movies).map_err(|source| CatalogError::StorageFormat {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, content).map_err(|e| self.storage_err(e))?;
        tracing::debug!(path = %self.path.display(), count = movies.len(), "catalog saved");
        Ok(())
    }
}
