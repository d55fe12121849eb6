//! # Storage Layer
//!
//! The catalog is persisted as a whole: one JSON document holding the full
//! array of movies. The [`CatalogStore`] trait hides where that document lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage, a single backing file
//!   (`movies.json` by default)
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "title": "Dune", "director": "Villeneuve", "release_year": "2021", "genre": "Sci-Fi" }
//! ]
//! ```
//!
//! Every mutation rewrites the whole document. There is no append mode, no
//! backup and no atomic rename: a failure mid-write may leave a truncated file.

use crate::error::Result;
use crate::model::Movie;

pub mod fs;
#[cfg(any(test, feature = "test_utils"))]
pub mod memory;

/// Abstract interface for catalog persistence.
pub trait CatalogStore {
    /// Read and parse the full catalog.
    ///
    /// Fails with a storage error when the backing document is missing,
    /// unreadable or not a valid JSON array of movies.
    fn load(&self) -> Result<Vec<Movie>>;

    /// Serialize the full catalog and overwrite the backing document.
    fn save(&mut self, movies: &[Movie]) -> Result<()>;
}
