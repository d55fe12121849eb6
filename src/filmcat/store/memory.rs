use super::CatalogStore;
use crate::error::{CatalogError, Result};
use crate::model::Movie;
use std::path::PathBuf;

const VIRTUAL_PATH: &str = "<memory>";

/// In-memory storage for testing.
///
/// Holds the serialized document like a file would, so an unseeded store
/// fails to load the same way a missing backing file does.
#[derive(Default)]
pub struct InMemoryStore {
    document: Option<String>,
    saves: usize,
    fail_next_save: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(movies: &[Movie]) -> Self {
        let mut store = Self::new();
        store.document = Some(serialize(movies));
        store
    }

    /// Make the next `save` fail with a storage error, as a full disk would.
    pub fn fail_next_save(&mut self) {
        self.fail_next_save = true;
    }

    /// Number of successful `save` calls since creation.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

fn serialize(movies: &[Movie]) -> String {
    // Vec<Movie> of plain strings always serializes.
    serde_json::to_string(movies).unwrap_or_else(|_| "[]".to_string())
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Movie>> {
        let document = self.document.as_ref().ok_or_else(|| CatalogError::Storage {
            path: PathBuf::from(VIRTUAL_PATH),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "catalog not seeded"),
        })?;
        serde_json::from_str(document).map_err(|source| CatalogError::StorageFormat {
            path: PathBuf::from(VIRTUAL_PATH),
            source,
        })
    }

    fn save(&mut self, movies: &[Movie]) -> Result<()> {
        if std::mem::take(&mut self.fail_next_save) {
            return Err(CatalogError::Storage {
                path: PathBuf::from(VIRTUAL_PATH),
                source: std::io::Error::other("simulated write failure"),
            });
        }
        self.document = Some(serialize(movies));
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

pub mod fixtures {
    use super::*;
    use crate::model::Catalog;

    pub fn dune() -> Movie {
        Movie::new("Dune", "Villeneuve", "2021", "Sci-Fi")
    }

    pub fn arrival() -> Movie {
        Movie::new("Arrival", "Villeneuve", "2016", "Sci-Fi")
    }

    pub fn heat() -> Movie {
        Movie::new("Heat", "Michael Mann", "1995", "Crime")
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub catalog: Catalog,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::from_movies(Vec::new())
        }

        pub fn from_movies(movies: Vec<Movie>) -> Self {
            Self {
                store: InMemoryStore::with_movies(&movies),
                catalog: Catalog::new(movies),
            }
        }

        pub fn with_movies(count: usize) -> Self {
            let movies = (1..=count)
                .map(|i| {
                    Movie::new(
                        format!("Test Movie {}", i),
                        format!("Director {}", i),
                        format!("{}", 2000 + i),
                        "Drama",
                    )
                })
                .collect();
            Self::from_movies(movies)
        }

        /// What a fresh process would see after the last save.
        pub fn reload(&self) -> Vec<Movie> {
            self.store.load().unwrap()
        }
    }
}
