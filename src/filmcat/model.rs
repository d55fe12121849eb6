use serde::{Deserialize, Serialize};

/// A single catalog entry. Movies have no identifier; their position in the
/// catalog is their identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub director: String,
    // Kept as text: filtering compares it by exact string equality.
    pub release_year: String,
    pub genre: String,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        release_year: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            release_year: release_year.into(),
            genre: genre.into(),
        }
    }
}

/// The ordered, in-memory catalog. Order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    pub(crate) fn movies_mut(&mut self) -> &mut Vec<Movie> {
        &mut self.movies
    }
}

/// Narrowing criteria for the "Search and Filter" flow. An empty field means
/// "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub genre: String,
    pub release_year: String,
}

impl SearchFilter {
    pub fn new(genre: impl Into<String>, release_year: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
            release_year: release_year.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.genre.is_empty() && self.release_year.is_empty()
    }
}
