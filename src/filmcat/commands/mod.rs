use crate::error::{CatalogError, Result};
use crate::model::{Catalog, Movie};

pub mod add;
pub mod delete;
pub mod list;
pub mod search;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// A movie paired with its position in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedMovie {
    pub index: usize,
    pub movie: Movie,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_movies: Vec<Movie>,
    pub listed_movies: Vec<ListedMovie>,
    /// Catalog length once the command finished.
    pub catalog_len: usize,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_movies(mut self, movies: Vec<Movie>) -> Self {
        self.affected_movies = movies;
        self
    }

    pub fn with_listed_movies(mut self, movies: Vec<ListedMovie>) -> Self {
        self.listed_movies = movies;
        self
    }

    pub fn with_catalog_len(mut self, len: usize) -> Self {
        self.catalog_len = len;
        self
    }
}

/// Field-by-field edit of an existing movie. `None` or a blank value keeps
/// the current field.
#[derive(Debug, Clone, Default)]
pub struct MovieDraft {
    pub title: Option<String>,
    pub director: Option<String>,
    pub release_year: Option<String>,
    pub genre: Option<String>,
}

impl MovieDraft {
    pub fn apply(&self, current: &Movie) -> Movie {
        fn pick(new: &Option<String>, old: &str) -> String {
            match new {
                Some(value) if !value.is_empty() => value.clone(),
                _ => old.to_string(),
            }
        }

        Movie {
            title: pick(&self.title, &current.title),
            director: pick(&self.director, &current.director),
            release_year: pick(&self.release_year, &current.release_year),
            genre: pick(&self.genre, &current.genre),
        }
    }
}

/// Bounds check shared by update and delete: `index` must be in `[0, len)`.
pub(crate) fn check_index(catalog: &Catalog, index: usize) -> Result<()> {
    if index < catalog.len() {
        Ok(())
    } else {
        Err(CatalogError::IndexOutOfRange {
            index,
            len: catalog.len(),
        })
    }
}

/// Parse a user-typed catalog position.
pub fn parse_index(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| CatalogError::InvalidIndex(trimmed.to_string()))
}
