//! # API Facade
//!
//! A thin facade over the command layer and the single owner of catalog state.
//! The catalog is loaded once in [`CatalogApi::open`] and then mutated only
//! through the methods below, each of which persists before returning.
//!
//! The API never prints and never exits the process; callers get
//! `Result<CmdResult>` back and decide how to present it.
//!
//! `CatalogApi<S: CatalogStore>` is generic over the storage backend:
//! - Production: `CatalogApi<FileStore>`
//! - Testing: `CatalogApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{Catalog, Movie, SearchFilter};
use crate::store::CatalogStore;

pub struct CatalogApi<S: CatalogStore> {
    store: S,
    catalog: Catalog,
}

impl<S: CatalogStore> CatalogApi<S> {
    /// Load the catalog from `store`. This is the only read of the backing
    /// document for the lifetime of the API.
    pub fn open(store: S) -> Result<Self> {
        let movies = store.load()?;
        Ok(Self {
            store,
            catalog: Catalog::new(movies),
        })
    }

    pub fn list_movies(&self) -> commands::CmdResult {
        commands::list::run(&self.catalog)
    }

    pub fn add_movie(&mut self, movie: Movie) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.catalog, &mut self.store, movie)
    }

    pub fn update_movie(&mut self, index: usize, movie: Movie) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.catalog, &mut self.store, index, movie)
    }

    pub fn delete_movie(&mut self, index: usize) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.catalog, &mut self.store, index)
    }

    pub fn search_movies(&self, keyword: &str, criteria: &SearchFilter) -> commands::CmdResult {
        commands::search::run(&self.catalog, keyword, criteria)
    }

    pub fn movie(&self, index: usize) -> Option<&Movie> {
        self.catalog.get(index)
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, ListedMovie, MessageLevel, MovieDraft};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{arrival, dune, heat};
    use crate::store::memory::InMemoryStore;

    fn api(movies: &[Movie]) -> CatalogApi<InMemoryStore> {
        CatalogApi::open(InMemoryStore::with_movies(movies)).unwrap()
    }

    #[test]
    fn open_fails_when_nothing_to_load() {
        let err = CatalogApi::open(InMemoryStore::new()).err().unwrap();
        assert!(err.is_storage());
    }

    #[test]
    fn mutations_reach_the_store() {
        let mut api = api(&[dune(), heat()]);
        api.add_movie(arrival()).unwrap();
        api.update_movie(0, heat()).unwrap();
        api.delete_movie(1).unwrap();

        assert_eq!(api.store().load().unwrap(), vec![heat(), arrival()]);
        assert_eq!(api.store().save_count(), 3);
        assert_eq!(api.len(), 2);
    }

    #[test]
    fn failed_delete_keeps_state() {
        let mut api = api(&[dune()]);
        assert!(api.delete_movie(5).unwrap_err().is_index());
        assert_eq!(api.movie(0), Some(&dune()));
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn search_dispatches_with_both_stages() {
        let api = api(&[dune(), arrival(), heat()]);
        let result = api.search_movies("Villeneuve", &SearchFilter::new("sci-fi", "2021"));
        assert_eq!(result.listed_movies.len(), 1);
        assert_eq!(result.listed_movies[0].movie, dune());
    }

    #[test]
    fn list_reflects_current_state() {
        let mut api = api(&[]);
        assert!(api.is_empty());
        api.add_movie(dune()).unwrap();
        assert_eq!(api.list_movies().listed_movies.len(), 1);
    }
}
