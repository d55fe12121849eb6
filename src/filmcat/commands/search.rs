use crate::commands::{CmdMessage, CmdResult, ListedMovie};
use crate::model::{Catalog, Movie, SearchFilter};

/// Keyword match: case-sensitive on title, case-insensitive on director and genre.
pub fn matches_keyword(movie: &Movie, keyword: &str) -> bool {
    let keyword_lower = keyword.to_lowercase();
    movie.title.contains(keyword)
        || movie.director.to_lowercase().contains(&keyword_lower)
        || movie.genre.to_lowercase().contains(&keyword_lower)
}

pub fn matches_filter(movie: &Movie, filter: &SearchFilter) -> bool {
    let genre_ok =
        filter.genre.is_empty() || movie.genre.to_lowercase() == filter.genre.to_lowercase();
    let year_ok = filter.release_year.is_empty() || movie.release_year == filter.release_year;
    genre_ok && year_ok
}

pub fn search<I>(movies: I, keyword: &str) -> Vec<ListedMovie>
where
    I: IntoIterator<Item = ListedMovie>,
{
    movies
        .into_iter()
        .filter(|lm| matches_keyword(&lm.movie, keyword))
        .collect()
}

pub fn filter<I>(movies: I, criteria: &SearchFilter) -> Vec<ListedMovie>
where
    I: IntoIterator<Item = ListedMovie>,
{
    movies
        .into_iter()
        .filter(|lm| matches_filter(&lm.movie, criteria))
        .collect()
}

/// Search first, then filter the hits. Results keep their catalog index.
pub fn run(catalog: &Catalog, keyword: &str, criteria: &SearchFilter) -> CmdResult {
    let indexed = catalog
        .movies()
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, movie)| ListedMovie { index, movie });
    let hits = filter(search(indexed, keyword), criteria);

    tracing::debug!(keyword, hits = hits.len(), "search finished");

    let mut result = CmdResult::default().with_catalog_len(catalog.len());
    if hits.is_empty() {
        result.add_message(CmdMessage::info("No movies matched."));
    }
    result.with_listed_movies(hits)
}
