use crate::commands::{CmdMessage, CmdResult, ListedMovie};
use crate::model::Catalog;

pub fn run(catalog: &Catalog) -> CmdResult {
    let listed = catalog
        .movies()
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, movie)| ListedMovie { index, movie })
        .collect();
    let mut result = CmdResult::default().with_catalog_len(catalog.len());
    if catalog.is_empty() {
        result.add_message(CmdMessage::info("No movies in the catalog."));
    }
    result.with_listed_movies(listed)
}
