use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Catalog, Movie};
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(catalog: &mut Catalog, store: &mut S, movie: Movie) -> Result<CmdResult> {
    catalog.movies_mut().push(movie.clone());
    if let Err(e) = store.save(catalog.movies()) {
        catalog.movies_mut().pop();
        return Err(e);
    }

    let len = catalog.len();
    tracing::info!(title = %movie.title, len, "movie added");

    let mut result = CmdResult::default()
        .with_affected_movies(vec![movie])
        .with_catalog_len(len);
    result.add_message(CmdMessage::success("Movie added successfully!"));
    Ok(result)
}
