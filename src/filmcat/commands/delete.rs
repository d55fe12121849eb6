use crate::commands::{check_index, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Catalog;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(catalog: &mut Catalog, store: &mut S, index: usize) -> Result<CmdResult> {
    check_index(catalog, index)?;

    let removed = catalog.movies_mut().remove(index);
    if let Err(e) = store.save(catalog.movies()) {
        catalog.movies_mut().insert(index, removed);
        return Err(e);
    }

    tracing::info!(index, title = %removed.title, "movie deleted");

    let mut result = CmdResult::default()
        .with_affected_movies(vec![removed])
        .with_catalog_len(catalog.len());
    result.add_message(CmdMessage::success("Movie deleted successfully!"));
    Ok(result)
}
