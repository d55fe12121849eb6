use crate::commands::{check_index, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Catalog, Movie};
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(
    catalog: &mut Catalog,
    store: &mut S,
    index: usize,
    movie: Movie,
) -> Result<CmdResult> {
    check_index(catalog, index)?;

    let previous = std::mem::replace(&mut catalog.movies_mut()[index], movie.clone());
    if let Err(e) = store.save(catalog.movies()) {
        catalog.movies_mut()[index] = previous;
        return Err(e);
    }

    tracing::info!(index, title = %movie.title, "movie updated");

    let mut result = CmdResult::default()
        .with_affected_movies(vec![movie])
        .with_catalog_len(catalog.len());
    result.add_message(CmdMessage::success("Movie details updated successfully!"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{arrival, dune, heat, StoreFixture};

    #[test]
    fn replaces_only_the_target_position() {
        let mut f = StoreFixture::from_movies(vec![dune(), heat()]);
        run(&mut f.catalog, &mut f.store, 0, arrival()).unwrap();
        assert_eq!(f.reload(), vec![arrival(), heat()]);
    }

    #[test]
    fn out_of_range_fails_and_leaves_file_untouched() {
        let mut f = StoreFixture::from_movies(vec![dune()]);
        let before = f.store.document().map(str::to_string);

        let err = run(&mut f.catalog, &mut f.store, 1, arrival()).unwrap_err();

        assert!(err.is_index());
        assert_eq!(f.store.save_count(), 0);
        assert_eq!(f.store.document().map(str::to_string), before);
        assert_eq!(f.catalog.movies(), &[dune()]);
    }

    #[test]
    fn failed_save_restores_previous_movie() {
        let mut f = StoreFixture::from_movies(vec![dune(), heat()]);
        f.store.fail_next_save();

        let err = run(&mut f.catalog, &mut f.store, 1, arrival()).unwrap_err();

        assert!(err.is_storage());
        assert_eq!(f.catalog.movies(), &[dune(), heat()]);
        assert_eq!(f.store.save_count(), 0);
        assert_eq!(f.reload(), vec![dune(), heat()]);
    }

    #[test]
    fn update_on_empty_catalog_fails() {
        let mut f = StoreFixture::new();
        assert!(run(&mut f.catalog, &mut f.store, 0, dune())
            .unwrap_err()
            .is_index());
    }
}
