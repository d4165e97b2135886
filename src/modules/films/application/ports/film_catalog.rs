use async_trait::async_trait;

use crate::modules::films::domain::{CatalogPage, FilmDescription};
use crate::shared::errors::AppResult;

/// Port (interface) for the external film catalog.
/// The catalog owns film descriptions and the pagination arithmetic for
/// name searches; infrastructure provides the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilmCatalog: Send + Sync {
    /// Page through films whose name matches the query.
    async fn by_name(&self, credential: &str, name: &str, page: u32) -> AppResult<CatalogPage>;

    /// Fetch one film description; fails with `FilmNotFound` when the
    /// catalog does not recognise the identifier.
    async fn by_id(&self, credential: &str, imdb_id: &str) -> AppResult<FilmDescription>;

    /// Whether the catalog recognises the identifier at all.
    async fn exists(&self, credential: &str, imdb_id: &str) -> AppResult<bool>;
}
