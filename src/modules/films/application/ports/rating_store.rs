use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// Port persisting rating submissions.
///
/// One value is kept per (credential, film) pair: a later submission from
/// the same credential replaces the earlier one, which keeps the average
/// over all raters meaningful. Implementations must make each call
/// individually atomic; no ordering is promised between a save from one
/// caller and a read from another.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingStore: Send + Sync {
    async fn save(&self, credential: &str, imdb_id: &str, rating: u8) -> AppResult<()>;

    /// All ratings currently stored for a film, one per credential, in no
    /// particular order.
    async fn ratings_for(&self, imdb_id: &str) -> AppResult<Vec<u8>>;

    /// Identifiers with at least one stored rating.
    async fn rated_film_ids(&self) -> AppResult<Vec<String>>;
}
