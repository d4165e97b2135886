use std::collections::HashMap;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::modules::films::application::ports::RatingStore;
use crate::shared::errors::AppResult;

/// Rating store kept entirely in memory.
///
/// Ratings are grouped per film; within a film one value is kept per
/// credential, so resubmitting replaces the earlier rating. DashMap entry
/// operations make each save and read atomic without a global lock.
#[derive(Debug, Default)]
pub struct InMemoryRatingStore {
    by_film: DashMap<String, HashMap<String, u8>>,
}

impl InMemoryRatingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RatingStore for InMemoryRatingStore {
    async fn save(&self, credential: &str, imdb_id: &str, rating: u8) -> AppResult<()> {
        self.by_film
            .entry(imdb_id.to_string())
            .or_default()
            .insert(credential.to_string(), rating);
        Ok(())
    }

    async fn ratings_for(&self, imdb_id: &str) -> AppResult<Vec<u8>> {
        Ok(self
            .by_film
            .get(imdb_id)
            .map(|per_credential| per_credential.values().copied().collect())
            .unwrap_or_default())
    }

    async fn rated_film_ids(&self) -> AppResult<Vec<String>> {
        Ok(self
            .by_film
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .map(|entry| entry.key().clone())
            .collect())
    }
}
