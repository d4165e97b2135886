use std::sync::Arc;

use async_trait::async_trait;

use cinescore::modules::films::infrastructure::{InMemoryRatingStore, StaticAwardRegistry};
use cinescore::{AppError, AppResult, CatalogPage, FilmCatalog, FilmDescription, FilmService};

/// Catalog stub over a fixed film list, paged the way a real catalog
/// would page name searches.
pub struct FixedCatalog {
    films: Vec<FilmDescription>,
    page_size: usize,
}

impl FixedCatalog {
    pub fn new(films: Vec<FilmDescription>) -> Self {
        Self {
            films,
            page_size: 10,
        }
    }
}

#[async_trait]
impl FilmCatalog for FixedCatalog {
    async fn by_name(&self, _credential: &str, name: &str, page: u32) -> AppResult<CatalogPage> {
        let matching: Vec<FilmDescription> = self
            .films
            .iter()
            .filter(|film| film.name.contains(name))
            .cloned()
            .collect();
        let total_pages = (matching.len().div_ceil(self.page_size)).max(1) as u32;
        let films = matching
            .into_iter()
            .skip(page as usize * self.page_size)
            .take(self.page_size)
            .collect();
        Ok(CatalogPage {
            films,
            page,
            total_pages,
        })
    }

    async fn by_id(&self, _credential: &str, imdb_id: &str) -> AppResult<FilmDescription> {
        self.films
            .iter()
            .find(|film| film.imdb_id == imdb_id)
            .cloned()
            .ok_or_else(|| AppError::FilmNotFound(imdb_id.to_string()))
    }

    async fn exists(&self, _credential: &str, imdb_id: &str) -> AppResult<bool> {
        Ok(self.films.iter().any(|film| film.imdb_id == imdb_id))
    }
}

pub fn film(imdb_id: &str, name: &str, box_office: u64) -> FilmDescription {
    FilmDescription {
        imdb_id: imdb_id.to_string(),
        name: name.to_string(),
        box_office,
    }
}

pub fn service_with(films: Vec<FilmDescription>, winners: &[&str]) -> FilmService {
    let _ = env_logger::builder().is_test(true).try_init();
    FilmService::new(
        Arc::new(FixedCatalog::new(films)),
        Arc::new(StaticAwardRegistry::new(winners.iter().copied())),
        Arc::new(InMemoryRatingStore::new()),
    )
}

/// The fixture the service tests share: four rated-to-be films with
/// ascending box office and one film nobody rates.
pub fn default_service() -> FilmService {
    service_with(
        vec![
            film("id1", "Rated1", 1),
            film("id2", "Rated2", 2),
            film("id3", "Rated3", 3),
            film("id4", "Rated4", 4),
            film("id5", "Unrated", 5),
        ],
        &[],
    )
}
