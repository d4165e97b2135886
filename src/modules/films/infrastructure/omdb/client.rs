use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use super::dto::{OmdbFilmResponse, OmdbSearchResponse};
use super::mapper;
use crate::modules::films::application::ports::FilmCatalog;
use crate::modules::films::domain::{CatalogPage, FilmDescription};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::RateLimiter;

const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com";

/// OMDb replies with this error text when a search matches nothing; that
/// is an empty result set, not a failure.
const NO_MATCH_ERROR: &str = "Movie not found!";

/// Configuration for the OMDb catalog adapter.
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub requests_per_second: f64,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            // Free-tier OMDb keys are capped at 1000 requests per day.
            requests_per_second: 4.0,
        }
    }
}

impl OmdbConfig {
    /// Read overrides from the environment (`OMDB_BASE_URL`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var("OMDB_BASE_URL") {
            config.base_url = base_url;
        }
        config
    }
}

/// `FilmCatalog` implementation backed by the OMDb HTTP API.
///
/// The caller credential is the OMDb `apikey`, forwarded per request
/// rather than stored in the client. OMDb search replies omit the
/// box-office figure, so `by_name` follows up with one detail request per
/// hit before handing the page to the core.
pub struct OmdbCatalog {
    client: Client,
    config: OmdbConfig,
    rate_limiter: Arc<RateLimiter>,
}

impl OmdbCatalog {
    pub fn new(config: OmdbConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent("cinescore/0.1")
            .build()?;
        Ok(Self {
            client,
            rate_limiter: Arc::new(RateLimiter::new(config.requests_per_second)),
            config,
        })
    }

    pub fn from_env() -> AppResult<Self> {
        Self::new(OmdbConfig::from_env())
    }

    async fn fetch_film(&self, credential: &str, imdb_id: &str) -> AppResult<OmdbFilmResponse> {
        self.rate_limiter.wait().await;
        let reply = self
            .client
            .get(&self.config.base_url)
            .query(&[("apikey", credential), ("i", imdb_id), ("type", "movie")])
            .send()
            .await?
            .json::<OmdbFilmResponse>()
            .await?;
        Ok(reply)
    }
}

#[async_trait]
impl FilmCatalog for OmdbCatalog {
    async fn by_name(&self, credential: &str, name: &str, page: u32) -> AppResult<CatalogPage> {
        self.rate_limiter.wait().await;
        // OMDb pages are 1-based on the wire.
        let wire_page = (page + 1).to_string();
        let reply = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("apikey", credential),
                ("s", name),
                ("type", "movie"),
                ("page", wire_page.as_str()),
            ])
            .send()
            .await?
            .json::<OmdbSearchResponse>()
            .await?;

        if !reply.is_ok() {
            if reply.error.as_deref() == Some(NO_MATCH_ERROR) {
                return Ok(CatalogPage {
                    films: Vec::new(),
                    page,
                    total_pages: 1,
                });
            }
            return Err(AppError::ApiError(
                reply
                    .error
                    .unwrap_or_else(|| "OMDb search failed".to_string()),
            ));
        }

        let total_pages = mapper::total_pages(reply.total_results.as_deref());
        // Search hits carry no box office; fetch the full record per hit.
        let mut films = Vec::with_capacity(reply.search.len());
        for item in reply.search {
            films.push(self.by_id(credential, &item.imdb_id).await?);
        }
        debug!(
            "OMDb search '{}' page {} returned {} films ({} pages)",
            name,
            page,
            films.len(),
            total_pages
        );
        Ok(CatalogPage {
            films,
            page,
            total_pages,
        })
    }

    async fn by_id(&self, credential: &str, imdb_id: &str) -> AppResult<FilmDescription> {
        let reply = self.fetch_film(credential, imdb_id).await?;
        if !reply.is_ok() {
            warn!(
                "OMDb does not recognise film {}: {}",
                imdb_id,
                reply.error.as_deref().unwrap_or("no error text")
            );
            return Err(AppError::FilmNotFound(imdb_id.to_string()));
        }
        mapper::to_description(reply)
    }

    async fn exists(&self, credential: &str, imdb_id: &str) -> AppResult<bool> {
        match self.by_id(credential, imdb_id).await {
            Ok(_) => Ok(true),
            Err(AppError::FilmNotFound(_)) => Ok(false),
            Err(other) => Err(other),
        }
    }
}
