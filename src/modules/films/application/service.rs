use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};

use super::ports::{AwardRegistry, FilmCatalog, RatingStore};
use crate::modules::films::domain::{validation, FilmDescription, FilmView};
use crate::shared::application::Page;
use crate::shared::errors::{AppError, AppResult};

/// Aggregation service fusing the external catalog, the award registry
/// and the rating store into unified film views.
///
/// Every operation is one request/response cycle: validate, call the
/// collaborators, assemble views. No state is carried between calls, so
/// the service can be shared across concurrent callers. Collaborator
/// failures propagate to the caller unchanged.
pub struct FilmService {
    catalog: Arc<dyn FilmCatalog>,
    awards: Arc<dyn AwardRegistry>,
    ratings: Arc<dyn RatingStore>,
}

impl FilmService {
    pub fn new(
        catalog: Arc<dyn FilmCatalog>,
        awards: Arc<dyn AwardRegistry>,
        ratings: Arc<dyn RatingStore>,
    ) -> Self {
        Self {
            catalog,
            awards,
            ratings,
        }
    }

    /// Search the catalog by name and enrich every hit with its award
    /// status and accumulated rating. Catalog item order and page
    /// arithmetic are preserved.
    pub async fn search(
        &self,
        credential: &str,
        name: &str,
        page: i32,
    ) -> AppResult<Page<FilmView>> {
        validation::require_credential(credential)?;
        validation::require_name(name)?;
        let page = validation::require_page_number(page)?;

        let catalog_page = self.catalog.by_name(credential, name, page).await?;
        debug!(
            "Catalog returned {} films for '{}' (page {} of {})",
            catalog_page.films.len(),
            name,
            catalog_page.page,
            catalog_page.total_pages
        );

        let mut views = Vec::with_capacity(catalog_page.films.len());
        for description in catalog_page.films {
            views.push(self.assemble_view(description).await?);
        }
        Ok(Page::new(views, catalog_page.page, catalog_page.total_pages))
    }

    /// Record a rating for a film the catalog knows about.
    ///
    /// A repeated submission from the same credential overwrites the
    /// previous value. Success is the absence of an error.
    pub async fn rate(&self, credential: &str, imdb_id: &str, rating: u8) -> AppResult<()> {
        validation::require_credential(credential)?;
        validation::require_identifier(imdb_id)?;
        validation::require_rating(rating)?;

        if !self.catalog.exists(credential, imdb_id).await? {
            return Err(AppError::FilmNotFound(imdb_id.to_string()));
        }
        self.ratings.save(credential, imdb_id, rating).await?;
        info!("Recorded rating {} for film {}", rating, imdb_id);
        Ok(())
    }

    /// List every rated film ordered by box-office revenue, highest first.
    ///
    /// The rating store decides which films are candidates, so an unrated
    /// film never appears here regardless of its revenue; descriptions are
    /// fetched per candidate from the catalog. Films with equal box office
    /// are ordered by identifier so the ranking is reproducible.
    pub async fn top_rated_sorted_by_box_office(
        &self,
        credential: &str,
        page: i32,
        page_size: i32,
    ) -> AppResult<Page<FilmView>> {
        validation::require_credential(credential)?;
        let page = validation::require_page_number(page)?;
        let page_size = validation::require_page_size(page_size)?;

        let started = Instant::now();
        let candidates = self.ratings.rated_film_ids().await?;
        let mut views = Vec::with_capacity(candidates.len());
        for imdb_id in candidates {
            let description = self.catalog.by_id(credential, &imdb_id).await?;
            views.push(self.assemble_view(description).await?);
        }
        views.sort_by(|a, b| {
            b.box_office
                .cmp(&a.box_office)
                .then_with(|| a.imdb_id.cmp(&b.imdb_id))
        });
        debug!("Ranked {} rated films in {:?}", views.len(), started.elapsed());

        Ok(Page::slice(views, page, page_size))
    }

    async fn assemble_view(&self, description: FilmDescription) -> AppResult<FilmView> {
        let award_winner = self.awards.is_winner(&description.name).await?;
        let ratings = self.ratings.ratings_for(&description.imdb_id).await?;
        Ok(FilmView::assemble(description, award_winner, &ratings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::films::application::ports::{
        MockAwardRegistry, MockFilmCatalog, MockRatingStore,
    };
    use crate::modules::films::domain::CatalogPage;
    use mockall::predicate::eq;

    fn service(
        catalog: MockFilmCatalog,
        awards: MockAwardRegistry,
        ratings: MockRatingStore,
    ) -> FilmService {
        FilmService::new(Arc::new(catalog), Arc::new(awards), Arc::new(ratings))
    }

    /// A service whose collaborators panic on any call. Used to prove that
    /// validation rejects the request before anything external happens.
    fn untouchable_service() -> FilmService {
        service(
            MockFilmCatalog::new(),
            MockAwardRegistry::new(),
            MockRatingStore::new(),
        )
    }

    fn description(imdb_id: &str, name: &str, box_office: u64) -> FilmDescription {
        FilmDescription {
            imdb_id: imdb_id.to_string(),
            name: name.to_string(),
            box_office,
        }
    }

    #[tokio::test]
    async fn rate_rejects_blank_credential_before_any_collaborator_call() {
        let svc = untouchable_service();
        let err = svc.rate("  ", "tt0111161", 5).await.unwrap_err();
        assert_eq!(err, AppError::CredentialRequired);
    }

    #[tokio::test]
    async fn rate_checks_credential_before_identifier_and_rating() {
        let svc = untouchable_service();
        // Identifier and rating are also invalid; the credential rule wins.
        let err = svc.rate("", "", 0).await.unwrap_err();
        assert_eq!(err, AppError::CredentialRequired);
    }

    #[tokio::test]
    async fn rate_checks_identifier_before_rating() {
        let svc = untouchable_service();
        let err = svc.rate("token", "", 0).await.unwrap_err();
        assert_eq!(err, AppError::IdentifierRequired);
    }

    #[tokio::test]
    async fn rate_rejects_out_of_range_rating_without_catalog_lookup() {
        let svc = untouchable_service();
        assert_eq!(
            svc.rate("token", "tt1", 0).await.unwrap_err(),
            AppError::RatingOutOfRange
        );
        assert_eq!(
            svc.rate("token", "tt1", 11).await.unwrap_err(),
            AppError::RatingOutOfRange
        );
    }

    #[tokio::test]
    async fn rate_fails_when_catalog_does_not_know_the_film() {
        let mut catalog = MockFilmCatalog::new();
        catalog
            .expect_exists()
            .with(eq("token"), eq("tt404"))
            .once()
            .returning(|_, _| Ok(false));
        // The store must not be touched when the film does not exist.
        let svc = service(catalog, MockAwardRegistry::new(), MockRatingStore::new());

        let err = svc.rate("token", "tt404", 5).await.unwrap_err();
        assert_eq!(err, AppError::FilmNotFound("tt404".to_string()));
    }

    #[tokio::test]
    async fn rate_saves_after_existence_check() {
        let mut catalog = MockFilmCatalog::new();
        catalog
            .expect_exists()
            .with(eq("token"), eq("tt1"))
            .once()
            .returning(|_, _| Ok(true));
        let mut ratings = MockRatingStore::new();
        ratings
            .expect_save()
            .with(eq("token"), eq("tt1"), eq(7u8))
            .once()
            .returning(|_, _, _| Ok(()));
        let svc = service(catalog, MockAwardRegistry::new(), ratings);

        svc.rate("token", "tt1", 7).await.unwrap();
    }

    #[tokio::test]
    async fn rate_propagates_catalog_failures_unchanged() {
        let mut catalog = MockFilmCatalog::new();
        catalog
            .expect_exists()
            .returning(|_, _| Err(AppError::ExternalServiceError("catalog down".to_string())));
        let svc = service(catalog, MockAwardRegistry::new(), MockRatingStore::new());

        let err = svc.rate("token", "tt1", 5).await.unwrap_err();
        assert_eq!(
            err,
            AppError::ExternalServiceError("catalog down".to_string())
        );
    }

    #[tokio::test]
    async fn search_rejects_blank_name_after_credential() {
        let svc = untouchable_service();
        assert_eq!(
            svc.search("", "Casablanca", 0).await.unwrap_err(),
            AppError::CredentialRequired
        );
        assert_eq!(
            svc.search("token", " ", 0).await.unwrap_err(),
            AppError::NameRequired
        );
        assert_eq!(
            svc.search("token", "Casablanca", -1).await.unwrap_err(),
            AppError::PageNumberNegative
        );
    }

    #[tokio::test]
    async fn search_preserves_catalog_order_and_total_pages() {
        let mut catalog = MockFilmCatalog::new();
        catalog
            .expect_by_name()
            .with(eq("token"), eq("Rated"), eq(0u32))
            .once()
            .returning(|_, _, page| {
                Ok(CatalogPage {
                    films: vec![
                        description("id2", "Rated2", 2),
                        description("id1", "Rated1", 1),
                    ],
                    page,
                    total_pages: 3,
                })
            });
        let mut awards = MockAwardRegistry::new();
        awards.expect_is_winner().returning(|name| Ok(name == "Rated1"));
        let mut ratings = MockRatingStore::new();
        ratings
            .expect_ratings_for()
            .returning(|id| Ok(if id == "id1" { vec![10, 4] } else { vec![] }));
        let svc = service(catalog, awards, ratings);

        let page = svc.search("token", "Rated", 0).await.unwrap();
        assert_eq!(page.page, 0);
        assert_eq!(page.total_pages, 3);
        // Catalog order kept, not re-sorted by box office.
        assert_eq!(page.items[0].imdb_id, "id2");
        assert_eq!(page.items[0].rating, 0);
        assert!(!page.items[0].award_winner);
        assert_eq!(page.items[1].imdb_id, "id1");
        assert_eq!(page.items[1].rating, 7);
        assert!(page.items[1].award_winner);
    }

    #[tokio::test]
    async fn top_rated_validates_pagination_arguments() {
        let svc = untouchable_service();
        assert_eq!(
            svc.top_rated_sorted_by_box_office("", 0, 0)
                .await
                .unwrap_err(),
            AppError::CredentialRequired
        );
        assert_eq!(
            svc.top_rated_sorted_by_box_office("token", -1, 0)
                .await
                .unwrap_err(),
            AppError::PageNumberNegative
        );
        assert_eq!(
            svc.top_rated_sorted_by_box_office("token", 0, -1)
                .await
                .unwrap_err(),
            AppError::PageSizeNegative
        );
    }

    #[tokio::test]
    async fn top_rated_propagates_store_failures_unchanged() {
        let mut ratings = MockRatingStore::new();
        ratings
            .expect_rated_film_ids()
            .returning(|| Err(AppError::StorageError("store down".to_string())));
        let svc = service(MockFilmCatalog::new(), MockAwardRegistry::new(), ratings);

        let err = svc
            .top_rated_sorted_by_box_office("token", 0, 10)
            .await
            .unwrap_err();
        assert_eq!(err, AppError::StorageError("store down".to_string()));
    }

    #[tokio::test]
    async fn top_rated_sorts_by_box_office_then_identifier() {
        let mut catalog = MockFilmCatalog::new();
        catalog.expect_by_id().returning(|_, id| {
            Ok(match id {
                "a" => description("a", "A", 5),
                "b" => description("b", "B", 5),
                "c" => description("c", "C", 9),
                other => description(other, other, 0),
            })
        });
        let mut awards = MockAwardRegistry::new();
        awards.expect_is_winner().returning(|_| Ok(false));
        let mut ratings = MockRatingStore::new();
        ratings
            .expect_rated_film_ids()
            .returning(|| Ok(vec!["b".to_string(), "c".to_string(), "a".to_string()]));
        ratings.expect_ratings_for().returning(|_| Ok(vec![10]));
        let svc = service(catalog, awards, ratings);

        let page = svc
            .top_rated_sorted_by_box_office("token", 0, 10)
            .await
            .unwrap();
        let ids: Vec<&str> = page.items.iter().map(|v| v.imdb_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
