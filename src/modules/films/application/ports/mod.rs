pub mod award_registry;
pub mod film_catalog;
pub mod rating_store;

pub use award_registry::AwardRegistry;
pub use film_catalog::FilmCatalog;
pub use rating_store::RatingStore;

#[cfg(test)]
pub use award_registry::MockAwardRegistry;
#[cfg(test)]
pub use film_catalog::MockFilmCatalog;
#[cfg(test)]
pub use rating_store::MockRatingStore;
