mod award_registry;
mod rating_store;

pub use award_registry::StaticAwardRegistry;
pub use rating_store::InMemoryRatingStore;
