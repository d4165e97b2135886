pub mod memory;
pub mod omdb;

pub use memory::{InMemoryRatingStore, StaticAwardRegistry};
pub use omdb::{OmdbCatalog, OmdbConfig};
