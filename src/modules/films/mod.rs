pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::ports::{AwardRegistry, FilmCatalog, RatingStore};
pub use application::FilmService;
