//! Film rating core.
//!
//! Aggregates film descriptions from an external catalog with locally
//! stored user ratings and a locally known set of award-winning titles.
//! Three operations are exposed through [`FilmService`]: search films by
//! name, submit a rating, and list top-rated films ordered by box-office
//! revenue.
//!
//! The catalog, the award registry and the rating store are modeled as
//! ports (`modules::films::application::ports`); `modules::films::infrastructure`
//! ships an OMDb-backed catalog adapter and in-memory implementations of
//! the other two.

pub mod modules;
pub mod shared;

pub use modules::films::application::ports::{AwardRegistry, FilmCatalog, RatingStore};
pub use modules::films::application::FilmService;
pub use modules::films::domain::{CatalogPage, FilmDescription, FilmView};
pub use shared::application::Page;
pub use shared::errors::{AppError, AppResult};
