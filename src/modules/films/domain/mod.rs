mod film;
mod film_view;
pub mod validation;

pub use film::{CatalogPage, FilmDescription};
pub use film_view::FilmView;
