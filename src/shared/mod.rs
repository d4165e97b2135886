pub mod application;
pub mod errors;
pub mod utils;
