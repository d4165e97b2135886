mod client;
mod dto;
mod mapper;

pub use client::{OmdbCatalog, OmdbConfig};
