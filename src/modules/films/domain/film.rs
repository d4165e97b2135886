use serde::{Deserialize, Serialize};

/// Read-only film description owned by the external catalog.
///
/// The core holds a copy for the duration of one request and never
/// mutates or stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmDescription {
    pub imdb_id: String,
    pub name: String,
    /// Gross revenue in whole currency units; 0 when the catalog reports
    /// no figure.
    pub box_office: u64,
}

/// One page of catalog search results.
///
/// The catalog owns the pagination arithmetic for name searches, so
/// `total_pages` is reported by it rather than recomputed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage {
    pub films: Vec<FilmDescription>,
    pub page: u32,
    pub total_pages: u32,
}
