//! Raw OMDb API payloads.
//!
//! OMDb reports failures inside a 200 reply: `Response` is the string
//! `"False"` and `Error` carries the reason. Field names keep OMDb's
//! casing via serde renames.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchItem>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

/// Search hits carry only summary fields; the full record (including the
/// box office) comes from a follow-up `i=` lookup.
#[derive(Debug, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
}

#[derive(Debug, Deserialize)]
pub struct OmdbFilmResponse {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    /// Display-formatted figure such as `"$28,341,469"`, or `"N/A"`.
    #[serde(rename = "BoxOffice")]
    pub box_office: Option<String>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl OmdbSearchResponse {
    pub fn is_ok(&self) -> bool {
        self.response == "True"
    }
}

impl OmdbFilmResponse {
    pub fn is_ok(&self) -> bool {
        self.response == "True"
    }
}
