//! Conversion from OMDb payloads to domain types.

use super::dto::OmdbFilmResponse;
use crate::modules::films::domain::FilmDescription;
use crate::shared::errors::{AppError, AppResult};

/// OMDb serves search results in fixed pages of 10.
pub const OMDB_PAGE_SIZE: u32 = 10;

pub fn to_description(film: OmdbFilmResponse) -> AppResult<FilmDescription> {
    let imdb_id = film
        .imdb_id
        .ok_or_else(|| AppError::ApiError("OMDb film record without imdbID".to_string()))?;
    let name = film
        .title
        .ok_or_else(|| AppError::ApiError("OMDb film record without Title".to_string()))?;
    let box_office = match film.box_office.as_deref() {
        Some(raw) => parse_box_office(raw)?,
        None => 0,
    };
    Ok(FilmDescription {
        imdb_id,
        name,
        box_office,
    })
}

/// Parse OMDb's display format (`"$28,341,469"`); `"N/A"` means the
/// catalog has no figure and maps to 0.
pub fn parse_box_office(raw: &str) -> AppResult<u64> {
    if raw == "N/A" {
        return Ok(0);
    }
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits
        .parse::<u64>()
        .map_err(|_| AppError::ApiError(format!("unparseable box office figure '{}'", raw)))
}

/// OMDb reports a flat result count; the page count is derived from it.
pub fn total_pages(total_results: Option<&str>) -> u32 {
    let total: u32 = total_results
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(0);
    total.div_ceil(OMDB_PAGE_SIZE).max(1)
}
