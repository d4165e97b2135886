use serde::{Deserialize, Serialize};

use super::film::FilmDescription;

/// Merged, request-scoped film record.
///
/// Combines the catalog description with the award status (looked up by
/// title, the way award databases are keyed) and the accumulated user
/// rating. A view is assembled fresh for every request and never cached,
/// so rating changes are visible immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmView {
    pub imdb_id: String,
    pub name: String,
    pub award_winner: bool,
    /// Rounded mean of all submitted ratings; 0 when the film is unrated.
    pub rating: u8,
    pub box_office: u64,
}

impl FilmView {
    pub fn assemble(description: FilmDescription, award_winner: bool, ratings: &[u8]) -> Self {
        Self {
            imdb_id: description.imdb_id,
            name: description.name,
            award_winner,
            rating: average_rating(ratings),
            box_office: description.box_office,
        }
    }
}

/// Arithmetic mean rounded to the nearest integer, ties rounding up.
fn average_rating(ratings: &[u8]) -> u8 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
    let count = ratings.len() as u32;
    ((2 * sum + count) / (2 * count)) as u8
}
