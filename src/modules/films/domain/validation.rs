//! Precondition checks applied before any collaborator is invoked.
//!
//! Each operation validates its arguments in a fixed order and fails on
//! the first violated rule; later rules are not evaluated. The checks are
//! pure: no collaborator call happens until all of them pass. Film
//! existence is the one precondition that needs an external call, so the
//! service checks it against the catalog after these rules.

use crate::shared::errors::{AppError, AppResult};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 10;

pub fn require_credential(credential: &str) -> AppResult<()> {
    if credential.trim().is_empty() {
        return Err(AppError::CredentialRequired);
    }
    Ok(())
}

pub fn require_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::NameRequired);
    }
    Ok(())
}

pub fn require_identifier(imdb_id: &str) -> AppResult<()> {
    if imdb_id.trim().is_empty() {
        return Err(AppError::IdentifierRequired);
    }
    Ok(())
}

pub fn require_rating(rating: u8) -> AppResult<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::RatingOutOfRange);
    }
    Ok(())
}

/// Checks the 0-based page number and converts it to the unsigned form
/// the rest of the pipeline works with.
pub fn require_page_number(page: i32) -> AppResult<u32> {
    if page < 0 {
        return Err(AppError::PageNumberNegative);
    }
    Ok(page as u32)
}

pub fn require_page_size(page_size: i32) -> AppResult<u32> {
    if page_size < 0 {
        return Err(AppError::PageSizeNegative);
    }
    Ok(page_size as u32)
}
