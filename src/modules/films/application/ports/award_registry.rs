use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// Port answering whether a film won an award.
///
/// Award databases are published per title, so the lookup is by film name
/// rather than by catalog identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AwardRegistry: Send + Sync {
    async fn is_winner(&self, name: &str) -> AppResult<bool>;
}
