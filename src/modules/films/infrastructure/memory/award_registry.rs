use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;

use crate::modules::films::application::ports::AwardRegistry;
use crate::shared::errors::{AppError, AppResult};

/// Award registry backed by a fixed set of winning titles.
///
/// Membership is checked by film name, matching how award lists are
/// published. The set can be built in code or loaded from a JSON array of
/// titles.
#[derive(Debug, Default)]
pub struct StaticAwardRegistry {
    names: HashSet<String>,
}

impl StaticAwardRegistry {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Load winners from a JSON file containing an array of titles,
    /// e.g. `["Casablanca", "The Godfather"]`.
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| AppError::StorageError(format!("failed to read award list: {}", e)))?;
        let names: Vec<String> = serde_json::from_str(&raw)?;
        Ok(Self::new(names))
    }
}

#[async_trait]
impl AwardRegistry for StaticAwardRegistry {
    async fn is_winner(&self, name: &str) -> AppResult<bool> {
        Ok(self.names.contains(name))
    }
}
