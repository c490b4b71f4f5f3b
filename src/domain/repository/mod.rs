// src/domain/repository/mod.rs
// Repository interfaces for domain entities

use async_trait::async_trait;

use crate::domain::errors::FetchResult;
use crate::domain::model::ScoreData;

/// Repository of the credit score and related information for the current
/// user.
///
/// A call is a single fetch attempt; there is no caching and no retry.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Returns the raw credit report for the current user.
    async fn fetch_score(&self) -> FetchResult<ScoreData>;
}
