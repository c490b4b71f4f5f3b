// src/application/score_model.rs
// Credit score model: fetch, transform, notify

use std::sync::Arc;

use tokio::sync::{broadcast, watch};

use crate::domain::errors::FetchError;
use crate::domain::model::{Currency, ScoreInfo};
use crate::domain::repository::ScoreRepository;

/// Models the credit score rating for a user.
///
/// Owns the most recently published [`ScoreInfo`] and notifies subscribers
/// over two independent channels: the score channel caches the last value,
/// so late subscribers immediately observe the most recent score; the error
/// channel delivers each failure once and caches nothing.
pub struct ScoreModel {
    // Currency used for monetary amounts in the report
    currency: Currency,

    // Source of raw credit reports
    repository: Arc<dyn ScoreRepository>,

    // Score broadcast channel, caching the latest value
    score_tx: watch::Sender<Option<ScoreInfo>>,

    // Error broadcast channel, uncached
    error_tx: broadcast::Sender<FetchError>,
}

impl ScoreModel {
    pub fn new(currency: Currency, repository: Arc<dyn ScoreRepository>) -> Self {
        let (score_tx, _) = watch::channel(None);
        let (error_tx, _) = broadcast::channel(16);

        Self {
            currency,
            repository,
            score_tx,
            error_tx,
        }
    }

    /// Subscribe to published score updates. The receiver starts at the
    /// most recently published value, if any.
    pub fn subscribe_scores(&self) -> watch::Receiver<Option<ScoreInfo>> {
        self.score_tx.subscribe()
    }

    /// Subscribe to fetch failures. Only failures after the subscription
    /// are delivered.
    pub fn subscribe_errors(&self) -> broadcast::Receiver<FetchError> {
        self.error_tx.subscribe()
    }

    /// The most recently published score, if a fetch has succeeded yet.
    pub fn latest(&self) -> Option<ScoreInfo> {
        self.score_tx.borrow().clone()
    }

    /// Updates the score info from the repository. Publishes the new score
    /// info or an error.
    ///
    /// Never blocks the caller: each invocation runs as its own task. An
    /// in-flight fetch is not cancelled by a newer call; whichever fetch
    /// completes last determines the cached value. A failure publishes on
    /// the error channel and leaves the cached score untouched.
    pub fn update(&self) {
        let currency = self.currency;
        let repository = self.repository.clone();
        let score_tx = self.score_tx.clone();
        let error_tx = self.error_tx.clone();

        tokio::spawn(async move {
            log::debug!("update > started");
            match repository.fetch_score().await {
                Ok(data) => {
                    let score_info = ScoreInfo::from_report(currency, &data);
                    log::debug!("update > completed: {:?}", score_info);
                    score_tx.send_replace(Some(score_info));
                }
                Err(e) => {
                    log::debug!("update > failed: {}", e);
                    if error_tx.send(e).is_err() {
                        log::warn!("Fetch failed with no error subscribers");
                    }
                }
            }
        });
    }
}
