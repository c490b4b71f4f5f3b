// src/infrastructure/repository/mod.rs
// Score repository implementations

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::config::{Config, Endpoint};
use crate::domain::errors::{AppResult, FetchError, FetchResult};
use crate::domain::model::ScoreData;
use crate::domain::repository::ScoreRepository;
use crate::infrastructure::http::{HttpGetRequest, JsonHttpClient};

/// Web-backed repository of user credit scores.
///
/// The credit score endpoint is resolved from the configuration once, at
/// construction; an unconfigured endpoint is fatal at startup.
#[derive(Debug)]
pub struct WebScoreRepository {
    client: JsonHttpClient,
    credit_score_url: Url,
}

impl WebScoreRepository {
    pub fn new(config: &Config) -> AppResult<Self> {
        let credit_score_url = config.api.endpoint_url(Endpoint::CreditScore)?;
        let client = JsonHttpClient::new()?;
        Ok(Self {
            client,
            credit_score_url,
        })
    }
}

#[async_trait]
impl ScoreRepository for WebScoreRepository {
    async fn fetch_score(&self) -> FetchResult<ScoreData> {
        self.client
            .get(HttpGetRequest::new(self.credit_score_url.clone()))
            .await
    }
}

/// Repository that serves a pre-configured result, optionally after an
/// artificial delay. For tests and previews; never used in production.
pub struct StaticScoreRepository {
    result: FetchResult<ScoreData>,
    delay: Option<Duration>,
}

impl StaticScoreRepository {
    pub fn with_data(data: ScoreData) -> Self {
        Self {
            result: Ok(data),
            delay: None,
        }
    }

    pub fn with_error(error: FetchError) -> Self {
        Self {
            result: Err(error),
            delay: None,
        }
    }

    pub fn delayed_by(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl ScoreRepository for StaticScoreRepository {
    async fn fetch_score(&self) -> FetchResult<ScoreData> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.result.clone()
    }
}
