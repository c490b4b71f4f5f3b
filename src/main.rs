// src/main.rs
use std::sync::Arc;

use credit_score::application::ScoreModel;
use credit_score::config::Config;
use credit_score::domain::errors::AppResult;
use credit_score::domain::model::{Credit, ScoreInfo};
use credit_score::infrastructure::WebScoreRepository;

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    config.init_logging()?;

    log::info!("Starting credit_score v{}", env!("CARGO_PKG_VERSION"));

    // Create the repository and the score model
    let repository = Arc::new(WebScoreRepository::new(&config)?);
    let model = ScoreModel::new(config.currency, repository);

    let mut scores = model.subscribe_scores();
    let mut errors = model.subscribe_errors();

    log::info!("Fetching credit score...");
    model.update();

    tokio::select! {
        changed = scores.changed() => {
            if changed.is_ok() {
                if let Some(info) = scores.borrow().as_ref() {
                    report(info);
                }
            }
        }
        error = errors.recv() => {
            if let Ok(e) = error {
                log::error!("Could not fetch credit score: {}", e);
            }
        }
    }

    Ok(())
}

fn report(info: &ScoreInfo) {
    let band = info
        .score
        .band
        .map(|b| b.to_string())
        .unwrap_or_else(|| "unrated".to_string());
    log::info!(
        "Credit score: {} of {}-{} ({})",
        info.score.value,
        info.score.range.start(),
        info.score.range.end(),
        band
    );
    log::info!(
        "Score factors: {} ({} positive, {} negative)",
        info.score.total_factors_count,
        info.score.positive_factors_count,
        info.score.negative_factors_count
    );
    report_credit("Short term credit", &info.short_term_credit);
    report_credit("Long term credit", &info.long_term_credit);
}

fn report_credit(label: &str, credit: &Credit) {
    let unavailable = || "n/a".to_string();
    log::info!(
        "{}: debt {}, limit {}, change {}, usage {}",
        label,
        credit.debt.map(|m| m.formatted()).unwrap_or_else(unavailable),
        credit.limit.map(|m| m.formatted()).unwrap_or_else(unavailable),
        credit.change.map(|m| m.formatted()).unwrap_or_else(unavailable),
        credit.usage.map(|p| p.formatted()).unwrap_or_else(unavailable),
    );
}
