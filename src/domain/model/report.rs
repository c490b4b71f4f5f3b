// src/domain/model/report.rs
// Wire model for the upstream credit report payload

use serde::Deserialize;

/// Credit score report for a user, as decoded from the upstream JSON body.
///
/// Unknown fields in the payload are ignored. The short-term and long-term
/// credit figures are nullable upstream and decode to `None` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScoreData {
    #[serde(rename = "accountIDVStatus")]
    pub account_idv_status: Option<String>,

    #[serde(rename = "dashboardStatus")]
    pub dashboard_status: Option<String>,

    #[serde(rename = "creditReportInfo")]
    pub credit_report_info: CreditReportInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditReportInfo {
    pub score: i64,
    pub min_score_value: i64,
    pub max_score_value: i64,
    /// Coarse score bucket code, 0-4 upstream.
    pub score_band: i64,
    pub num_positive_score_factors: i64,
    pub num_negative_score_factors: i64,

    pub current_short_term_debt: Option<i64>,
    pub current_short_term_credit_limit: Option<i64>,
    pub current_short_term_credit_utilisation: Option<i64>,
    pub change_in_short_term_debt: Option<i64>,

    pub current_long_term_debt: Option<i64>,
    pub current_long_term_credit_limit: Option<i64>,
    pub current_long_term_credit_utilisation: Option<i64>,
    pub change_in_long_term_debt: Option<i64>,
}
