// src/domain/model/score.rs
// Display-ready credit score model

use std::ops::RangeInclusive;

use crate::domain::model::money::{Currency, Money};
use crate::domain::model::percentage::Percentage;
use crate::domain::model::report::ScoreData;

/// Coarse qualitative bucket for a credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    VeryPoor,
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ScoreBand {
    /// Maps the upstream band code to a band. Codes outside 0-4 have no
    /// band; they are never an error.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(ScoreBand::VeryPoor),
            1 => Some(ScoreBand::Poor),
            2 => Some(ScoreBand::Fair),
            3 => Some(ScoreBand::Good),
            4 => Some(ScoreBand::Excellent),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ScoreBand::VeryPoor => write!(f, "very poor"),
            ScoreBand::Poor => write!(f, "poor"),
            ScoreBand::Fair => write!(f, "fair"),
            ScoreBand::Good => write!(f, "good"),
            ScoreBand::Excellent => write!(f, "excellent"),
        }
    }
}

/// The score itself together with its valid range and contributing factors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub value: i64,
    pub range: RangeInclusive<i64>,
    pub band: Option<ScoreBand>,
    pub total_factors_count: i64,
    pub positive_factors_count: i64,
    pub negative_factors_count: i64,
}

/// Short-term or long-term credit figures. Fields the upstream report did
/// not supply stay absent rather than defaulting to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credit {
    pub debt: Option<Money>,
    pub limit: Option<Money>,
    pub change: Option<Money>,
    pub usage: Option<Percentage>,
}

/// Information about the credit rating for a user, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreInfo {
    pub score: Score,
    pub short_term_credit: Credit,
    pub long_term_credit: Credit,
}

impl ScoreInfo {
    /// Converts a raw credit report into display-ready score information.
    pub fn from_report(currency: Currency, data: &ScoreData) -> Self {
        let info = &data.credit_report_info;
        let money = |amount: Option<i64>| amount.map(|a| Money::new(currency, a));

        Self {
            score: Score {
                value: info.score,
                range: info.min_score_value..=info.max_score_value,
                band: ScoreBand::from_code(info.score_band),
                total_factors_count: info.num_positive_score_factors
                    + info.num_negative_score_factors,
                positive_factors_count: info.num_positive_score_factors,
                negative_factors_count: info.num_negative_score_factors,
            },
            short_term_credit: Credit {
                debt: money(info.current_short_term_debt),
                limit: money(info.current_short_term_credit_limit),
                change: money(info.change_in_short_term_debt),
                usage: info
                    .current_short_term_credit_utilisation
                    .map(Percentage::new),
            },
            long_term_credit: Credit {
                debt: money(info.current_long_term_debt),
                limit: money(info.current_long_term_credit_limit),
                change: money(info.change_in_long_term_debt),
                usage: info
                    .current_long_term_credit_utilisation
                    .map(Percentage::new),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::report::CreditReportInfo;

    fn report(info: CreditReportInfo) -> ScoreData {
        ScoreData {
            account_idv_status: None,
            dashboard_status: None,
            credit_report_info: info,
        }
    }

    fn base_info() -> CreditReportInfo {
        CreditReportInfo {
            score: 514,
            min_score_value: 0,
            max_score_value: 700,
            score_band: 4,
            num_positive_score_factors: 9,
            num_negative_score_factors: 0,
            current_short_term_debt: Some(13_758),
            current_short_term_credit_limit: Some(30_600),
            current_short_term_credit_utilisation: Some(44),
            change_in_short_term_debt: Some(549),
            current_long_term_debt: Some(24_682),
            current_long_term_credit_limit: None,
            current_long_term_credit_utilisation: None,
            change_in_long_term_debt: Some(-327),
        }
    }

    #[test]
    fn band_codes_map_to_bands() {
        assert_eq!(ScoreBand::from_code(0), Some(ScoreBand::VeryPoor));
        assert_eq!(ScoreBand::from_code(1), Some(ScoreBand::Poor));
        assert_eq!(ScoreBand::from_code(2), Some(ScoreBand::Fair));
        assert_eq!(ScoreBand::from_code(3), Some(ScoreBand::Good));
        assert_eq!(ScoreBand::from_code(4), Some(ScoreBand::Excellent));
    }

    #[test]
    fn band_codes_out_of_range_have_no_band() {
        assert_eq!(ScoreBand::from_code(-1), None);
        assert_eq!(ScoreBand::from_code(5), None);
        assert_eq!(ScoreBand::from_code(42), None);
    }

    #[test]
    fn total_factors_is_sum_of_positive_and_negative() {
        let mut info = base_info();
        info.num_positive_score_factors = 5;
        info.num_negative_score_factors = 4;
        let score_info = ScoreInfo::from_report(Currency::Zar, &report(info));
        assert_eq!(score_info.score.total_factors_count, 9);
        assert_eq!(score_info.score.positive_factors_count, 5);
        assert_eq!(score_info.score.negative_factors_count, 4);
    }

    #[test]
    fn maps_score_value_range_and_band() {
        let score_info = ScoreInfo::from_report(Currency::Zar, &report(base_info()));
        assert_eq!(score_info.score.value, 514);
        assert_eq!(score_info.score.range, 0..=700);
        assert_eq!(score_info.score.band, Some(ScoreBand::Excellent));
    }

    #[test]
    fn out_of_range_band_code_maps_to_absent_band() {
        let mut info = base_info();
        info.score_band = 9;
        let score_info = ScoreInfo::from_report(Currency::Zar, &report(info));
        assert_eq!(score_info.score.band, None);
    }

    #[test]
    fn present_credit_fields_map_to_money_and_percentage() {
        let score_info = ScoreInfo::from_report(Currency::Zar, &report(base_info()));
        let short = &score_info.short_term_credit;
        assert_eq!(short.debt, Some(Money::new(Currency::Zar, 13_758)));
        assert_eq!(short.limit, Some(Money::new(Currency::Zar, 30_600)));
        assert_eq!(short.change, Some(Money::new(Currency::Zar, 549)));
        assert_eq!(short.usage, Some(Percentage::new(44)));
    }

    #[test]
    fn absent_credit_fields_stay_absent() {
        let score_info = ScoreInfo::from_report(Currency::Zar, &report(base_info()));
        let long = &score_info.long_term_credit;
        assert_eq!(long.limit, None);
        assert_eq!(long.usage, None);
        // present neighbours are unaffected
        assert_eq!(long.debt, Some(Money::new(Currency::Zar, 24_682)));
        assert_eq!(long.change, Some(Money::new(Currency::Zar, -327)));
    }
}
