use serde::{Deserialize, Serialize};

use super::components::payment_reliability;
use super::domain::ApplicantData;

pub const LOW_INCOME_THRESHOLD: f64 = 30_000.0;
/// Minimum on-time ratio every provider must exceed.
pub const UTILITY_RELIABILITY_THRESHOLD: f64 = 0.8;
pub const SENTIMENT_THRESHOLD: f64 = 0.6;

/// Qualitative concern raised from the raw applicant data, independent of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    LowIncome,
    InconsistentUtilityPayments,
    NegativeSocialPresence,
}

impl RiskFactor {
    /// Rule evaluation order, which is also the output order.
    pub const fn ordered() -> [Self; 3] {
        [
            Self::LowIncome,
            Self::InconsistentUtilityPayments,
            Self::NegativeSocialPresence,
        ]
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::LowIncome => "Low income level",
            Self::InconsistentUtilityPayments => "Inconsistent utility payments",
            Self::NegativeSocialPresence => "Negative social media presence",
        }
    }

    fn applies_to(self, applicant: &ApplicantData) -> bool {
        match self {
            Self::LowIncome => applicant.traditional_data.income < LOW_INCOME_THRESHOLD,
            Self::InconsistentUtilityPayments => !applicant
                .alternative_data
                .utility_payments
                .iter()
                .all(|payment| {
                    payment_reliability(&payment.payment_history)
                        .is_some_and(|ratio| ratio > UTILITY_RELIABILITY_THRESHOLD)
                }),
            Self::NegativeSocialPresence => {
                applicant.alternative_data.social_media_metrics.sentiment_score
                    < SENTIMENT_THRESHOLD
            }
        }
    }
}

/// Evaluate every rule in order and keep the ones that fire.
///
/// A provider without any payment history fails the reliability rule. An empty provider list
/// passes it.
pub fn derive(applicant: &ApplicantData) -> Vec<RiskFactor> {
    RiskFactor::ordered()
        .into_iter()
        .filter(|factor| factor.applies_to(applicant))
        .collect()
}
