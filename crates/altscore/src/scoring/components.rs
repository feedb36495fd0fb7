//! Per-category sub-scores feeding the weighted aggregate.
//!
//! Each scorer is total over validated input. The utility scorer is the only one that needs
//! non-empty sequences, so it reports malformed data itself instead of returning NaN.

use serde::{Deserialize, Serialize};

use super::domain::{GeoLocationData, SocialMediaMetrics, Transaction, UtilityPayment};
use super::validation::InvalidInputError;

/// Income at which the income sub-score saturates.
pub const INCOME_SATURATION: f64 = 100_000.0;
/// Credit score assumed when the applicant has no bureau file.
pub const DEFAULT_CREDIT_SCORE: f64 = 50.0;

/// Sub-scores for each data category, before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScores {
    pub income: f64,
    pub credit: f64,
    pub utility: f64,
    pub social: f64,
    pub transactions: f64,
    pub geo: f64,
}

/// Linear ramp from 0 to 100, flat above [`INCOME_SATURATION`].
pub fn income_score(income: f64) -> f64 {
    (income / INCOME_SATURATION).min(1.0) * 100.0
}

/// Passes the bureau score through unscaled. Zero counts as "no score on file".
pub fn credit_score(existing: Option<f64>) -> f64 {
    match existing {
        Some(score) if score != 0.0 && !score.is_nan() => score,
        _ => DEFAULT_CREDIT_SCORE,
    }
}

/// Share of on-time payments in `history` as a ratio in [0, 1]; `None` when empty.
pub fn payment_reliability(history: &[bool]) -> Option<f64> {
    if history.is_empty() {
        return None;
    }
    let on_time = history.iter().filter(|paid| **paid).count();
    Some(on_time as f64 / history.len() as f64)
}

/// Unweighted mean of per-provider reliability percentages.
pub fn utility_score(payments: &[UtilityPayment]) -> Result<f64, InvalidInputError> {
    if payments.is_empty() {
        return Err(InvalidInputError::EmptyUtilityPayments);
    }

    let mut total = 0.0;
    for (index, payment) in payments.iter().enumerate() {
        let reliability = payment_reliability(&payment.payment_history).ok_or_else(|| {
            InvalidInputError::EmptyPaymentHistory {
                index,
                provider: payment.provider.clone(),
            }
        })?;
        total += reliability * 100.0;
    }

    Ok(total / payments.len() as f64)
}

pub fn social_score(metrics: &SocialMediaMetrics) -> f64 {
    (metrics.profile_stability + metrics.network_strength + metrics.sentiment_score) / 3.0
}

/// Running sum of `frequency * sign(amount)` clamped to [0, 100].
///
/// A zero amount counts as an outflow. The sum is not averaged, so the score grows with the
/// number of entries until it saturates.
pub fn transaction_score(transactions: &[Transaction]) -> f64 {
    let raw: f64 = transactions
        .iter()
        .map(|transaction| {
            let direction = if transaction.amount > 0.0 { 1.0 } else { -1.0 };
            transaction.frequency * direction
        })
        .sum();
    raw.clamp(0.0, 100.0)
}

pub fn geo_score(geo: &GeoLocationData) -> f64 {
    (geo.residential_stability + geo.workplace_stability) / 2.0
}
