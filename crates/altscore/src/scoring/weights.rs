use serde::{Deserialize, Serialize};

use super::components::ComponentScores;

/// Share of each component in the final risk score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringWeights {
    pub income: f64,
    pub credit_score: f64,
    pub utility_payments: f64,
    pub social_media: f64,
    pub transactions: f64,
    pub geo_location: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            income: 0.20,
            credit_score: 0.15,
            utility_payments: 0.15,
            social_media: 0.10,
            transactions: 0.20,
            geo_location: 0.20,
        }
    }
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.income
            + self.credit_score
            + self.utility_payments
            + self.social_media
            + self.transactions
            + self.geo_location
    }

    /// Weighted sum of the components, clamped to [0, 100].
    ///
    /// Components are not clamped individually; an out-of-range credit score only shows up
    /// through the final clamp.
    pub fn aggregate(&self, components: &ComponentScores) -> f64 {
        let weighted = self.income * components.income
            + self.credit_score * components.credit
            + self.utility_payments * components.utility
            + self.social_media * components.social
            + self.transactions * components.transactions
            + self.geo_location * components.geo;
        weighted.clamp(0.0, 100.0)
    }
}
