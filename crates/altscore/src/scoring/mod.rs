//! Deterministic risk scoring and explanation engine.
//!
//! Nothing in here performs I/O or touches shared state; every operation is a pure function of
//! the applicant data handed in, so a single engine can serve concurrent callers.

pub mod components;
pub mod domain;
pub mod explanation;
pub mod factors;
mod validation;
pub mod weights;

pub use components::ComponentScores;
pub use domain::{
    AlternativeData, ApplicantData, GeoLocationData, ScoringResult, SocialMediaMetrics,
    TraditionalData, Transaction, UtilityPayment,
};
pub use explanation::ExplanationReport;
pub use factors::RiskFactor;
pub use validation::InvalidInputError;
pub use weights::ScoringWeights;

/// Stateless scorer applying a fixed weight table to applicant data.
#[derive(Debug, Clone, Default)]
pub struct RiskScoringEngine {
    weights: ScoringWeights,
}

impl RiskScoringEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Sub-score for every category, after validating the input.
    pub fn components(
        &self,
        traditional: &TraditionalData,
        alternative: &AlternativeData,
    ) -> Result<ComponentScores, InvalidInputError> {
        validation::validate(traditional, alternative)?;

        Ok(ComponentScores {
            income: components::income_score(traditional.income),
            credit: components::credit_score(traditional.existing_credit_score),
            utility: components::utility_score(&alternative.utility_payments)?,
            social: components::social_score(&alternative.social_media_metrics),
            transactions: components::transaction_score(&alternative.transaction_history),
            geo: components::geo_score(&alternative.geo_location_data),
        })
    }

    /// Final risk score in [0, 100].
    pub fn score(
        &self,
        traditional: &TraditionalData,
        alternative: &AlternativeData,
    ) -> Result<f64, InvalidInputError> {
        let components = self.components(traditional, alternative)?;
        Ok(self.weights.aggregate(&components))
    }

    /// Messages for every risk rule the applicant triggers, in rule order.
    pub fn derive_factors(&self, applicant: &ApplicantData) -> Vec<String> {
        factors::derive(applicant)
            .into_iter()
            .map(|factor| factor.message().to_string())
            .collect()
    }

    /// Score and factors together, as persisted on every write.
    pub fn assess(&self, applicant: &ApplicantData) -> Result<ScoringResult, InvalidInputError> {
        let risk_score = self.score(&applicant.traditional_data, &applicant.alternative_data)?;
        Ok(ScoringResult {
            risk_score,
            risk_factors: self.derive_factors(applicant),
        })
    }

    /// Presentation breakdown of a previously stored result.
    pub fn explain(&self, result: &ScoringResult, applicant: &ApplicantData) -> ExplanationReport {
        explanation::compose(result, applicant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_applicant() -> ApplicantData {
        ApplicantData {
            traditional_data: TraditionalData {
                income: 50_000.0,
                employment_status: None,
                existing_credit_score: Some(70.0),
            },
            alternative_data: AlternativeData {
                utility_payments: vec![UtilityPayment {
                    provider: "X".to_string(),
                    payment_history: vec![true, true, true, false],
                    average_payment_delay: None,
                }],
                social_media_metrics: SocialMediaMetrics {
                    profile_stability: 0.8,
                    network_strength: 0.7,
                    sentiment_score: 0.9,
                },
                transaction_history: vec![Transaction {
                    category: "food".to_string(),
                    amount: 50.0,
                    frequency: 3.0,
                }],
                geo_location_data: GeoLocationData {
                    residential_stability: 0.9,
                    workplace_stability: 0.8,
                },
            },
        }
    }

    #[test]
    fn reference_applicant_scores_by_hand_computed_value() {
        let engine = RiskScoringEngine::default();
        let applicant = reference_applicant();

        // 0.2*50 + 0.15*70 + 0.15*75 + 0.1*0.8 + 0.2*3 + 0.2*0.85
        let score = engine
            .score(&applicant.traditional_data, &applicant.alternative_data)
            .expect("valid input");
        assert!((score - 32.6).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn components_expose_each_sub_score() {
        let engine = RiskScoringEngine::default();
        let applicant = reference_applicant();

        let components = engine
            .components(&applicant.traditional_data, &applicant.alternative_data)
            .expect("valid input");
        assert_eq!(components.income, 50.0);
        assert_eq!(components.credit, 70.0);
        assert_eq!(components.utility, 75.0);
        assert_eq!(components.transactions, 3.0);
        assert!((components.social - 0.8).abs() < 1e-12);
        assert!((components.geo - 0.85).abs() < 1e-12);
    }

    #[test]
    fn assess_pairs_score_with_factors() {
        let engine = RiskScoringEngine::default();
        let result = engine.assess(&reference_applicant()).expect("valid input");

        assert!((result.risk_score - 32.6).abs() < 1e-9);
        assert_eq!(result.risk_factors, vec!["Inconsistent utility payments"]);
    }

    #[test]
    fn scoring_is_repeatable() {
        let engine = RiskScoringEngine::default();
        let applicant = reference_applicant();

        let first = engine.assess(&applicant).expect("valid input");
        let second = engine.assess(&applicant).expect("valid input");
        assert_eq!(first, second);
    }

    #[test]
    fn missing_credit_score_uses_default() {
        let engine = RiskScoringEngine::default();
        let mut applicant = reference_applicant();
        applicant.traditional_data.existing_credit_score = None;

        let score = engine
            .score(&applicant.traditional_data, &applicant.alternative_data)
            .expect("valid input");
        // credit contribution drops from 0.15*70 to 0.15*50
        assert!((score - 29.6).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn empty_utility_payments_are_rejected() {
        let engine = RiskScoringEngine::default();
        let mut applicant = reference_applicant();
        applicant.alternative_data.utility_payments.clear();

        assert_eq!(
            engine.assess(&applicant),
            Err(InvalidInputError::EmptyUtilityPayments)
        );
    }

    #[test]
    fn empty_payment_history_names_the_provider() {
        let engine = RiskScoringEngine::default();
        let mut applicant = reference_applicant();
        applicant.alternative_data.utility_payments[0]
            .payment_history
            .clear();

        match engine.assess(&applicant) {
            Err(InvalidInputError::EmptyPaymentHistory { index, provider }) => {
                assert_eq!(index, 0);
                assert_eq!(provider, "X");
            }
            other => panic!("expected empty payment history error, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_numbers_are_rejected_by_field() {
        let engine = RiskScoringEngine::default();
        let mut applicant = reference_applicant();
        applicant.alternative_data.transaction_history[0].frequency = f64::INFINITY;

        let error = engine
            .score(&applicant.traditional_data, &applicant.alternative_data)
            .expect_err("infinite frequency rejected");
        assert_eq!(
            error.to_string(),
            "alternativeData.transactionHistory[0].frequency must be a finite number"
        );
    }

    #[test]
    fn explanation_echoes_stored_result() {
        let engine = RiskScoringEngine::default();
        let applicant = reference_applicant();
        let stored = ScoringResult {
            risk_score: 41.0,
            risk_factors: vec!["Low income level".to_string()],
        };

        let report = engine.explain(&stored, &applicant);
        assert_eq!(report.overall_score, 41.0);
        assert_eq!(report.factors, stored.risk_factors);
        assert_eq!(
            report.components.traditional_metrics.impact,
            explanation::TRADITIONAL_IMPACT
        );
        let utilities = &report.components.alternative_metrics.utility_payments;
        assert_eq!(utilities.reliability[0].reliability, "75.00%");
        assert_eq!(
            report
                .components
                .alternative_metrics
                .transaction_history
                .categories,
            1
        );
    }
}
