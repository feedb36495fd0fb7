use serde::Serialize;

use super::components::payment_reliability;
use super::domain::{ApplicantData, GeoLocationData, ScoringResult, SocialMediaMetrics};

// Display labels only. They do not sum to 100 and are not derived from `ScoringWeights`.
pub const TRADITIONAL_IMPACT: &str = "35% of total score";
pub const UTILITY_IMPACT: &str = "15% of total score";
pub const SOCIAL_IMPACT: &str = "10% of total score";
pub const TRANSACTION_IMPACT: &str = "20% of total score";
pub const GEO_IMPACT: &str = "20% of total score";

/// Read-only breakdown of a stored assessment for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationReport {
    pub overall_score: f64,
    pub factors: Vec<String>,
    pub components: ExplanationComponents,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationComponents {
    pub traditional_metrics: TraditionalMetricsView,
    pub alternative_metrics: AlternativeMetricsView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraditionalMetricsView {
    pub income: f64,
    /// Raw value on file, not the defaulted score used for weighting.
    pub credit_score: Option<f64>,
    pub impact: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeMetricsView {
    pub utility_payments: UtilityPaymentsView,
    pub social_media_metrics: SocialMediaView,
    pub transaction_history: TransactionHistoryView,
    pub geo_location: GeoLocationView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtilityPaymentsView {
    pub reliability: Vec<ProviderReliabilityView>,
    pub impact: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderReliabilityView {
    pub provider: String,
    /// Percentage with two decimals, e.g. `"75.00%"`.
    pub reliability: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialMediaView {
    #[serde(flatten)]
    pub metrics: SocialMediaMetrics,
    pub impact: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionHistoryView {
    /// Number of transaction entries on file.
    pub categories: usize,
    pub impact: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoLocationView {
    #[serde(flatten)]
    pub location: GeoLocationData,
    pub impact: &'static str,
}

pub(crate) fn compose(result: &ScoringResult, applicant: &ApplicantData) -> ExplanationReport {
    let traditional = &applicant.traditional_data;
    let alternative = &applicant.alternative_data;

    let reliability = alternative
        .utility_payments
        .iter()
        .map(|payment| ProviderReliabilityView {
            provider: payment.provider.clone(),
            reliability: format_reliability(&payment.payment_history),
        })
        .collect();

    ExplanationReport {
        overall_score: result.risk_score,
        factors: result.risk_factors.clone(),
        components: ExplanationComponents {
            traditional_metrics: TraditionalMetricsView {
                income: traditional.income,
                credit_score: traditional.existing_credit_score,
                impact: TRADITIONAL_IMPACT,
            },
            alternative_metrics: AlternativeMetricsView {
                utility_payments: UtilityPaymentsView {
                    reliability,
                    impact: UTILITY_IMPACT,
                },
                social_media_metrics: SocialMediaView {
                    metrics: alternative.social_media_metrics,
                    impact: SOCIAL_IMPACT,
                },
                transaction_history: TransactionHistoryView {
                    categories: alternative.transaction_history.len(),
                    impact: TRANSACTION_IMPACT,
                },
                geo_location: GeoLocationView {
                    location: alternative.geo_location_data,
                    impact: GEO_IMPACT,
                },
            },
        },
    }
}

fn format_reliability(history: &[bool]) -> String {
    match payment_reliability(history) {
        Some(ratio) => format!("{:.2}%", ratio * 100.0),
        None => "n/a".to_string(),
    }
}
