use serde::{Deserialize, Serialize};

/// Everything the engine reads about one applicant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantData {
    pub traditional_data: TraditionalData,
    pub alternative_data: AlternativeData,
}

/// Conventional financial indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraditionalData {
    pub income: f64,
    #[serde(default)]
    pub employment_status: Option<String>,
    #[serde(default)]
    pub existing_credit_score: Option<f64>,
}

/// Behavioral signals collected outside the credit bureau file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeData {
    pub utility_payments: Vec<UtilityPayment>,
    pub social_media_metrics: SocialMediaMetrics,
    pub transaction_history: Vec<Transaction>,
    pub geo_location_data: GeoLocationData,
}

/// Payment record for a single utility provider, oldest payment first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityPayment {
    pub provider: String,
    pub payment_history: Vec<bool>,
    #[serde(default)]
    pub average_payment_delay: Option<f64>,
}

/// Social signals, each on a 0-1 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaMetrics {
    pub profile_stability: f64,
    pub network_strength: f64,
    pub sentiment_score: f64,
}

/// Aggregated spending pattern; negative amounts are outflows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub category: String,
    pub amount: f64,
    pub frequency: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocationData {
    pub residential_stability: f64,
    pub workplace_stability: f64,
}

/// Score and factor list produced for one applicant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    pub risk_score: f64,
    pub risk_factors: Vec<String>,
}
