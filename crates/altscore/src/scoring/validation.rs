use super::domain::{AlternativeData, TraditionalData};

/// Malformed applicant data that would otherwise poison the arithmetic with NaN.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("alternativeData.utilityPayments must contain at least one provider")]
    EmptyUtilityPayments,
    #[error("alternativeData.utilityPayments[{index}].paymentHistory is empty for provider '{provider}'")]
    EmptyPaymentHistory { index: usize, provider: String },
    #[error("{field} must be a finite number")]
    NonFinite { field: String },
}

/// Reject input the component scorers cannot handle. Ranges are not checked.
pub(crate) fn validate(
    traditional: &TraditionalData,
    alternative: &AlternativeData,
) -> Result<(), InvalidInputError> {
    finite("traditionalData.income", traditional.income)?;
    if let Some(score) = traditional.existing_credit_score {
        finite("traditionalData.existingCreditScore", score)?;
    }

    if alternative.utility_payments.is_empty() {
        return Err(InvalidInputError::EmptyUtilityPayments);
    }
    for (index, payment) in alternative.utility_payments.iter().enumerate() {
        if payment.payment_history.is_empty() {
            return Err(InvalidInputError::EmptyPaymentHistory {
                index,
                provider: payment.provider.clone(),
            });
        }
    }

    let social = &alternative.social_media_metrics;
    finite(
        "alternativeData.socialMediaMetrics.profileStability",
        social.profile_stability,
    )?;
    finite(
        "alternativeData.socialMediaMetrics.networkStrength",
        social.network_strength,
    )?;
    finite(
        "alternativeData.socialMediaMetrics.sentimentScore",
        social.sentiment_score,
    )?;

    for (index, transaction) in alternative.transaction_history.iter().enumerate() {
        finite(
            &format!("alternativeData.transactionHistory[{index}].amount"),
            transaction.amount,
        )?;
        finite(
            &format!("alternativeData.transactionHistory[{index}].frequency"),
            transaction.frequency,
        )?;
    }

    let geo = &alternative.geo_location_data;
    finite(
        "alternativeData.geoLocationData.residentialStability",
        geo.residential_stability,
    )?;
    finite(
        "alternativeData.geoLocationData.workplaceStability",
        geo.workplace_stability,
    )
}

fn finite(field: &str, value: f64) -> Result<(), InvalidInputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidInputError::NonFinite {
            field: field.to_string(),
        })
    }
}
