use altscore::scoring::components::income_score;
use altscore::scoring::{
    AlternativeData, ApplicantData, GeoLocationData, RiskScoringEngine, SocialMediaMetrics,
    TraditionalData, Transaction, UtilityPayment,
};
use proptest::collection::vec;
use proptest::prelude::*;

fn utility_strategy() -> impl Strategy<Value = UtilityPayment> {
    ("[a-z]{1,8}", vec(any::<bool>(), 1..24)).prop_map(|(provider, payment_history)| {
        UtilityPayment {
            provider,
            payment_history,
            average_payment_delay: None,
        }
    })
}

fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (-1.0e6f64..1.0e6, -1.0e4f64..1.0e4).prop_map(|(amount, frequency)| Transaction {
        category: "misc".to_string(),
        amount,
        frequency,
    })
}

prop_compose! {
    fn applicant_strategy()(
        income in -1.0e9f64..1.0e9,
        credit in proptest::option::of(-1.0e6f64..1.0e6),
        utility_payments in vec(utility_strategy(), 1..6),
        social in (-10.0f64..10.0, -10.0f64..10.0, -10.0f64..10.0),
        transaction_history in vec(transaction_strategy(), 0..40),
        geo in (-10.0f64..10.0, -10.0f64..10.0),
    ) -> ApplicantData {
        ApplicantData {
            traditional_data: TraditionalData {
                income,
                employment_status: None,
                existing_credit_score: credit,
            },
            alternative_data: AlternativeData {
                utility_payments,
                social_media_metrics: SocialMediaMetrics {
                    profile_stability: social.0,
                    network_strength: social.1,
                    sentiment_score: social.2,
                },
                transaction_history,
                geo_location_data: GeoLocationData {
                    residential_stability: geo.0,
                    workplace_stability: geo.1,
                },
            },
        }
    }
}

proptest! {
    #[test]
    fn score_always_within_bounds(applicant in applicant_strategy()) {
        let engine = RiskScoringEngine::default();
        let score = engine
            .score(&applicant.traditional_data, &applicant.alternative_data)
            .expect("generated input is well formed");
        prop_assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn assessment_is_deterministic(applicant in applicant_strategy()) {
        let engine = RiskScoringEngine::default();
        let first = engine.assess(&applicant).expect("generated input is well formed");
        let second = engine.assess(&applicant).expect("generated input is well formed");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn income_contribution_is_monotonic(low in 0.0f64..200_000.0, delta in 0.0f64..200_000.0) {
        let high = low + delta;
        prop_assert!(income_score(high) >= income_score(low));
        prop_assert!(income_score(high) <= 100.0);
    }

    #[test]
    fn factors_are_ordered_and_unique(applicant in applicant_strategy()) {
        let engine = RiskScoringEngine::default();
        let factors = engine.derive_factors(&applicant);
        let order = [
            "Low income level",
            "Inconsistent utility payments",
            "Negative social media presence",
        ];
        let positions: Vec<usize> = factors
            .iter()
            .map(|factor| {
                order
                    .iter()
                    .position(|known| *known == factor.as_str())
                    .expect("known factor")
            })
            .collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn income_boundaries() {
    assert_eq!(income_score(0.0), 0.0);
    assert_eq!(income_score(100_000.0), 100.0);
    assert_eq!(income_score(1.0e12), 100.0);
}
