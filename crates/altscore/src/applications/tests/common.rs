use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::applications::domain::{ApplicantRecord, ApplicationData, ApplicationId};
use crate::applications::repository::{ApplicationRepository, RepositoryError};
use crate::applications::{application_router, ApplicationService};
use crate::scoring::{
    AlternativeData, ApplicantData, GeoLocationData, RiskScoringEngine, SocialMediaMetrics,
    TraditionalData, Transaction, UtilityPayment,
};

pub(super) fn utility(provider: &str, history: &[bool]) -> UtilityPayment {
    UtilityPayment {
        provider: provider.to_string(),
        payment_history: history.to_vec(),
        average_payment_delay: Some(1.5),
    }
}

/// Applicant scoring 32.6 with a single "Inconsistent utility payments" factor.
pub(super) fn application() -> ApplicationData {
    ApplicationData {
        name: Some("Ada Okafor".to_string()),
        email: Some("ada@example.com".to_string()),
        phone: None,
        applicant: ApplicantData {
            traditional_data: TraditionalData {
                income: 50_000.0,
                employment_status: Some("full-time".to_string()),
                existing_credit_score: Some(70.0),
            },
            alternative_data: AlternativeData {
                utility_payments: vec![utility("X", &[true, true, true, false])],
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
        },
    }
}

/// Low income, reliable utilities and a positive social presence.
pub(super) fn low_income_application() -> ApplicationData {
    let mut application = application();
    application.applicant.traditional_data.income = 25_000.0;
    application.applicant.alternative_data.utility_payments =
        vec![utility("water", &[true; 6]), utility("power", &[true; 12])];
    application
}

pub(super) fn empty_utilities_application() -> ApplicationData {
    let mut application = application();
    application.applicant.alternative_data.utility_payments.clear();
    application
}

pub(super) fn build_service() -> (ApplicationService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ApplicationService::new(repository.clone(), RiskScoringEngine::default());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ApplicationId, ApplicantRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl ApplicationRepository for MemoryRepository {
    fn insert(&self, record: ApplicantRecord) -> Result<ApplicantRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ApplicantRecord) -> Result<ApplicantRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if !guard.contains_key(&record.id) {
            return Err(RepositoryError::NotFound);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicantRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct ConflictRepository;

impl ApplicationRepository for ConflictRepository {
    fn insert(&self, _record: ApplicantRecord) -> Result<ApplicantRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: ApplicantRecord) -> Result<ApplicantRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicantRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl ApplicationRepository for UnavailableRepository {
    fn insert(&self, _record: ApplicantRecord) -> Result<ApplicantRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: ApplicantRecord) -> Result<ApplicantRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicantRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(service: ApplicationService<MemoryRepository>) -> axum::Router {
    application_router(Arc::new(service))
}
