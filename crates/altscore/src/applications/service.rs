use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{ApplicantRecord, ApplicationData, ApplicationId};
use super::repository::{ApplicationRepository, RepositoryError};
use crate::scoring::{ExplanationReport, InvalidInputError, RiskScoringEngine};

/// Service composing the scoring engine with the application repository.
pub struct ApplicationService<R> {
    repository: Arc<R>,
    engine: Arc<RiskScoringEngine>,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

impl<R> ApplicationService<R>
where
    R: ApplicationRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: RiskScoringEngine) -> Self {
        Self {
            repository,
            engine: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &RiskScoringEngine {
        &self.engine
    }

    /// Score a new application and store it together with its assessment.
    pub fn submit(
        &self,
        application: ApplicationData,
    ) -> Result<ApplicantRecord, ApplicationServiceError> {
        let assessment = self
            .engine
            .assess(&application.applicant)
            .inspect_err(|error| warn!(%error, "rejected application submission"))?;

        let now = Utc::now();
        let record = ApplicantRecord {
            id: next_application_id(),
            application,
            risk_score: assessment.risk_score,
            risk_factors: assessment.risk_factors,
            created_at: now,
            updated_at: now,
        };

        let stored = self.repository.insert(record)?;
        info!(
            application_id = %stored.id.0,
            risk_score = stored.risk_score,
            factors = stored.risk_factors.len(),
            "application scored"
        );
        Ok(stored)
    }

    pub fn get(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicantRecord, ApplicationServiceError> {
        let record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Replace the application data and rescore it. The creation timestamp is kept.
    pub fn update(
        &self,
        application_id: &ApplicationId,
        application: ApplicationData,
    ) -> Result<ApplicantRecord, ApplicationServiceError> {
        let assessment = self
            .engine
            .assess(&application.applicant)
            .inspect_err(|error| {
                warn!(application_id = %application_id.0, %error, "rejected application update")
            })?;

        let existing = self.get(application_id)?;
        let record = ApplicantRecord {
            id: existing.id,
            application,
            risk_score: assessment.risk_score,
            risk_factors: assessment.risk_factors,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        let stored = self.repository.update(record)?;
        info!(
            application_id = %stored.id.0,
            risk_score = stored.risk_score,
            "application rescored"
        );
        Ok(stored)
    }

    /// Explain the stored assessment without rescoring.
    pub fn explain(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ExplanationReport, ApplicationServiceError> {
        let record = self.get(application_id)?;
        Ok(self
            .engine
            .explain(&record.scoring_result(), &record.application.applicant))
    }
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
