//! Application intake backed by the scoring engine.
//!
//! Every write path scores the submitted data and stores `{ data, riskScore, riskFactors }` as
//! one record; explanations are composed from the stored record without rescoring.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{ApplicantRecord, ApplicationData, ApplicationId, SubmissionReceipt};
pub use repository::{ApplicationRepository, RepositoryError};
pub use router::application_router;
pub use service::{ApplicationService, ApplicationServiceError};
