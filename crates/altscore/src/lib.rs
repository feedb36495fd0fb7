//! Credit risk scoring over traditional and alternative applicant data.
//!
//! [`scoring`] holds the pure engine (component scorers, weighted aggregate, risk factors and
//! explanations). [`applications`] wraps it with the storage-backed intake service and HTTP
//! routes that persist each assessment alongside the submitted data.

pub mod applications;
pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
