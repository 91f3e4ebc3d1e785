//! Shared pieces for the marks and student services: response envelopes,
//! health/descriptor payloads and tracing setup.

pub mod types;
pub mod utils;

pub use types::{ApiResponse, EndpointMap, ErrorBody, Health, HealthCount, ServiceDescriptor};
