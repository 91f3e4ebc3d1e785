//! Service layer for the marks and student services.
//! - `storage` holds records in memory, keyed and ordered.
//! - `services` carries the CRUD rules and the composite student lookup.
//! - `marks_client` is the best-effort HTTP fetch against the marks service.

pub mod errors;
pub mod marks_client;
pub mod seed;
pub mod services;
pub mod storage;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use marks_client::{HttpMarksClient, MarksLookup, MarksSource, RemoteError};
pub use services::{marks_service::MarksService, student_service::{CompleteStudent, StudentService}};
