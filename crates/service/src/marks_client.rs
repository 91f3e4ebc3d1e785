//! Best-effort lookup of a student's marks on the marks service.
//!
//! Every failure is a `RemoteError`; callers turn it into `MarksLookup::Unavailable`
//! and carry on without marks.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Why marks could not be fetched. All variants mean "remote unavailable".
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RemoteError {
    #[error("invalid marks service url: {0}")]
    InvalidUrl(String),
    #[error("marks service did not answer within {0:?}")]
    Timeout(Duration),
    #[error("error connecting to marks service: {0}")]
    Network(String),
    #[error("marks service returned status {0}")]
    Status(u16),
    #[error("marks service has no record for {0}")]
    NotFound(String),
    #[error("malformed marks response: {0}")]
    Malformed(String),
    #[error("marks lookup task aborted: {0}")]
    Aborted(String),
}

/// Source of marks for the composite student lookup.
#[async_trait]
pub trait MarksSource: Send + Sync {
    async fn fetch_marks(&self, rollno: &str) -> Result<f64, RemoteError>;
}

/// Outcome of a marks lookup as seen by the composite endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum MarksLookup {
    Attached(f64),
    Unavailable(RemoteError),
}

pub const NOTE_FETCHED: &str = "Marks fetched from Marks Service";
pub const NOTE_UNAVAILABLE: &str = "Marks unavailable";

impl MarksLookup {
    pub fn marks(&self) -> Option<f64> {
        match self {
            Self::Attached(m) => Some(*m),
            Self::Unavailable(_) => None,
        }
    }

    pub fn note(&self) -> &'static str {
        match self {
            Self::Attached(_) => NOTE_FETCHED,
            Self::Unavailable(_) => NOTE_UNAVAILABLE,
        }
    }
}

impl From<Result<f64, RemoteError>> for MarksLookup {
    fn from(res: Result<f64, RemoteError>) -> Self {
        match res {
            Ok(m) => Self::Attached(m),
            Err(e) => Self::Unavailable(e),
        }
    }
}

#[derive(Deserialize)]
struct RemoteEnvelope {
    data: RemoteMarks,
}

#[derive(Deserialize)]
struct RemoteMarks {
    marks: f64,
}

/// `GET {base_url}/marks/{rollno}` with a fixed per-request timeout, no retry.
#[derive(Clone, Debug)]
pub struct HttpMarksClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpMarksClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Network(e.to_string()))?;
        Ok(Self { client, base_url: base_url.into(), timeout })
    }

    /// The roll number is pushed as one path segment, so it is percent-encoded.
    fn marks_url(&self, rollno: &str) -> Result<Url, RemoteError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| RemoteError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| RemoteError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push("marks")
            .push(rollno);
        Ok(url)
    }

    fn classify(&self, e: reqwest::Error) -> RemoteError {
        if e.is_timeout() {
            RemoteError::Timeout(self.timeout)
        } else {
            RemoteError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl MarksSource for HttpMarksClient {
    async fn fetch_marks(&self, rollno: &str) -> Result<f64, RemoteError> {
        let url = self.marks_url(rollno)?;
        debug!(%url, "fetching marks");
        let resp = self.client.get(url).send().await.map_err(|e| self.classify(e))?;
        match resp.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Err(RemoteError::NotFound(rollno.to_string())),
            other => return Err(RemoteError::Status(other.as_u16())),
        }
        let bytes = resp.bytes().await.map_err(|e| self.classify(e))?;
        let body: RemoteEnvelope =
            serde_json::from_slice(&bytes).map_err(|e| RemoteError::Malformed(e.to_string()))?;
        Ok(body.data.marks)
    }
}
