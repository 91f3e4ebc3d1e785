#![cfg(test)]
use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;

use crate::marks_client::{MarksSource, RemoteError};

/// In-process marks source: answers from a map, or fails every call with `failure`.
#[derive(Default)]
pub struct StubMarksSource {
    marks: HashMap<String, f64>,
    failure: Option<RemoteError>,
    calls: AtomicUsize,
}

impl StubMarksSource {
    pub fn with(entries: &[(&str, f64)]) -> Self {
        Self {
            marks: entries.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            ..Self::default()
        }
    }

    pub fn failing(failure: RemoteError) -> Self {
        Self { failure: Some(failure), ..Self::default() }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarksSource for StubMarksSource {
    async fn fetch_marks(&self, rollno: &str) -> Result<f64, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }
        self.marks
            .get(rollno)
            .copied()
            .ok_or_else(|| RemoteError::NotFound(rollno.to_string()))
    }
}
