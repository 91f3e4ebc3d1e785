use std::sync::Arc;

use chrono::Utc;
use models::{Marks, MarksInput};
use tracing::info;

use crate::{errors::ServiceError, storage::RecordStore};

/// List / lookup / create over marks records.
#[derive(Clone)]
pub struct MarksService {
    store: Arc<RecordStore<Marks>>,
}

impl Default for MarksService {
    fn default() -> Self {
        Self::new()
    }
}

impl MarksService {
    pub fn new() -> Self {
        Self { store: RecordStore::new() }
    }

    pub async fn list(&self) -> Vec<Marks> {
        self.store.list().await
    }

    pub async fn get(&self, rollno: &str) -> Result<Marks, ServiceError> {
        self.store
            .get(rollno)
            .await
            .ok_or_else(|| ServiceError::NotFound(format!("Marks for {rollno} not found")))
    }

    /// Range is checked before the duplicate check, so an out-of-range value for an
    /// existing roll number reports a validation error.
    pub async fn create(&self, input: MarksInput) -> Result<Marks, ServiceError> {
        input.validate()?;
        let record = input.into_record(Utc::now());
        if !self.store.insert_new(record.clone()).await {
            return Err(ServiceError::Conflict("Marks already exist for this student".into()));
        }
        info!(rollno = %record.rollno, marks = record.marks, "marks created");
        Ok(record)
    }

    pub async fn count(&self) -> usize {
        self.store.len().await
    }

    /// Create each input in order; stops at the first failure.
    pub async fn seed(&self, inputs: Vec<MarksInput>) -> Result<(), ServiceError> {
        for input in inputs {
            self.create(input).await?;
        }
        Ok(())
    }
}
