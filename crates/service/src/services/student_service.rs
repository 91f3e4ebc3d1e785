use std::sync::Arc;

use chrono::Utc;
use models::{Student, StudentComplete, StudentInput};
use tracing::{info, warn};

use crate::{
    errors::ServiceError,
    marks_client::{MarksLookup, MarksSource, RemoteError},
    storage::RecordStore,
};

/// Student plus the outcome of the marks lookup that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteStudent {
    pub data: StudentComplete,
    pub lookup: MarksLookup,
}

impl CompleteStudent {
    pub fn note(&self) -> &'static str {
        self.lookup.note()
    }
}

/// List / lookup / create over student records, plus the composite lookup that
/// pulls marks from the marks service.
#[derive(Clone)]
pub struct StudentService {
    store: Arc<RecordStore<Student>>,
    marks: Arc<dyn MarksSource>,
}

impl StudentService {
    pub fn new(marks: Arc<dyn MarksSource>) -> Self {
        Self { store: RecordStore::new(), marks }
    }

    pub async fn list(&self) -> Vec<Student> {
        self.store.list().await
    }

    pub async fn get(&self, rollno: &str) -> Result<Student, ServiceError> {
        self.store
            .get(rollno)
            .await
            .ok_or_else(|| ServiceError::NotFound(format!("Student {rollno} not found")))
    }

    pub async fn create(&self, input: StudentInput) -> Result<Student, ServiceError> {
        let record = input.into_record(Utc::now());
        if !self.store.insert_new(record.clone()).await {
            return Err(ServiceError::Conflict("Student already exists".into()));
        }
        info!(rollno = %record.rollno, "student created");
        Ok(record)
    }

    pub async fn count(&self) -> usize {
        self.store.len().await
    }

    pub async fn seed(&self, inputs: Vec<StudentInput>) -> Result<(), ServiceError> {
        for input in inputs {
            self.create(input).await?;
        }
        Ok(())
    }

    /// Student merged with marks from the marks service.
    ///
    /// Fails only when the student does not exist locally. Any remote failure yields
    /// the student with `marks: None`. The remote call runs on its own task so that
    /// a caller dropping this future does not cancel it.
    pub async fn get_complete(&self, rollno: &str) -> Result<CompleteStudent, ServiceError> {
        let student = self.get(rollno).await?;

        let source = Arc::clone(&self.marks);
        let key = rollno.to_string();
        let fetched = tokio::spawn(async move { source.fetch_marks(&key).await })
            .await
            .unwrap_or_else(|e| Err(RemoteError::Aborted(e.to_string())));

        let lookup = MarksLookup::from(fetched);
        match &lookup {
            MarksLookup::Attached(marks) => info!(%rollno, marks, "marks attached"),
            MarksLookup::Unavailable(RemoteError::NotFound(_)) => {
                info!(%rollno, "no marks recorded; continuing without marks")
            }
            MarksLookup::Unavailable(e) => {
                warn!(%rollno, error = %e, "marks service lookup failed; continuing without marks")
            }
        }

        Ok(CompleteStudent {
            data: StudentComplete { student, marks: lookup.marks() },
            lookup,
        })
    }
}
