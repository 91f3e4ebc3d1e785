use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, Keyed};

pub const MARKS_MIN: f64 = 0.0;
pub const MARKS_MAX: f64 = 100.0;

/// Stored marks record; never updated once created.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Marks {
    pub rollno: String,
    pub marks: f64,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /marks`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MarksInput {
    pub rollno: String,
    pub marks: f64,
}

impl MarksInput {
    /// Marks must fall within `[0, 100]`, both ends inclusive.
    pub fn validate(&self) -> Result<(), ModelError> {
        if !(MARKS_MIN..=MARKS_MAX).contains(&self.marks) {
            return Err(ModelError::Validation("Marks must be between 0 and 100".into()));
        }
        Ok(())
    }

    pub fn into_record(self, created_at: DateTime<Utc>) -> Marks {
        Marks { rollno: self.rollno, marks: self.marks, created_at }
    }
}

impl Keyed for Marks {
    fn rollno(&self) -> &str {
        &self.rollno
    }
}
