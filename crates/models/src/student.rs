use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Keyed;

/// Stored student record. Age carries no range check.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub rollno: String,
    pub name: String,
    pub age: i64,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /students`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StudentInput {
    pub rollno: String,
    pub name: String,
    pub age: i64,
}

impl StudentInput {
    pub fn into_record(self, created_at: DateTime<Utc>) -> Student {
        Student { rollno: self.rollno, name: self.name, age: self.age, created_at }
    }
}

impl Keyed for Student {
    fn rollno(&self) -> &str {
        &self.rollno
    }
}

/// Student merged with marks from the marks service. Built per request, never stored.
///
/// `marks` is `null` in JSON when the remote lookup did not yield a value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StudentComplete {
    #[serde(flatten)]
    pub student: Student,
    pub marks: Option<f64>,
}
