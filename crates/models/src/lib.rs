//! Record types owned by the two services.
//!
//! Both record kinds are keyed by roll number; `Keyed` is what the in-memory
//! store needs to index them.

pub mod errors;
pub mod marks;
pub mod student;

pub use marks::{Marks, MarksInput, MARKS_MAX, MARKS_MIN};
pub use student::{Student, StudentComplete, StudentInput};

/// A record uniquely identified by a roll number.
pub trait Keyed {
    fn rollno(&self) -> &str;
}
