pub mod errors;
pub mod routes;
pub mod startup;

pub use startup::{run_marks, run_student};
