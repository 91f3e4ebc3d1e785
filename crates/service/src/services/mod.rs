pub mod marks_service;
pub mod student_service;
