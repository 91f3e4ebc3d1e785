use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::{ApiResponse, Health, HealthCount, ServiceDescriptor};
use models::{Student, StudentComplete, StudentInput};
use service::StudentService;

use crate::errors::ApiError;
use crate::routes::SERVICE_VERSION;

#[derive(Clone)]
pub struct StudentState {
    pub students: StudentService,
}

pub async fn root() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor::new(
        "Student Service",
        SERVICE_VERSION,
        &[
            ("health", "/health"),
            ("students", "/students"),
            ("student_by_rollno", "/students/{rollno}"),
            ("complete_student", "/students/{rollno}/complete"),
        ],
    ))
}

pub async fn health(State(state): State<StudentState>) -> Json<Health> {
    Json(Health::up("student-service", HealthCount::Students(state.students.count().await)))
}

pub async fn list_students(State(state): State<StudentState>) -> Json<ApiResponse<Vec<Student>>> {
    Json(ApiResponse::list(state.students.list().await))
}

pub async fn get_student(
    State(state): State<StudentState>,
    Path(rollno): Path<String>,
) -> Result<Json<ApiResponse<Student>>, ApiError> {
    let record = state.students.get(&rollno).await?;
    Ok(Json(ApiResponse::ok(record)))
}

pub async fn create_student(
    State(state): State<StudentState>,
    payload: Result<Json<StudentInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Student>>), ApiError> {
    let Json(input) = payload?;
    let record = state.students.create(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::created("Student created successfully", record))))
}

/// 学生信息 + 成绩服务返回的分数；成绩服务不可用时 marks 为 null，仍返回 200
pub async fn get_student_complete(
    State(state): State<StudentState>,
    Path(rollno): Path<String>,
) -> Result<Json<ApiResponse<StudentComplete>>, ApiError> {
    let complete = state.students.get_complete(&rollno).await?;
    let note = complete.note();
    Ok(Json(ApiResponse::ok(complete.data).with_note(note)))
}
