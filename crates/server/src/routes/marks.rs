use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::{ApiResponse, Health, HealthCount, ServiceDescriptor};
use models::{Marks, MarksInput};
use service::MarksService;

use crate::errors::ApiError;
use crate::routes::SERVICE_VERSION;

#[derive(Clone)]
pub struct MarksState {
    pub marks: MarksService,
}

pub async fn root() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor::new(
        "Marks Service",
        SERVICE_VERSION,
        &[
            ("health", "/health"),
            ("all_marks", "/marks"),
            ("marks_by_rollno", "/marks/{rollno}"),
        ],
    ))
}

pub async fn health(State(state): State<MarksState>) -> Json<Health> {
    Json(Health::up("marks-service", HealthCount::Records(state.marks.count().await)))
}

pub async fn list_marks(State(state): State<MarksState>) -> Json<ApiResponse<Vec<Marks>>> {
    Json(ApiResponse::list(state.marks.list().await))
}

pub async fn get_marks(
    State(state): State<MarksState>,
    Path(rollno): Path<String>,
) -> Result<Json<ApiResponse<Marks>>, ApiError> {
    let record = state.marks.get(&rollno).await?;
    Ok(Json(ApiResponse::ok(record)))
}

pub async fn create_marks(
    State(state): State<MarksState>,
    payload: Result<Json<MarksInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Marks>>), ApiError> {
    let Json(input) = payload?;
    let record = state.marks.create(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::created("Marks created successfully", record))))
}
