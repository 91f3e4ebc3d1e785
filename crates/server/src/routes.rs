use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod marks;
pub mod students;

pub const SERVICE_VERSION: &str = "1.0.0";

/// Router of the marks service.
pub fn build_marks_router(state: marks::MarksState, cors: CorsLayer) -> Router {
    let router = Router::new()
        .route("/", get(marks::root))
        .route("/health", get(marks::health))
        .route("/marks", get(marks::list_marks).post(marks::create_marks))
        .route("/marks/:rollno", get(marks::get_marks))
        .with_state(state);
    with_layers(router, cors)
}

/// Router of the student service, including the composite `/complete` lookup.
pub fn build_student_router(state: students::StudentState, cors: CorsLayer) -> Router {
    let router = Router::new()
        .route("/", get(students::root))
        .route("/health", get(students::health))
        .route("/students", get(students::list_students).post(students::create_student))
        .route("/students/:rollno", get(students::get_student))
        .route("/students/:rollno/complete", get(students::get_student_complete))
        .with_state(state);
    with_layers(router, cors)
}

fn with_layers(router: Router, cors: CorsLayer) -> Router {
    router.layer(cors).layer(
        TraceLayer::new_for_http()
            // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            // 响应返回时打点，包含状态码与耗时
            .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
            .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}
