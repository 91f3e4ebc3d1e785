use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use configs::AppConfig;
use service::{seed, HttpMarksClient, MarksService, StudentService};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, marks::MarksState, students::StudentState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Marks service state, seeded when `seed_demo_data` is on.
pub async fn marks_state(cfg: &AppConfig) -> Result<MarksState, StartupError> {
    let marks = MarksService::new();
    if cfg.seed_demo_data {
        marks.seed(seed::demo_marks()).await?;
    }
    Ok(MarksState { marks })
}

/// Student service state wired to the configured marks service URL.
pub async fn student_state(cfg: &AppConfig) -> Result<StudentState, StartupError> {
    let client = HttpMarksClient::new(&cfg.student.marks_service_url, cfg.student.marks_timeout())
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let students = StudentService::new(Arc::new(client));
    if cfg.seed_demo_data {
        students.seed(seed::demo_students()).await?;
    }
    Ok(StudentState { students })
}

async fn serve(addr: &str, app: Router) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    let local = listener.local_addr()?;
    info!(addr = %local, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the marks service and run it until the server stops.
pub async fn run_marks(cfg: AppConfig) -> anyhow::Result<()> {
    let state = marks_state(&cfg).await?;
    let app = routes::build_marks_router(state, build_cors());

    let addr = cfg.marks.bind_addr();
    info!(%addr, seeded = cfg.seed_demo_data, "starting marks service");
    serve(&addr, app).await
}

/// Build the student service and run it until the server stops.
pub async fn run_student(cfg: AppConfig) -> anyhow::Result<()> {
    let state = student_state(&cfg).await?;
    let app = routes::build_student_router(state, build_cors());

    let addr = cfg.student.bind_addr();
    info!(
        %addr,
        marks_service = %cfg.student.marks_service_url,
        timeout_secs = cfg.student.marks_timeout_secs,
        seeded = cfg.seed_demo_data,
        "starting student service"
    );
    serve(&addr, app).await
}
