mod support;

use axum::http::StatusCode;
use axum::Router;
use serde_json::json;
use server::routes::{self, marks::MarksState};
use service::MarksService;
use tower_http::cors::CorsLayer;

use support::{call, call_raw};

fn app() -> Router {
    let state = MarksState { marks: MarksService::new() };
    routes::build_marks_router(state, CorsLayer::very_permissive())
}

async fn seeded_app() -> anyhow::Result<Router> {
    let mut cfg = configs::AppConfig::default();
    cfg.seed_demo_data = true;
    let state = server::startup::marks_state(&cfg).await?;
    Ok(routes::build_marks_router(state, CorsLayer::very_permissive()))
}

#[tokio::test]
async fn root_describes_service() -> anyhow::Result<()> {
    let (status, body) = call(&app(), "GET", "/", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "Marks Service");
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["endpoints"]["marks_by_rollno"], "/marks/{rollno}");
    assert_eq!(body["endpoints"]["all_marks"], "/marks");
    Ok(())
}

#[tokio::test]
async fn health_reports_record_count() -> anyhow::Result<()> {
    let app = seeded_app().await?;
    let (status, body) = call(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "UP", "service": "marks-service", "recordCount": 3}));
    Ok(())
}

#[tokio::test]
async fn list_returns_seeded_records_in_order() -> anyhow::Result<()> {
    let app = seeded_app().await?;
    let (status, body) = call(&app, "GET", "/marks", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 3);
    assert_eq!(body["data"][0]["rollno"], "B25AI2113");
    assert_eq!(body["data"][0]["marks"], 92.5);
    assert_eq!(body["data"][2]["rollno"], "B25AI2115");
    Ok(())
}

#[tokio::test]
async fn create_then_get() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = call(&app, "POST", "/marks", Some(json!({"rollno": "B25AI9999", "marks": 77.5}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Marks created successfully");
    assert_eq!(body["data"]["marks"], 77.5);
    let created = body["data"].clone();

    let (status, body) = call(&app, "GET", "/marks/B25AI9999", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "data": created}));
    Ok(())
}

#[tokio::test]
async fn unknown_rollno_is_404_envelope() -> anyhow::Result<()> {
    let (status, body) = call(&app(), "GET", "/marks/NOPE", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "error": "Marks for NOPE not found"}));
    Ok(())
}

#[tokio::test]
async fn out_of_range_marks_rejected_boundaries_accepted() -> anyhow::Result<()> {
    let app = app();
    for bad in [-1.0, 101.0] {
        let (status, body) = call(&app, "POST", "/marks", Some(json!({"rollno": "X1", "marks": bad}))).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"success": false, "error": "Marks must be between 0 and 100"}));
    }
    let (status, _) = call(&app, "POST", "/marks", Some(json!({"rollno": "X2", "marks": 0}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = call(&app, "POST", "/marks", Some(json!({"rollno": "X3", "marks": 100}))).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = call(&app, "GET", "/health", None).await?;
    assert_eq!(body["recordCount"], 2);
    Ok(())
}

#[tokio::test]
async fn duplicate_create_is_409_and_store_unchanged() -> anyhow::Result<()> {
    let app = app();
    let (status, _) = call(&app, "POST", "/marks", Some(json!({"rollno": "D1", "marks": 40}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = call(&app, "POST", "/marks", Some(json!({"rollno": "D1", "marks": 90}))).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Marks already exist for this student");

    let (_, body) = call(&app, "GET", "/marks", None).await?;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["marks"], 40.0);
    Ok(())
}

#[tokio::test]
async fn malformed_body_gets_error_envelope() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = call(&app, "POST", "/marks", Some(json!({"rollno": "M1"}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap_or_default().contains("marks"));

    let (status, body) = call_raw(&app, "/marks", "{not json").await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    Ok(())
}

#[tokio::test]
async fn bad_json_and_out_of_range_marks_are_distinguishable() -> anyhow::Result<()> {
    let app = app();
    let (bad_json, _) = call_raw(&app, "/marks", "{\"rollno\": \"R1\", \"marks\": ").await?;
    let (out_of_range, body) = call(&app, "POST", "/marks", Some(json!({"rollno": "R1", "marks": 150}))).await?;
    assert_eq!(bad_json, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(out_of_range, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Marks must be between 0 and 100");
    Ok(())
}
