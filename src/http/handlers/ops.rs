use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

pub async fn health() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "ok")
}

pub async fn liveness() -> impl IntoResponse {
    (axum::http::StatusCode::OK, Json(serde_json::json!({"alive": true}))).into_response()
}

// The classifier is loaded before the listener binds, so a serving process is always ready.
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let summary = state.check_service.classifier.summary();
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({
            "ready": true,
            "model": summary,
        })),
    )
        .into_response()
}

pub async fn model_summary(State(state): State<AppState>) -> impl IntoResponse {
    (axum::http::StatusCode::OK, Json(state.check_service.classifier.summary())).into_response()
}
