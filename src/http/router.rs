use crate::http::handlers::{check, ops};
use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/", get(check::form_page))
        .route("/check", post(check::submit_form))
        .route("/api/check", post(check::check_json))
        .route("/model", get(ops::model_summary))
        .route("/health", get(ops::health))
        .route("/ops/readiness", get(ops::readiness))
        .route("/ops/liveness", get(ops::liveness))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
