use crate::domain::check::{err, CheckForm, CheckRequest};
use crate::http::page::{self, Outcome};
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::{Form, Json};

pub async fn form_page() -> impl IntoResponse {
    let form = page::default_form(chrono::Local::now().naive_local());
    Html(page::render(&form, None))
}

pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<CheckForm>,
) -> impl IntoResponse {
    let result = form
        .clone()
        .into_request()
        .and_then(|req| state.check_service.check(&req));

    match result {
        Ok(resp) => {
            let outcome = Outcome::Status(resp.message);
            (axum::http::StatusCode::OK, Html(page::render(&form, Some(&outcome)))).into_response()
        }
        Err((status, body)) => {
            let outcome = Outcome::Error(body.error.message);
            (status, Html(page::render(&form, Some(&outcome)))).into_response()
        }
    }
}

pub async fn check_json(
    State(state): State<AppState>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!("rejected check body: {}", rejection.body_text());
            let mut body = err("INVALID_REQUEST", "request body is not a valid check");
            body.error.details = Some(rejection.body_text());
            return (axum::http::StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    match state.check_service.check(&req) {
        Ok(resp) => (axum::http::StatusCode::OK, Json(resp)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}
