use crate::app::extract::PersonBody;
use crate::app::AppState;
use crate::config::ErrorStatusPolicy;
use crate::core::probes;
use crate::utils::error::{ServiceError, StoreError};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::Value;

pub const CREATE_FAILED: &str = "could not create new person.";
pub const LIST_FAILED: &str = "Error: could not communicate with database.";

/// CRUD failure body. Callers detect failure by the `Error` key.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    #[serde(rename = "Error")]
    pub error: &'static str,
    pub details: Value,
}

fn store_failure(policy: ErrorStatusPolicy, message: &'static str, err: &StoreError) -> Response {
    tracing::error!("❌ {} {}", message, err);

    let status = match policy {
        ErrorStatusPolicy::Legacy => StatusCode::OK,
        ErrorStatusPolicy::Http if err.is_rejection() => StatusCode::BAD_REQUEST,
        ErrorStatusPolicy::Http => StatusCode::BAD_GATEWAY,
    };

    let envelope = ErrorEnvelope {
        error: message,
        details: err.details(),
    };
    (status, Json(envelope)).into_response()
}

/// Probe failures surface as a plain 500 with the raw error text.
fn probe_failure(err: ServiceError) -> Response {
    tracing::error!("❌ Probe failed: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
}

pub async fn index(State(state): State<AppState>) -> Response {
    match probes::read_index(&state.config.server.index_path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], bytes).into_response(),
        Err(e) => probe_failure(e),
    }
}

pub async fn create_person(State(state): State<AppState>, PersonBody(input): PersonBody) -> Response {
    match state.directory.append(input).await {
        Ok(echo) => Json(echo).into_response(),
        Err(e) => store_failure(state.config.server.error_status, CREATE_FAILED, &e),
    }
}

pub async fn show_all(State(state): State<AppState>) -> Response {
    match state.directory.list_all().await {
        Ok(people) => Json(people).into_response(),
        Err(e) => store_failure(state.config.server.error_status, LIST_FAILED, &e),
    }
}

pub async fn write_file(State(state): State<AppState>) -> Response {
    let probe = &state.config.probes;
    match probes::write_probe_file(&probe.file_path, &probe.file_contents).await {
        Ok(()) => "OK".into_response(),
        Err(e) => probe_failure(e),
    }
}

pub async fn read_dir(State(state): State<AppState>) -> Response {
    match probes::list_directory(&state.config.probes.read_dir).await {
        Ok(names) => Json(names).into_response(),
        Err(e) => probe_failure(e),
    }
}

pub async fn host(State(state): State<AppState>) -> Response {
    let interface = state.config.probes.interface.clone();
    let result = tokio::task::spawn_blocking(move || probes::host_info(&interface)).await;

    match result {
        Ok(Ok(info)) => Json(info).into_response(),
        Ok(Err(e)) => probe_failure(e),
        Err(join_error) => probe_failure(ServiceError::IoError(std::io::Error::other(join_error))),
    }
}
