use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use itemstore_core::{DomainError, ItemId};

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        // A duplicate id is a client error on this API, not a 409.
        DomainError::AlreadyExists => {
            json_error(StatusCode::BAD_REQUEST, "already_exists", "Item already exists")
        }
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "Item not found"),
        DomainError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
    }
}

/// Malformed, mistyped or incomplete JSON bodies are validation failures.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    tracing::debug!(status = rejection.status().as_u16(), "rejected request body: {rejection}");
    json_error(StatusCode::BAD_REQUEST, "validation_error", rejection.body_text())
}

pub fn query_rejection_to_response(rejection: QueryRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_id", rejection.body_text())
}

/// Path segments that cannot be extracted at all (e.g. invalid percent-encoding).
pub fn path_rejection_to_response(rejection: PathRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_id", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_item_id(raw: &str) -> Result<ItemId, axum::response::Response> {
    raw.parse::<ItemId>().map_err(domain_error_to_response)
}

pub fn item_id_from_path(
    path: Result<Path<String>, PathRejection>,
) -> Result<ItemId, axum::response::Response> {
    let Path(raw) = path.map_err(path_rejection_to_response)?;
    parse_item_id(&raw)
}
