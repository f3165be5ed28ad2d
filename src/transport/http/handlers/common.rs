use crate::transport::http::types::{reply, ApiResponse, MSG_ID_REQUIRED, MSG_REQUEST_FAILED};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

/// Unwraps a JSON body, turning any rejection (syntax, shape, content type,
/// size) into a 422 with the generic message.
pub fn json_body<T>(request: Result<Json<T>, JsonRejection>, operation: &str) -> Result<T, Response> {
    match request {
        Ok(Json(v)) => Ok(v),
        Err(e) => {
            tracing::debug!(operation, error = %e, "rejected request body");
            Err(reply(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiResponse::message(MSG_REQUEST_FAILED),
            ))
        }
    }
}

/// The 500 returned when a request names no book id.
pub fn id_required() -> Response {
    reply(
        StatusCode::INTERNAL_SERVER_ERROR,
        ApiResponse::message(MSG_ID_REQUIRED),
    )
}

/// Returns the trimmed id path segment, or the 500 precondition response when
/// it is blank. Runs before any store access.
pub fn required_id(id: &str) -> Result<&str, Response> {
    let id = id.trim();
    if id.is_empty() {
        return Err(id_required());
    }
    Ok(id)
}

/// Parses a non-empty id segment. `None` means the id cannot name any row.
pub fn parse_id(id: &str) -> Option<i64> {
    id.parse::<i64>().ok()
}
