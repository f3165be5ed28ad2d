use crate::storage::BookStore;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookStore>,
}

impl AppState {
    pub fn new(books: Arc<dyn BookStore>) -> Self {
        Self { books }
    }
}

/// Response envelope shared by every endpoint.
#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
}

impl ApiResponse {
    pub fn message(message: &str) -> Self {
        Self {
            message: message.to_string(),
            data: None,
        }
    }

    pub fn with_data(message: &str, data: JsonValue) -> Self {
        Self {
            message: message.to_string(),
            data: Some(data),
        }
    }
}

/// Pairs a status code with an envelope.
pub fn reply(status: StatusCode, body: ApiResponse) -> Response {
    (status, Json(body)).into_response()
}

pub const MSG_REQUEST_FAILED: &str = "Request failed";
pub const MSG_ID_REQUIRED: &str = "The book id is required";

pub const MSG_CREATED: &str = "Book created successfully";
pub const MSG_CREATE_FAILED: &str = "Error creating a book";

pub const MSG_UPDATED: &str = "Book updated successfully";
pub const MSG_UPDATE_FAILED: &str = "Error updating a book";

pub const MSG_DELETED: &str = "Book deleted successfully";
pub const MSG_DELETE_FAILED: &str = "Could not delete book";

pub const MSG_FETCHED: &str = "Book fetched successfully";
pub const MSG_NOT_FOUND: &str = "Could not find book";

pub const MSG_LISTED: &str = "Books fetched successfully";
pub const MSG_LIST_FAILED: &str = "Could not get books";
