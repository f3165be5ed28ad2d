use crate::domain::{Book, NewBook};
use crate::transport::http::handlers::common::{id_required, json_body, parse_id, required_id};
use crate::transport::http::types::{
    reply, ApiResponse, AppState, MSG_CREATED, MSG_CREATE_FAILED, MSG_DELETED, MSG_DELETE_FAILED,
    MSG_FETCHED, MSG_LISTED, MSG_LIST_FAILED, MSG_NOT_FOUND, MSG_UPDATED, MSG_UPDATE_FAILED,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/v1/create_books",
    request_body = NewBook,
    responses(
        (status = 200, description = "Book created", body = ApiResponse),
        (status = 400, description = "Insert failed", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse)
    )
)]
pub async fn create_book_handler(
    State(state): State<AppState>,
    request: Result<Json<NewBook>, JsonRejection>,
) -> Response {
    let new_book = match json_body(request, "create_book") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match state.books.insert(&new_book).await {
        Ok(book) => {
            tracing::debug!(id = book.id, "book created");
            reply(StatusCode::OK, ApiResponse::message(MSG_CREATED))
        }
        Err(e) => {
            tracing::warn!(error = %e, "create book failed");
            reply(StatusCode::BAD_REQUEST, ApiResponse::message(MSG_CREATE_FAILED))
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/update_book",
    request_body = Book,
    responses(
        (status = 200, description = "Book written", body = ApiResponse),
        (status = 400, description = "Save failed", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse)
    )
)]
pub async fn update_book_handler(
    State(state): State<AppState>,
    request: Result<Json<Book>, JsonRejection>,
) -> Response {
    let book = match json_body(request, "update_book") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match state.books.save(&book).await {
        Ok(saved) => {
            tracing::debug!(id = saved.id, "book saved");
            reply(StatusCode::OK, ApiResponse::message(MSG_UPDATED))
        }
        Err(e) => {
            tracing::warn!(id = book.id, error = %e, "update book failed");
            reply(StatusCode::BAD_REQUEST, ApiResponse::message(MSG_UPDATE_FAILED))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/delete_book/{id}",
    params(
        ("id" = String, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "Delete statement succeeded (also for unknown ids)", body = ApiResponse),
        (status = 400, description = "Id is not an integer or the delete failed", body = ApiResponse),
        (status = 500, description = "Id missing", body = ApiResponse)
    )
)]
pub async fn delete_book_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let raw_id = match required_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(id) = parse_id(raw_id) else {
        tracing::warn!(id = %raw_id, "delete book: id is not an integer");
        return reply(StatusCode::BAD_REQUEST, ApiResponse::message(MSG_DELETE_FAILED));
    };

    match state.books.delete(id).await {
        Ok(removed) => {
            tracing::debug!(id, removed, "book delete executed");
            reply(StatusCode::OK, ApiResponse::message(MSG_DELETED))
        }
        Err(e) => {
            tracing::warn!(id, error = %e, "delete book failed");
            reply(StatusCode::BAD_REQUEST, ApiResponse::message(MSG_DELETE_FAILED))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/get_book/{id}",
    params(
        ("id" = String, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "Book found; `data` holds the record", body = ApiResponse),
        (status = 400, description = "No such book, id not an integer, or query failed", body = ApiResponse),
        (status = 500, description = "Id missing", body = ApiResponse)
    )
)]
pub async fn get_book_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let raw_id = match required_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(id) = parse_id(raw_id) else {
        tracing::warn!(id = %raw_id, "get book: id is not an integer");
        return reply(StatusCode::BAD_REQUEST, ApiResponse::message(MSG_NOT_FOUND));
    };

    let book = match state.books.find(id).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(id, error = %e, "get book failed");
            return reply(StatusCode::BAD_REQUEST, ApiResponse::message(MSG_NOT_FOUND));
        }
    };

    match serde_json::to_value(&book) {
        Ok(data) => reply(StatusCode::OK, ApiResponse::with_data(MSG_FETCHED, data)),
        Err(e) => {
            tracing::warn!(id, error = %e, "get book: encoding failed");
            reply(StatusCode::BAD_REQUEST, ApiResponse::message(MSG_NOT_FOUND))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/books",
    responses(
        (status = 200, description = "All books; `data` holds the records", body = ApiResponse),
        (status = 400, description = "Query failed", body = ApiResponse)
    )
)]
pub async fn list_books_handler(State(state): State<AppState>) -> Response {
    let books = match state.books.list().await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(error = %e, "list books failed");
            return reply(StatusCode::BAD_REQUEST, ApiResponse::message(MSG_LIST_FAILED));
        }
    };

    match serde_json::to_value(&books) {
        Ok(data) => reply(StatusCode::OK, ApiResponse::with_data(MSG_LISTED, data)),
        Err(e) => {
            tracing::warn!(error = %e, "list books: encoding failed");
            reply(StatusCode::BAD_REQUEST, ApiResponse::message(MSG_LIST_FAILED))
        }
    }
}

/// Serves the bare `/get_book/` and `/delete_book/` paths, which carry no id.
pub async fn missing_id_handler() -> Response {
    id_required()
}
