use crate::domain::{Book, NewBook};
use crate::transport::http::handlers::books;
use crate::transport::http::types::{ApiResponse, AppState};
use axum::routing::{delete, get, post, put};
use axum::Router;
use utoipa::OpenApi;

pub const API_PREFIX: &str = "/api/v1";

#[derive(OpenApi)]
#[openapi(
    paths(
        books::create_book_handler,
        books::update_book_handler,
        books::delete_book_handler,
        books::get_book_handler,
        books::list_books_handler
    ),
    components(schemas(ApiResponse, Book, NewBook))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    // The bare `/delete_book/` and `/get_book/` forms route to a handler that
    // answers the "id required" response instead of a 404.
    let api = Router::new()
        .route("/create_books", post(books::create_book_handler))
        .route("/update_book", put(books::update_book_handler))
        .route("/delete_book/", delete(books::missing_id_handler))
        .route("/delete_book/:id", delete(books::delete_book_handler))
        .route("/get_book/", get(books::missing_id_handler))
        .route("/get_book/:id", get(books::get_book_handler))
        .route("/books", get(books::list_books_handler));

    Router::new().nest(API_PREFIX, api).with_state(app_state)
}
