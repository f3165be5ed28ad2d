pub mod router;
pub mod types;
pub mod handlers {
    pub mod books;
    pub mod common;
}

pub use router::{create_router, ApiDoc, API_PREFIX};
pub use types::{ApiResponse, AppState};
