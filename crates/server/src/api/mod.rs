//! HTTP routes and error mapping for the trivia API.

pub mod categories;
pub mod error;
pub mod questions;
pub mod quiz;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use tower_http::cors::{Any, CorsLayer};

pub use error::ApiError;
pub use state::AppState;

/// Full application router, CORS open to any origin for the frontend.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .merge(categories::create_category_router())
        .merge(questions::create_question_router())
        .merge(quiz::create_quiz_router())
        .fallback(error::route_not_found)
        .method_not_allowed_fallback(error::method_not_allowed)
        .layer(cors)
        .with_state(Arc::new(state))
}
