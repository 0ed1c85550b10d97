// file: src/web/routes.rs
// description: route table

use crate::web::handlers;
use crate::web::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/classify/",
            post(handlers::classify).fallback(handlers::method_not_allowed),
        )
        .route(
            "/models/",
            get(handlers::list_models).fallback(handlers::method_not_allowed),
        )
        .with_state(state)
}
