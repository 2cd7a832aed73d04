use axum::{
    Router,
    http::{Method, header},
    routing::get,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::search_client::BlogSearch;
use crate::service::KeywordService;

pub mod handlers;
pub mod models;

pub fn create_router<S: BlogSearch + 'static>(service: Arc<KeywordService<S>>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/search",
            get(handlers::search_handler::<S>)
                .post(handlers::search_handler::<S>)
                .options(handlers::preflight_handler),
        )
        .with_state(service)
        .layer(cors)
}
