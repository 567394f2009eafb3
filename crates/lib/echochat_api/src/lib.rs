//! # echochat_api
//!
//! HTTP API library for Echochat: the echo endpoint and the chat page.

pub mod config;
pub mod error;
pub mod handlers;

use std::any::Any;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use echochat_core::CHAT_ROUTE;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::error::AppError;
use crate::handlers::{chat, page};

/// Builds the Axum router with all routes.
pub fn router(config: &ApiConfig) -> Router {
    let routes = Router::new()
        .route("/", get(page::index_page))
        .route(CHAT_ROUTE, post(chat::chat_handler));

    with_layers(routes, config)
}

/// Wraps `routes` with body limit, panic recovery, tracing and CORS.
fn with_layers(routes: Router, config: &ApiConfig) -> Router {
    let routes = match config.body_limit {
        Some(limit) => routes.layer(DefaultBodyLimit::max(limit)),
        None => routes,
    };

    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    routes
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::Internal(detail).into_response()
}
