//! HTTP API application wiring (Axum router + store injection).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::path::Path;
use std::sync::Arc;

use axum::{
    Extension, Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use stockroom_inventory::AssetStore;

pub mod dto;
pub mod errors;
pub mod routes;

/// Store handle shared by every request.
pub type SharedStore = Arc<dyn AssetStore>;

/// Build the full HTTP router (public entrypoint used by the server and tests).
///
/// Paths outside `/api` and `/health` are served from `public_dir`.
pub fn build_app(store: SharedStore, public_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .fallback_service(ServeDir::new(public_dir.as_ref()))
        .layer(Extension(store))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(cors),
        )
}
