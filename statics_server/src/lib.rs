//! # statics_server
//!
//! HTTP front end for `statics_core`. Every route is stateless: the request
//! body carries the whole beam and the reply is computed on the spot.

pub mod config;
pub mod error;
pub mod routes;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub use config::ServerConfig;
pub use error::{ApiError, ApiJson};

/// Build the application router
pub fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health))
        .route("/api/beam/analyze", post(routes::analyze))
        .route("/api/beam/reactions", post(routes::reactions))
        .route("/api/beam/center-of-mass", post(routes::center_of_mass))
        .route("/api/beam/torsor-at", post(routes::torsor_at))
        .route("/api/section/rectangular", post(routes::rectangular_section))
        .route("/api/section/i-beam", post(routes::i_section))
        .route("/api/section/composite", post(routes::composite_section))
        .route("/api/truss/analyze", post(routes::truss))
        .route("/api/frame/analyze", post(routes::frame))
        .route("/api/mechanics/center-of-mass-3d", post(routes::center_of_mass_3d))
        .route("/api/mechanics/force-from-torsor", post(routes::force_from_torsor))
        .layer(cors)
}
