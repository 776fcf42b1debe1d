//! Products API
//!
//! Wires the products and users domains onto one axum router backed by a
//! single sea-orm pool.
//!
//! ## Modules
//!
//! - `api`: per-domain route builders and the readiness check
//! - `config`: environment configuration
//! - `openapi`: combined documentation
//! - `state`: shared connection pool and JWT keys

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use core_config::AppInfo;
use std::io;

pub use config::Config;
pub use state::AppState;

/// The complete application: API routes, documentation, cross-cutting layers,
/// `/health` and `/ready`.
pub fn build_app(state: &AppState, app_info: AppInfo, cors_origins: Option<&str>) -> io::Result<Router> {
    let apis = api::routes(state)
        .merge(health_router(app_info))
        .merge(api::ready_router(state.clone()));

    create_router::<openapi::ApiDoc>(apis, cors_origins)
}
