//! Application state management

use axum_helpers::JwtAuth;
use database::postgres::DatabaseConnection;

/// Shared by the route builders; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Verifies bearer tokens on `/products` and signs them on `/users/token`
    pub jwt_auth: JwtAuth,
}
