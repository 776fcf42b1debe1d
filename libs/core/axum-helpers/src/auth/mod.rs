//! Authentication module.
//!
//! - [`JwtConfig`]: secret and token lifetime from the environment
//! - [`JwtAuth`]: HS256 issue/verify
//! - [`jwt_auth_middleware`] and the [`AuthUser`] extractor for protected routes
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, JwtConfig, jwt_auth_middleware};
//! use core_config::FromEnv;
//!
//! let auth = JwtAuth::new(&JwtConfig::from_env()?);
//!
//! let protected = Router::new()
//!     .route("/products", get(handler))
//!     .route_layer(axum::middleware::from_fn_with_state(auth, jwt_auth_middleware));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use jwt::{IssueError, IssuedToken, JwtAuth, JwtClaims};
pub use middleware::{AuthUser, jwt_auth_middleware};
