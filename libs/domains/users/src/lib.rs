//! Users Domain
//!
//! Registration with Argon2 password hashing and the token endpoint that
//! hands out the bearer tokens required by the product routes.
//!
//! ```rust,ignore
//! use domain_users::{handlers, SeaOrmUserRepository, UserService};
//!
//! let service = UserService::new(SeaOrmUserRepository::new(db.clone()));
//! let router = handlers::router(service, jwt_auth.clone());
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{CreateUser, TokenRequest, TokenResponse, User, UserResponse};
pub use postgres::SeaOrmUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
