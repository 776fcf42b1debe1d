//! Products Domain
//!
//! Product catalogue: validation, persistence through sea-orm and the HTTP
//! endpoints mounted under `/products`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + sea-orm implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_products::{handlers, ProductService, SeaOrmProductRepository};
//!
//! let repository = SeaOrmProductRepository::new(db.clone());
//! let service = ProductService::new(repository);
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateProduct, ListProducts, Product, ProductListQuery, ProductPage, SortOrder, UpdateProduct,
};
pub use postgres::SeaOrmProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
