use axum::Router;
use domain_products::{ProductService, SeaOrmProductRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = SeaOrmProductRepository::new(state.db.clone());
    let service = ProductService::new(repository);
    handlers::router(service)
}
