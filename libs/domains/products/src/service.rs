use std::sync::Arc;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, ListProducts, Product, ProductPage, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate then persist; invalid input never reaches the repository.
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input.name, input.price)?;
        self.repository.create(&product).await
    }

    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository.find_by_id(id).await
    }

    pub async fn list_products(&self, query: ListProducts) -> ProductResult<ProductPage> {
        self.repository.find_all(query).await
    }

    /// Merge `input` over a product loaded with [`Self::get_product`] and persist it.
    pub async fn update_product(
        &self,
        mut existing: Product,
        input: UpdateProduct,
    ) -> ProductResult<Product> {
        existing.apply_update(input)?;
        self.repository.update(&existing).await
    }

    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        self.repository.delete(id).await
    }
}
