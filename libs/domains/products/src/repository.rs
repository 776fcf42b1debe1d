use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{ListProducts, Product, ProductPage, SortOrder};

/// Repository trait for Product persistence
///
/// Implementations: [`crate::SeaOrmProductRepository`] for a relational
/// store and [`InMemoryProductRepository`] for tests and local runs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product
    async fn create(&self, product: &Product) -> ProductResult<Product>;

    /// Get a product by ID, `NotFound` if absent
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Product>;

    /// List products ordered by creation time, paginated when both
    /// `page` and `limit` are non-zero
    async fn find_all(&self, query: ListProducts) -> ProductResult<ProductPage>;

    /// Overwrite name and price of an existing product
    async fn update(&self, product: &Product) -> ProductResult<Product>;

    /// Delete a product by ID, `NotFound` if absent
    async fn delete(&self, id: Uuid) -> ProductResult<()>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: &Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Product> {
        let products = self.products.read().await;
        products.get(&id).cloned().ok_or(ProductError::NotFound(id))
    }

    async fn find_all(&self, query: ListProducts) -> ProductResult<ProductPage> {
        let products = self.products.read().await;

        let mut data: Vec<Product> = products.values().cloned().collect();
        data.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        if query.sort == SortOrder::Desc {
            data.reverse();
        }

        if let Some((offset, limit)) = query.window() {
            let offset = usize::try_from(offset).unwrap_or(usize::MAX);
            let limit = usize::try_from(limit).unwrap_or(usize::MAX);
            data = data.into_iter().skip(offset).take(limit).collect();
        }

        Ok(ProductPage {
            data,
            page: query.page,
            limit: query.limit,
        })
    }

    async fn update(&self, product: &Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        let stored = products
            .get_mut(&product.id)
            .ok_or(ProductError::NotFound(product.id))?;

        stored.name = product.name.clone();
        stored.price = product.price;

        tracing::info!(product_id = %product.id, "Updated product");
        Ok(stored.clone())
    }

    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        let mut products = self.products.write().await;
        products.remove(&id).ok_or(ProductError::NotFound(id))?;

        tracing::info!(product_id = %id, "Deleted product");
        Ok(())
    }
}
