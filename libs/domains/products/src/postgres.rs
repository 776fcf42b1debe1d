use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};
use uuid::Uuid;

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{ListProducts, Product, ProductPage},
    repository::ProductRepository,
};

/// [`ProductRepository`] over a sea-orm connection (PostgreSQL or SQLite)
#[derive(Clone)]
pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ensure_exists(&self, id: Uuid) -> ProductResult<()> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(|_| ())
            .ok_or(ProductError::NotFound(id))
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn create(&self, product: &Product) -> ProductResult<Product> {
        let model = entity::ActiveModel::from(product).insert(&self.db).await?;

        tracing::info!(product_id = %model.id, "Created product");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Product> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Product::from)
            .ok_or(ProductError::NotFound(id))
    }

    async fn find_all(&self, query: ListProducts) -> ProductResult<ProductPage> {
        let order: sea_orm::Order = query.sort.into();
        let mut select = entity::Entity::find()
            .order_by(entity::Column::CreatedAt, order.clone())
            .order_by(entity::Column::Id, order);

        if let Some((offset, limit)) = query.window() {
            select = select.offset(offset).limit(limit);
        }

        let models = select.all(&self.db).await?;

        Ok(ProductPage {
            data: models.into_iter().map(Product::from).collect(),
            page: query.page,
            limit: query.limit,
        })
    }

    async fn update(&self, product: &Product) -> ProductResult<Product> {
        self.ensure_exists(product.id).await?;

        let model = entity::update_model(product).update(&self.db).await?;

        tracing::info!(product_id = %product.id, "Updated product");
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        self.ensure_exists(id).await?;

        entity::Entity::delete_by_id(id).exec(&self.db).await?;

        tracing::info!(product_id = %id, "Deleted product");
        Ok(())
    }
}
