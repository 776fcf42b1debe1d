use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{
    entity,
    error::{UserError, UserResult, insert_error},
    models::{User, normalize_email},
    repository::UserRepository,
};

/// [`UserRepository`] over a sea-orm connection (PostgreSQL or SQLite)
///
/// Email uniqueness is enforced by the unique index on `users.email`.
#[derive(Clone)]
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, user: &User) -> UserResult<User> {
        let model = entity::ActiveModel::from(user)
            .insert(&self.db)
            .await
            .map_err(|e| insert_error(e, &user.email))?;

        tracing::info!(user_id = %model.id, "Created user");
        Ok(model.into())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<User> {
        let email = normalize_email(email);

        entity::Entity::find()
            .filter(entity::Column::Email.eq(email.as_str()))
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or(UserError::NotFound(email))
    }
}
