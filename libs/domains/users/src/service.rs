use std::sync::Arc;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, User};
use crate::repository::UserRepository;

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate, hash and persist a new user.
    pub async fn register(&self, input: CreateUser) -> UserResult<User> {
        input.validate()?;

        let user = User::new(&input.name, &input.email, &input.password)?;
        self.repository.create(&user).await
    }

    /// Look up `email` and check `password`.
    ///
    /// Unknown email and wrong password both yield `InvalidCredentials`.
    pub async fn authenticate(&self, email: &str, password: &str) -> UserResult<User> {
        let user = match self.repository.find_by_email(email).await {
            Ok(user) => user,
            Err(UserError::NotFound(_)) => return Err(UserError::InvalidCredentials),
            Err(e) => return Err(e),
        };

        if !user.validate_password(password) {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }
}
