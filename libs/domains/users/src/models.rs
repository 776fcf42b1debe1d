use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidateEmail};

use crate::error::{UserError, UserResult};

/// User entity
///
/// The plaintext password never outlives [`User::new`]; only the Argon2
/// PHC string is kept, and it is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Stored lowercased
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Validate the fields and hash `password` with a fresh salt.
    pub fn new(name: &str, email: &str, password: &str) -> UserResult<Self> {
        let name = name.trim();
        let email = normalize_email(email);

        if name.is_empty() {
            return Err(UserError::Validation("name must not be empty".to_string()));
        }
        if email.is_empty() {
            return Err(UserError::Validation("email must not be empty".to_string()));
        }
        if !email.validate_email() {
            return Err(UserError::Validation(format!("'{email}' is not a valid email")));
        }
        if password.is_empty() {
            return Err(UserError::Validation("password must not be empty".to_string()));
        }

        Ok(Self {
            id: Uuid::now_v7(),
            name: name.to_string(),
            email,
            password_hash: hash_password(password)?,
            created_at: Utc::now(),
        })
    }

    /// Check `password` against the stored hash.
    ///
    /// An unparseable stored hash counts as a mismatch.
    pub fn validate_password(&self, password: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.password_hash) else {
            tracing::warn!(user_id = %self.id, "Stored password hash is not a PHC string");
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

/// Emails are compared case-insensitively by storing them lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn hash_password(password: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}

/// User response DTO (without password_hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Body of `POST /users`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(max = 100))]
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[validate(length(max = 255))]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[validate(length(max = 128))]
    pub password: String,
}

/// Body of `POST /users/token`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TokenRequest {
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_hashes_password() {
        let user = User::new("Ada", "Ada@Example.com ", "correct horse").unwrap();

        assert_ne!(user.password_hash, "correct horse");
        assert!(user.password_hash.starts_with("$argon2id$"));
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.id.get_version_num(), 7);
    }

    #[test]
    fn test_validate_password() {
        let user = User::new("Ada", "ada@example.com", "correct horse").unwrap();

        assert!(user.validate_password("correct horse"));
        assert!(!user.validate_password("wrong horse"));
        assert!(!user.validate_password(""));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let a = User::new("Ada", "ada@example.com", "secret").unwrap();
        let b = User::new("Bob", "bob@example.com", "secret").unwrap();
        assert_ne!(a.password_hash, b.password_hash);
    }

    #[test]
    fn test_new_user_rejects_empty_fields() {
        for (name, email, password) in [
            ("", "ada@example.com", "secret"),
            ("  ", "ada@example.com", "secret"),
            ("Ada", "", "secret"),
            ("Ada", "ada@example.com", ""),
        ] {
            assert!(
                matches!(User::new(name, email, password), Err(UserError::Validation(_))),
                "({name:?}, {email:?}, {password:?}) should be rejected"
            );
        }
    }

    #[test]
    fn test_new_user_rejects_invalid_email() {
        assert!(matches!(
            User::new("Ada", "not-an-email", "secret"),
            Err(UserError::Validation(_))
        ));
    }

    #[test]
    fn test_corrupt_hash_never_validates() {
        let mut user = User::new("Ada", "ada@example.com", "secret").unwrap();
        user.password_hash = "plaintext".to_string();
        assert!(!user.validate_password("secret"));
        assert!(!user.validate_password("plaintext"));
    }

    #[test]
    fn test_hash_is_not_serialized() {
        let user = User::new("Ada", "ada@example.com", "secret").unwrap();
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "ada@example.com");
    }
}
