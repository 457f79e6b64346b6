use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::errors::auth::AuthError;
use crate::types::db::user::{self, Entity as User};

/// CredentialStore manages user credentials in the database
pub struct CredentialStore {
    db: DatabaseConnection,
}

impl CredentialStore {
    /// Create a new CredentialStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Add a new user to the database
    ///
    /// # Returns
    /// * `Ok(String)` - The user_id (UUID) of the created user
    /// * `Err(AuthError)` - DuplicateUsername if username already exists, or InternalError
    pub async fn add_user(&self, username: String, password: String) -> Result<String, AuthError> {
        let existing_user = User::find()
            .filter(user::Column::Username.eq(&username))
            .one(&self.db)
            .await
            .map_err(|e| AuthError::internal_error(format!("Database error: {}", e)))?;

        if existing_user.is_some() {
            return Err(AuthError::duplicate_username());
        }

        let user_id = Uuid::new_v4().to_string();

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::internal_error(format!("Password hashing error: {}", e)))?
            .to_string();

        let new_user = user::ActiveModel {
            id: Set(user_id.clone()),
            username: Set(username),
            password_hash: Set(password_hash),
            created_at: Set(Utc::now().timestamp()),
        };

        new_user.insert(&self.db).await.map_err(|e| {
            // Unique constraint race between the existence check and the insert
            if e.to_string().contains("UNIQUE") {
                AuthError::duplicate_username()
            } else {
                AuthError::internal_error(format!("Database error: {}", e))
            }
        })?;

        Ok(user_id)
    }

    /// Verify user credentials and return the user_id on success
    ///
    /// # Returns
    /// * `Ok(String)` - The user_id (UUID) if credentials are valid
    /// * `Err(AuthError)` - InvalidCredentials if username not found or password incorrect
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, AuthError> {
        let user = User::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| AuthError::internal_error(format!("Database error: {}", e)))?;

        let user = match user {
            Some(u) => u,
            None => return Err(AuthError::invalid_credentials()),
        };

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| AuthError::internal_error(format!("Corrupt password hash: {}", e)))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::invalid_credentials())?;

        Ok(user.id)
    }
}
