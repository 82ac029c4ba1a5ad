use super::{password, User};
use crate::{
    error::{AppError, AppResult},
    infrastructure::repositories::UserRepository,
};
use std::sync::Arc;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Registers accounts and checks login attempts
pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Create a user, failing with `Conflict` if the username is taken
    pub async fn register(&self, username: &str, password: &str) -> AppResult<User> {
        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        let password_hash = password::hash_password(password)?;

        // The unique index still guards against a concurrent registration
        let user = self.user_repo.create(username, &password_hash).await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    /// Authenticate a user.
    ///
    /// Unknown usernames and wrong passwords fail identically.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<User> {
        let Some(user) = self.user_repo.find_by_username(username).await? else {
            password::verify_dummy_password(password);
            tracing::info!(username = %username, "Login rejected");
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        if !password::verify_password(password, &user.password_hash)? {
            tracing::info!(username = %username, "Login rejected");
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(user)
    }
}
