use async_trait::async_trait;

use super::users_model::{NewUser, NewUserRecord, User};
use crate::errors::Result;

/// Trait defining the contract for user storage.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Fails with `DatabaseError::NotFound` when the id is unknown.
    fn get_by_id(&self, user_id: i64) -> Result<User>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    fn list(&self) -> Result<Vec<User>>;
    /// Fails with `DatabaseError::UniqueViolation` when the email is taken.
    async fn create(&self, record: NewUserRecord) -> Result<User>;
}

/// One-way password hashing.
pub trait PasswordHasherTrait: Send + Sync {
    fn hash(&self, password: &str) -> Result<String>;
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool>;
}

/// Trait defining the contract for user operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, new_user: NewUser) -> Result<User>;
    /// Returns the user when the credentials match, `Error::InvalidCredentials` otherwise.
    fn authenticate(&self, email: &str, password: &str) -> Result<User>;
    fn get_user(&self, user_id: i64) -> Result<User>;
    fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    fn list_users(&self) -> Result<Vec<User>>;
}
