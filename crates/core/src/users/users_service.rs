use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use super::users_model::{normalize_email, NewUser, NewUserRecord, User};
use super::users_traits::{PasswordHasherTrait, UserRepositoryTrait, UserServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

const EMAIL_TAKEN: &str = "Email already registered";

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
    hasher: Arc<dyn PasswordHasherTrait>,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn UserRepositoryTrait>,
        hasher: Arc<dyn PasswordHasherTrait>,
    ) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, new_user: NewUser) -> Result<User> {
        let new_user = new_user.normalized()?;
        if self.repository.find_by_email(&new_user.email)?.is_some() {
            return Err(Error::ConstraintViolation(EMAIL_TAKEN.to_string()));
        }

        let record = NewUserRecord {
            password_hash: self.hasher.hash(&new_user.password)?,
            name: new_user.name,
            email: new_user.email,
        };
        // A concurrent registration can still win the race; the unique index decides.
        let user = self.repository.create(record).await.map_err(|e| match e {
            Error::Database(DatabaseError::UniqueViolation(_)) => {
                Error::ConstraintViolation(EMAIL_TAKEN.to_string())
            }
            other => other,
        })?;
        info!("Registered user {}", user.id);
        Ok(user)
    }

    fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let Some(user) = self.repository.find_by_email(&normalize_email(email))? else {
            debug!("Login attempt for unknown email");
            return Err(Error::InvalidCredentials);
        };
        if !self.hasher.verify(password, &user.password_hash)? {
            debug!("Login attempt with wrong password for user {}", user.id);
            return Err(Error::InvalidCredentials);
        }
        Ok(user)
    }

    fn get_user(&self, user_id: i64) -> Result<User> {
        self.repository.get_by_id(user_id)
    }

    fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.repository.find_by_email(&normalize_email(email))
    }

    fn list_users(&self) -> Result<Vec<User>> {
        self.repository.list()
    }
}
