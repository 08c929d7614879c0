use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Registered user. The password hash never leaves the process.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Registration input.
#[derive(Deserialize, Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    /// Validates the input and returns a copy with trimmed name and
    /// lowercased email.
    pub fn normalized(self) -> Result<Self> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        let email = normalize_email(&self.email);
        if email.is_empty() {
            return Err(ValidationError::MissingField("email".to_string()).into());
        }
        if !is_plausible_email(&email) {
            return Err(Error::invalid_input(format!("Invalid email address: {}", email)));
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("password".to_string()).into());
        }
        Ok(NewUser {
            name,
            email,
            password: self.password,
        })
    }
}

/// Row handed to the repository once the password is hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUserRecord {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
