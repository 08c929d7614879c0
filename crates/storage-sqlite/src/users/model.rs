//! Database models for users.

use chrono::Utc;
use diesel::prelude::*;

use crate::errors::StorageError;
use crate::utils::timestamp_column;
use wealthnest_core::users::{NewUserRecord, User};
use wealthnest_core::utils::time_utils::format_timestamp;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: String,
}

impl TryFrom<UserDB> for User {
    type Error = StorageError;

    fn try_from(db: UserDB) -> Result<Self, Self::Error> {
        Ok(User {
            created_at: timestamp_column(&db.created_at, "users.created_at")?,
            id: db.id,
            name: db.name,
            email: db.email,
            password_hash: db.password_hash,
        })
    }
}

impl From<NewUserRecord> for NewUserDB {
    fn from(record: NewUserRecord) -> Self {
        NewUserDB {
            name: record.name,
            email: record.email,
            password_hash: record.password_hash,
            created_at: format_timestamp(Utc::now()),
        }
    }
}
