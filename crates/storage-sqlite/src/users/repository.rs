use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::{NewUserDB, UserDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::users;
use wealthnest_core::users::{NewUserRecord, User, UserRepositoryTrait};
use wealthnest_core::Result;

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserRepository { pool, writer }
    }
}

fn to_users(rows: Vec<UserDB>) -> Result<Vec<User>> {
    rows.into_iter()
        .map(User::try_from)
        .collect::<std::result::Result<Vec<_>, _>>()
        .into_core()
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn get_by_id(&self, user_id: i64) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        let row = users::table
            .find(user_id)
            .select(UserDB::as_select())
            .first(&mut conn)
            .into_core()?;
        User::try_from(row).into_core()
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        users::table
            .filter(users::email.eq(email))
            .select(UserDB::as_select())
            .first(&mut conn)
            .optional()
            .into_core()?
            .map(User::try_from)
            .transpose()
            .into_core()
    }

    fn list(&self) -> Result<Vec<User>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = users::table
            .order(users::id.asc())
            .select(UserDB::as_select())
            .load(&mut conn)
            .into_core()?;
        to_users(rows)
    }

    async fn create(&self, record: NewUserRecord) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let new_row: NewUserDB = record.into();
                let row = diesel::insert_into(users::table)
                    .values(&new_row)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                User::try_from(row).into_core()
            })
            .await
    }
}
