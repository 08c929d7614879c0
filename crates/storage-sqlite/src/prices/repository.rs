use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::PriceDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::prices;
use wealthnest_core::prices::{Price, PriceRepositoryTrait};
use wealthnest_core::Result;

pub struct PriceRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PriceRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PriceRepository { pool, writer }
    }
}

#[async_trait]
impl PriceRepositoryTrait for PriceRepository {
    fn load_prices(&self) -> Result<Vec<Price>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = prices::table
            .order(prices::symbol.asc())
            .select(PriceDB::as_select())
            .load(&mut conn)
            .into_core()?;

        rows.into_iter()
            .map(Price::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()
            .into_core()
    }

    async fn upsert_prices(&self, rows: Vec<Price>) -> Result<usize> {
        if rows.is_empty() {
            return Ok(0);
        }
        let rows: Vec<PriceDB> = rows.into_iter().map(PriceDB::from).collect();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut affected = 0;
                for row in &rows {
                    affected += diesel::insert_into(prices::table)
                        .values(row)
                        .on_conflict(prices::symbol)
                        .do_update()
                        .set((
                            prices::price.eq(excluded(prices::price)),
                            prices::updated_at.eq(excluded(prices::updated_at)),
                        ))
                        .execute(conn)
                        .into_core()?;
                }
                Ok(affected)
            })
            .await
    }
}
