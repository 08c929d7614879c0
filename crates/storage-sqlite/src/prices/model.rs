//! Database model for the latest price per symbol.

use diesel::prelude::*;

use crate::errors::StorageError;
use crate::utils::{decimal_column, timestamp_column};
use wealthnest_core::prices::Price;
use wealthnest_core::utils::time_utils::format_timestamp;

#[derive(Queryable, Insertable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::prices)]
#[diesel(primary_key(symbol))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PriceDB {
    pub symbol: String,
    pub price: String,
    pub updated_at: String,
}

impl From<Price> for PriceDB {
    fn from(price: Price) -> Self {
        PriceDB {
            symbol: price.symbol,
            price: price.price.to_string(),
            updated_at: format_timestamp(price.updated_at),
        }
    }
}

impl TryFrom<PriceDB> for Price {
    type Error = StorageError;

    fn try_from(db: PriceDB) -> Result<Self, Self::Error> {
        Ok(Price {
            price: decimal_column(&db.price, "prices.price")?,
            updated_at: timestamp_column(&db.updated_at, "prices.updated_at")?,
            symbol: db.symbol,
        })
    }
}
