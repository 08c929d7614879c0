//! Price storage traits.
//!
//! Three seams around the price list:
//! - [`PriceStoreTrait`] - the in-memory snapshot read by valuations
//! - [`PriceSourceTrait`] - where fresh prices come from
//! - [`PriceRepositoryTrait`] - persistence, used to seed the store on startup

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use super::model::{Price, PriceSnapshot};
use crate::errors::Result;

/// Read side of the price list.
///
/// Implementations must swap snapshots atomically: a reader holding an
/// `Arc<PriceSnapshot>` keeps a consistent view for as long as it needs.
pub trait PriceStoreTrait: Send + Sync {
    /// Current snapshot.
    fn snapshot(&self) -> Arc<PriceSnapshot>;

    /// Replaces the whole snapshot in one step.
    fn replace(&self, snapshot: PriceSnapshot);

    /// Latest price for a symbol, `None` when the symbol is unknown.
    fn get(&self, symbol: &str) -> Option<Decimal> {
        self.snapshot().price_of(symbol)
    }

    /// Validates `new_prices` and swaps them in. On error the previous
    /// snapshot stays in place.
    fn refresh(&self, new_prices: HashMap<String, Decimal>) -> Result<()> {
        let snapshot = PriceSnapshot::from_prices(new_prices, Utc::now())?;
        self.replace(snapshot);
        Ok(())
    }
}

/// Source of fresh prices (file, feed, ...).
#[async_trait]
pub trait PriceSourceTrait: Send + Sync {
    /// Human readable name used in logs.
    fn name(&self) -> String;

    /// Reads the complete symbol -> price mapping.
    ///
    /// Errors distinguish an unreadable source (`PriceError::SourceUnreadable`)
    /// from unparseable content (`PriceError::MalformedSource`).
    async fn fetch_prices(&self) -> Result<HashMap<String, Decimal>>;

    /// Called once `prices` (as returned by `fetch_prices`) has been
    /// persisted. Sources that keep state between reads record it here.
    async fn commit(&self, _prices: &HashMap<String, Decimal>) -> Result<()> {
        Ok(())
    }
}

/// Persistence for the latest price per symbol.
#[async_trait]
pub trait PriceRepositoryTrait: Send + Sync {
    fn load_prices(&self) -> Result<Vec<Price>>;

    /// Inserts or overwrites (last write wins) one row per symbol.
    ///
    /// Returns the number of rows written.
    async fn upsert_prices(&self, prices: Vec<Price>) -> Result<usize>;
}
