use async_trait::async_trait;
use chrono::Utc;
use log::{error, info, warn};
use std::sync::Arc;

use super::errors::PriceError;
use super::model::{Price, PriceRefreshResult, PriceSnapshot};
use super::store::{PriceRepositoryTrait, PriceSourceTrait, PriceStoreTrait};
use crate::errors::{Error, Result};

/// Trait defining the contract for price operations.
#[async_trait]
pub trait PriceServiceTrait: Send + Sync {
    /// Seeds the in-memory store from persisted prices. Returns the symbol count.
    fn initialize(&self) -> Result<usize>;

    /// Latest price for a symbol, `PriceError::NotFound` when unknown.
    fn get_price(&self, symbol: &str) -> Result<Price>;

    fn snapshot(&self) -> Arc<PriceSnapshot>;

    /// Reads the source, persists the result and swaps the snapshot.
    ///
    /// Any failure leaves the previous snapshot untouched.
    async fn refresh_prices(&self) -> Result<PriceRefreshResult>;
}

pub struct PriceService {
    store: Arc<dyn PriceStoreTrait>,
    source: Arc<dyn PriceSourceTrait>,
    repository: Arc<dyn PriceRepositoryTrait>,
}

impl PriceService {
    pub fn new(
        store: Arc<dyn PriceStoreTrait>,
        source: Arc<dyn PriceSourceTrait>,
        repository: Arc<dyn PriceRepositoryTrait>,
    ) -> Self {
        Self {
            store,
            source,
            repository,
        }
    }

    /// Reads, validates and persists fresh prices. The source is committed
    /// last, so a failure at any step leaves it as it was.
    async fn fetch_snapshot(&self) -> Result<PriceSnapshot> {
        let fetched = self.source.fetch_prices().await?;
        let snapshot = PriceSnapshot::from_prices(fetched.clone(), Utc::now())?;
        let rows: Vec<Price> = snapshot.prices().cloned().collect();
        self.repository.upsert_prices(rows).await?;
        self.source.commit(&fetched).await?;
        Ok(snapshot)
    }
}

#[async_trait]
impl PriceServiceTrait for PriceService {
    fn initialize(&self) -> Result<usize> {
        let rows = self.repository.load_prices()?;
        let snapshot = PriceSnapshot::from_rows(rows)?;
        let count = snapshot.len();
        if count == 0 {
            warn!("No persisted prices found; valuations will report missing prices until the first refresh");
        }
        self.store.replace(snapshot);
        info!("Price store seeded with {} symbols", count);
        Ok(count)
    }

    fn get_price(&self, symbol: &str) -> Result<Price> {
        self.store
            .snapshot()
            .get(symbol)
            .cloned()
            .ok_or_else(|| PriceError::NotFound(symbol.trim().to_uppercase()).into())
    }

    fn snapshot(&self) -> Arc<PriceSnapshot> {
        self.store.snapshot()
    }

    async fn refresh_prices(&self) -> Result<PriceRefreshResult> {
        let snapshot = match self.fetch_snapshot().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                let kept = self.store.snapshot().len();
                error!(
                    "Price refresh from {} failed: {}. Keeping previous snapshot ({} symbols)",
                    self.source.name(),
                    e,
                    kept
                );
                return Err(match e {
                    Error::Price(price_error) => Error::Price(price_error),
                    other => Error::Price(PriceError::RefreshFailed(other.to_string())),
                });
            }
        };

        let result = PriceRefreshResult {
            symbols_updated: snapshot.len(),
            refreshed_at: snapshot.taken_at(),
        };
        self.store.replace(snapshot);
        info!(
            "Refreshed {} prices from {}",
            result.symbols_updated,
            self.source.name()
        );
        Ok(result)
    }
}
