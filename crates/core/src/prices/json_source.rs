use async_trait::async_trait;
use log::{debug, info};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use super::errors::PriceError;
use super::store::PriceSourceTrait;
use crate::errors::Result;
use crate::utils::decimal_utils::round_money;

/// Reads prices from a JSON object of `{"SYMBOL": price}`.
///
/// With a drift factor configured, every read multiplies each price by the
/// factor and rounds to cents. The drifted prices are written back on
/// `commit`, which turns a static file into a slowly moving mock feed.
pub struct JsonFilePriceSource {
    path: PathBuf,
    drift: Option<Decimal>,
}

impl JsonFilePriceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFilePriceSource {
            path: path.into(),
            drift: None,
        }
    }

    pub fn with_drift(mut self, factor: Decimal) -> Self {
        self.drift = Some(factor);
        self
    }

    async fn read(&self) -> std::result::Result<HashMap<String, Decimal>, PriceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| PriceError::SourceUnreadable(format!("{}: {}", self.path.display(), e)))?;

        serde_json::from_str::<HashMap<String, Decimal>>(&content)
            .map_err(|e| PriceError::MalformedSource(format!("{}: {}", self.path.display(), e)))
    }

    async fn write(&self, prices: &HashMap<String, Decimal>) -> std::result::Result<(), PriceError> {
        let ordered: BTreeMap<&String, &Decimal> = prices.iter().collect();
        let body = serde_json::to_string_pretty(&ordered)
            .map_err(|e| PriceError::RefreshFailed(e.to_string()))?;
        tokio::fs::write(&self.path, body)
            .await
            .map_err(|e| PriceError::RefreshFailed(format!("{}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl PriceSourceTrait for JsonFilePriceSource {
    fn name(&self) -> String {
        format!("json file {}", self.path.display())
    }

    async fn fetch_prices(&self) -> Result<HashMap<String, Decimal>> {
        let prices = self.read().await?;
        debug!("Read {} prices from {}", prices.len(), self.path.display());

        let Some(factor) = self.drift else {
            return Ok(prices);
        };

        let drifted = prices
            .into_iter()
            .map(|(symbol, price)| match price.checked_mul(factor) {
                Some(moved) => Ok((symbol, round_money(moved))),
                None => Err(PriceError::InvalidPrice(format!(
                    "{}: {} x{} is out of range",
                    symbol, price, factor
                ))),
            })
            .collect::<std::result::Result<HashMap<String, Decimal>, PriceError>>()?;
        debug!("Applied drift x{} to {} prices", factor, drifted.len());
        Ok(drifted)
    }

    async fn commit(&self, prices: &HashMap<String, Decimal>) -> Result<()> {
        if self.drift.is_none() {
            return Ok(());
        }
        self.write(prices).await?;
        info!("Wrote {} drifted prices to {}", prices.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_reads_numeric_prices() {
        let file = file_with(r#"{"AAPL": 190.12, "MSFT": 410, "TSLA": 0}"#);
        let source = JsonFilePriceSource::new(file.path());

        let prices = source.fetch_prices().await.unwrap();
        assert_eq!(prices.len(), 3);
        assert_eq!(prices["AAPL"], dec!(190.12));
        assert_eq!(prices["MSFT"], dec!(410));
        assert_eq!(prices["TSLA"], Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFilePriceSource::new(dir.path().join("nope.json"));

        match source.fetch_prices().await {
            Err(Error::Price(err)) => assert!(err.is_io()),
            other => panic!("expected unreadable source, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_content_is_reported() {
        let file = file_with(r#"{"AAPL": "not a price""#);
        let source = JsonFilePriceSource::new(file.path());

        assert!(matches!(
            source.fetch_prices().await,
            Err(Error::Price(PriceError::MalformedSource(_)))
        ));
    }

    #[tokio::test]
    async fn test_drift_rounds_and_writes_back_on_commit() {
        let file = file_with(r#"{"AAPL": 100.00, "MSFT": 10.05}"#);
        let source = JsonFilePriceSource::new(file.path()).with_drift(dec!(1.01));

        let prices = source.fetch_prices().await.unwrap();
        assert_eq!(prices["AAPL"], dec!(101.00));
        // 10.1505 rounds half-up to 10.15
        assert_eq!(prices["MSFT"], dec!(10.15));

        // Nothing is written until the read is committed.
        let uncommitted = source.fetch_prices().await.unwrap();
        assert_eq!(uncommitted, prices);

        source.commit(&prices).await.unwrap();
        let written: HashMap<String, Decimal> =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(written, prices);

        let again = source.fetch_prices().await.unwrap();
        assert_eq!(again["AAPL"], dec!(102.01));
    }

    #[tokio::test]
    async fn test_commit_without_drift_leaves_file_alone() {
        let original = r#"{"AAPL": 100}"#;
        let file = file_with(original);
        let source = JsonFilePriceSource::new(file.path());

        let prices = source.fetch_prices().await.unwrap();
        source.commit(&prices).await.unwrap();
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), original);
    }

    #[tokio::test]
    async fn test_drift_overflow_is_an_invalid_price() {
        let file = file_with(r#"{"HUGE": 50000000000000000000000000000}"#);
        let source = JsonFilePriceSource::new(file.path()).with_drift(dec!(2));

        assert!(matches!(
            source.fetch_prices().await,
            Err(Error::Price(PriceError::InvalidPrice(_)))
        ));
    }
}
