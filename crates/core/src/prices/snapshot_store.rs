use std::sync::{Arc, PoisonError, RwLock};

use super::model::PriceSnapshot;
use super::store::PriceStoreTrait;

/// Copy-on-write price store.
///
/// The lock only guards the pointer: readers clone the `Arc` and release it
/// immediately, writers build the new snapshot outside the lock and swap it in.
pub struct SnapshotPriceStore {
    current: RwLock<Arc<PriceSnapshot>>,
}

impl SnapshotPriceStore {
    pub fn new() -> Self {
        Self::with_snapshot(PriceSnapshot::empty())
    }

    pub fn with_snapshot(snapshot: PriceSnapshot) -> Self {
        SnapshotPriceStore {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }
}

impl Default for SnapshotPriceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceStoreTrait for SnapshotPriceStore {
    fn snapshot(&self) -> Arc<PriceSnapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn replace(&self, snapshot: PriceSnapshot) {
        let next = Arc::new(snapshot);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::thread;

    fn prices(pairs: &[(&str, Decimal)]) -> HashMap<String, Decimal> {
        pairs.iter().map(|(s, p)| (s.to_string(), *p)).collect()
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let store = SnapshotPriceStore::new();
        store.refresh(prices(&[("aapl", dec!(190.12))])).unwrap();
        assert_eq!(store.get("AAPL"), Some(dec!(190.12)));
        assert_eq!(store.get(" aapl "), Some(dec!(190.12)));
        assert_eq!(store.get("MSFT"), None);
    }

    #[test]
    fn test_refresh_replaces_wholesale() {
        let store = SnapshotPriceStore::new();
        store
            .refresh(prices(&[("AAPL", dec!(1)), ("MSFT", dec!(2))]))
            .unwrap();
        store.refresh(prices(&[("TSLA", dec!(3))])).unwrap();

        assert_eq!(store.get("AAPL"), None);
        assert_eq!(store.get("TSLA"), Some(dec!(3)));
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn test_invalid_refresh_keeps_previous_snapshot() {
        let store = SnapshotPriceStore::new();
        store.refresh(prices(&[("AAPL", dec!(100))])).unwrap();

        let result = store.refresh(prices(&[("AAPL", dec!(101)), ("BAD", dec!(-1))]));
        assert!(result.is_err());
        assert_eq!(store.get("AAPL"), Some(dec!(100)));
        assert_eq!(store.get("BAD"), None);
    }

    #[test]
    fn test_duplicate_symbols_after_normalization_are_rejected() {
        let store = SnapshotPriceStore::new();
        let result = store.refresh(prices(&[("aapl", dec!(1)), ("AAPL", dec!(2))]));
        assert!(result.is_err());
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_held_snapshot_is_unaffected_by_later_refresh() {
        let store = SnapshotPriceStore::new();
        store.refresh(prices(&[("AAPL", dec!(100))])).unwrap();
        let held = store.snapshot();
        store.refresh(prices(&[("AAPL", dec!(200))])).unwrap();

        assert_eq!(held.price_of("AAPL"), Some(dec!(100)));
        assert_eq!(store.get("AAPL"), Some(dec!(200)));
    }

    #[test]
    fn test_readers_never_see_mixed_snapshots() {
        let store = Arc::new(SnapshotPriceStore::new());
        let generation = |g: i64| {
            prices(&[
                ("AAA", Decimal::from(g)),
                ("BBB", Decimal::from(g)),
                ("CCC", Decimal::from(g)),
            ])
        };
        store.refresh(generation(0)).unwrap();

        let writer = {
            let store = store.clone();
            thread::spawn(move || {
                for g in 1..500 {
                    store.refresh(generation(g)).unwrap();
                }
            })
        };
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                thread::spawn(move || {
                    for _ in 0..500 {
                        let snapshot = store.snapshot();
                        let a = snapshot.price_of("AAA");
                        assert_eq!(a, snapshot.price_of("BBB"));
                        assert_eq!(a, snapshot.price_of("CCC"));
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(store.get("AAA"), Some(dec!(499)));
    }
}
