//! Price management module.
//!
//! - [`model`] - Price rows, the immutable [`PriceSnapshot`] and refresh results
//! - [`store`] - Traits for the in-memory store, the price source and persistence
//! - [`snapshot_store`] - Copy-on-write snapshot store read by the valuation engine
//! - [`json_source`] - `prices.json` file source
//! - [`service`] - Startup seeding and periodic refresh orchestration
//!
//! # Architecture
//!
//! ```text
//! PriceService::refresh_prices
//!     │  fetch                persist               swap
//!     ├──────▶ PriceSource ──────▶ PriceRepository ──────▶ PriceStore
//!                                                            │
//!                                          ValuationService ◀┘ (reads snapshot)
//! ```
//!
//! A refresh either replaces the whole snapshot or leaves the previous one in
//! place; readers never observe a partially refreshed price list.

pub mod errors;
pub mod json_source;
pub mod model;
pub mod service;
pub mod snapshot_store;
pub mod store;


pub use errors::PriceError;
pub use json_source::JsonFilePriceSource;
pub use model::{Price, PriceRefreshResult, PriceSnapshot};
pub use service::{PriceService, PriceServiceTrait};
pub use snapshot_store::SnapshotPriceStore;
pub use store::{PriceRepositoryTrait, PriceSourceTrait, PriceStoreTrait};
