//! WealthNest Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for WealthNest: the append-only
//! transaction ledger, the price snapshot store and the average-cost
//! portfolio valuation engine. It is database-agnostic and defines traits
//! that are implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod prices;
pub mod transactions;
pub mod users;
pub mod utils;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
