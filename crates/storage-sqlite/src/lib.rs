//! SQLite storage implementation for WealthNest.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `wealthnest-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for users, the transaction ledger and prices
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```
//!
//! Reads go through the r2d2 pool; every write is funnelled through the single
//! writer actor ([`WriteHandle`]) and runs inside an immediate transaction.

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod prices;
pub mod transactions;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use prices::PriceRepository;
pub use transactions::TransactionRepository;
pub use users::UserRepository;

// Re-export from wealthnest-core for convenience
pub use wealthnest_core::errors::{DatabaseError, Error, Result};
