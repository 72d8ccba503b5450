//! Read-only queries over an in-memory collection of transactions.
//!
//! Build a [`TransactionQueryService`] once from the loaded records, then ask
//! it for totals, maxima, groupings, rankings and compliance-issue lookups.

pub mod config;
pub mod error;
pub mod query;
pub mod transaction;

pub use config::QueryConfig;
pub use error::{QueryError, Result};
pub use query::TransactionQueryService;
pub use transaction::Transaction;
