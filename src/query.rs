use crate::config::QueryConfig;
use crate::error::{QueryError, Result};
use crate::transaction::Transaction;
use std::collections::HashSet;
use tracing::{debug, warn};

mod issues;
mod rankings;

/// Owns the transaction sequence for its whole lifetime and never mutates it.
///
/// Every query takes `&self` and the service only holds owned plain data, so
/// it is `Send + Sync`: share it across threads behind `&` or `Arc` without
/// any lock, shared reads cannot race.
#[derive(Debug, Clone)]
pub struct TransactionQueryService {
    transactions: Vec<Transaction>,
    config: QueryConfig,
}

const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TransactionQueryService>();
};

impl TransactionQueryService {
    pub fn build(transactions: Vec<Transaction>) -> Self {
        Self::with_config(transactions, QueryConfig::default())
    }

    // Content is not validated, an empty sequence is fine
    pub fn with_config(transactions: Vec<Transaction>, config: QueryConfig) -> Self {
        debug!(
            "Query service built over {} transactions ({:?})",
            transactions.len(),
            config
        );
        Self {
            transactions,
            config,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Sum of every amount, 0.0 for an empty dataset.
    pub fn total_amount(&self) -> f64 {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Sum of the amounts sent by `sender_full_name`, 0.0 when it sent nothing.
    pub fn total_amount_sent_by(&self, sender_full_name: &str) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.sender_full_name == sender_full_name)
            .map(|t| t.amount)
            .sum()
    }

    /// Highest amount. NaN amounts are skipped unless every amount is NaN.
    pub fn max_amount(&self) -> Result<f64> {
        match self.transactions.iter().map(|t| t.amount).reduce(f64::max) {
            Some(max) => Ok(max),
            None => {
                warn!("max_amount requested over an empty dataset");
                Err(QueryError::EmptyDataset("max_amount"))
            }
        }
    }

    /// Number of distinct names that sent or received a transaction.
    pub fn count_unique_clients(&self) -> usize {
        let mut clients: HashSet<&str> = HashSet::new();
        for transaction in &self.transactions {
            clients.insert(transaction.sender_full_name.as_str());
            clients.insert(transaction.beneficiary_full_name.as_str());
        }
        clients.len()
    }
}
