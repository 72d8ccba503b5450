use crate::query::TransactionQueryService;
use crate::transaction::Transaction;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

// -0.0 ranks equal to 0.0 and NaN ranks below every number, as in `max_amount`
fn compare_amounts(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => (a + 0.0).total_cmp(&(b + 0.0)),
    }
}

impl TransactionQueryService {
    /// Transactions indexed by beneficiary name. Each group keeps record order.
    pub fn transactions_by_beneficiary(&self) -> HashMap<&str, Vec<&Transaction>> {
        let mut groups: HashMap<&str, Vec<&Transaction>> = HashMap::new();
        for transaction in &self.transactions {
            groups
                .entry(transaction.beneficiary_full_name.as_str())
                .or_default()
                .push(transaction);
        }
        debug!("Grouped transactions into {} beneficiaries", groups.len());
        groups
    }

    /// The `n` transactions with the highest amount, descending. Equal amounts
    /// keep their record order.
    pub fn top_n_by_amount(&self, n: usize) -> Vec<&Transaction> {
        let mut ranked: Vec<&Transaction> = self.transactions.iter().collect();
        // sort_by is stable
        ranked.sort_by(|a, b| compare_amounts(b.amount, a.amount));
        ranked.truncate(n);
        debug!("Top {} by amount returned {} transactions", n, ranked.len());
        ranked
    }

    /// `top_n_by_amount` with the configured default count.
    pub fn top_by_amount(&self) -> Vec<&Transaction> {
        self.top_n_by_amount(self.config.default_top_n)
    }

    /// Sender with the highest total sent. On a tie the sender seen first wins.
    pub fn top_sender(&self) -> Option<&str> {
        // totals in first-seen order, the index only locates a sender's slot
        let mut totals: Vec<(&str, f64)> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();
        for transaction in &self.transactions {
            let sender = transaction.sender_full_name.as_str();
            let slot = *slots.entry(sender).or_insert_with(|| {
                totals.push((sender, 0.0));
                totals.len() - 1
            });
            totals[slot].1 += transaction.amount;
        }
        debug!("Aggregated totals for {} senders", totals.len());

        let mut top: Option<(&str, f64)> = None;
        for (sender, total) in totals {
            let leads = match top {
                Some((_, best)) => compare_amounts(total, best) == Ordering::Greater,
                None => true,
            };
            if leads {
                top = Some((sender, total));
            }
        }
        top.map(|(sender, _)| sender)
    }
}
