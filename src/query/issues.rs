use crate::query::TransactionQueryService;
use std::collections::HashSet;

impl TransactionQueryService {
    /// Whether `client_full_name`, as sender or beneficiary, has at least one
    /// transaction with a compliance issue still open.
    pub fn has_open_compliance_issue(&self, client_full_name: &str) -> bool {
        self.transactions
            .iter()
            .any(|t| t.involves(client_full_name) && t.has_open_issue())
    }

    /// Distinct identifiers of every open compliance issue.
    pub fn unsolved_issue_ids(&self) -> HashSet<i32> {
        self.transactions
            .iter()
            .filter(|t| t.has_open_issue())
            .filter_map(|t| t.issue_id)
            .collect()
    }

    // One entry per solved issue in record order, `None` where it has no message
    pub fn solved_issue_messages(&self) -> Vec<Option<&str>> {
        self.transactions
            .iter()
            .filter(|t| t.has_solved_issue())
            .map(|t| t.issue_message.as_deref())
            .collect()
    }
}
