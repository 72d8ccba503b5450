use serde::{Deserialize, Serialize};

/// A single payment record. The loader produces the camelCase shape
/// (`senderFullName`, `issueId`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub sender_full_name: String,
    pub beneficiary_full_name: String,
    pub amount: f64,
    #[serde(default)]
    pub issue_id: Option<i32>,
    #[serde(default)]
    pub issue_solved: bool,
    #[serde(default)]
    pub issue_message: Option<String>,
}

impl Transaction {
    pub fn build(sender_full_name: &str, beneficiary_full_name: &str, amount: f64) -> Self {
        Self {
            sender_full_name: sender_full_name.to_owned(),
            beneficiary_full_name: beneficiary_full_name.to_owned(),
            amount,
            issue_id: None,
            // no issue reads as nothing left to solve
            issue_solved: true,
            issue_message: None,
        }
    }

    /// Attach a compliance issue to the transaction.
    pub fn with_issue(mut self, issue_id: i32, solved: bool, message: Option<&str>) -> Self {
        self.issue_id = Some(issue_id);
        self.issue_solved = solved;
        self.issue_message = message.map(str::to_owned);
        self
    }

    /// True when `name` is the sender or the beneficiary. Exact, case-sensitive.
    pub fn involves(&self, name: &str) -> bool {
        self.sender_full_name == name || self.beneficiary_full_name == name
    }

    // A record without an issue id is never open, whatever `issue_solved` says
    pub fn has_open_issue(&self) -> bool {
        self.issue_id.is_some() && !self.issue_solved
    }

    pub fn has_solved_issue(&self) -> bool {
        self.issue_id.is_some() && self.issue_solved
    }
}

#[cfg(test)]
mod test {
    use crate::transaction::Transaction;

    #[test]
    fn test_issue_flags() {
        let clean = Transaction::build("Tom Shelby", "Alfie Solomons", 150.0);
        assert!(!clean.has_open_issue());
        assert!(!clean.has_solved_issue());

        // the flag alone does not make an issue
        let mut flagged = clean.clone();
        flagged.issue_solved = false;
        assert!(!flagged.has_open_issue());

        let open = clean.clone().with_issue(1, false, Some("Looks like money laundering"));
        assert!(open.has_open_issue());
        assert!(!open.has_solved_issue());

        let solved = clean.with_issue(2, true, Some("Never gonna give you up"));
        assert!(solved.has_solved_issue());
        assert!(!solved.has_open_issue());
    }

    #[test]
    fn test_involves() {
        let transaction = Transaction::build("Tom Shelby", "Alfie Solomons", 150.0);
        assert!(transaction.involves("Tom Shelby"));
        assert!(transaction.involves("Alfie Solomons"));
        assert!(!transaction.involves("tom shelby"));
        assert!(!transaction.involves("Arthur Shelby"));
    }

    #[test]
    fn test_deserialize_loader_shape() {
        let raw = r#"{
            "senderFullName": "Grace Burgess",
            "beneficiaryFullName": "Michael Gray",
            "amount": 666.0,
            "issueId": 2,
            "issueSolved": true,
            "issueMessage": "Never gonna give you up"
        }"#;
        let transaction: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(transaction.sender_full_name, "Grace Burgess");
        assert_eq!(transaction.issue_id, Some(2));
        assert!(transaction.has_solved_issue());

        let raw = r#"{
            "senderFullName": "Aunt Polly",
            "beneficiaryFullName": "Aberama Gold",
            "amount": 5.0,
            "issueId": null,
            "issueSolved": true,
            "issueMessage": null
        }"#;
        let transaction: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(transaction.issue_id, None);
        assert_eq!(transaction.issue_message, None);

        let raw = r#"{
            "senderFullName": "Aunt Polly",
            "beneficiaryFullName": "Aberama Gold",
            "amount": 5.0,
            "issueId": -3,
            "issueSolved": false
        }"#;
        let transaction: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(transaction.issue_id, Some(-3));
        assert!(transaction.has_open_issue());
    }
}
