use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// The operation needs at least one transaction to produce a value
    #[error("Empty dataset: {0} requires at least one transaction")]
    EmptyDataset(&'static str),
}

pub type Result<T> = std::result::Result<T, QueryError>;
