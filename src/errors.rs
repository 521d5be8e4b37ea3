use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("unknown fund `{0}`")]
    UnknownFund(String),
    #[error("unknown sub-budget `{sub_budget}` in fund `{fund}`")]
    UnknownSubBudget { fund: String, sub_budget: String },
    #[error("Persistence error: {0}")]
    Persistence(String),
}
