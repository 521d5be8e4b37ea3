pub mod json_backend;

use crate::domain::{Fund, Transaction};
use crate::errors::LedgerError;

/// Abstraction over persistence backends holding the two ledger slots:
/// the ordered transaction array and the fund array.
pub trait StorageBackend: Send + Sync {
    fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), LedgerError>;
    fn load_transactions(&self) -> Result<Vec<Transaction>, LedgerError>;
    fn save_funds(&self, funds: &[Fund]) -> Result<(), LedgerError>;
    fn load_funds(&self) -> Result<Vec<Fund>, LedgerError>;
}

pub use json_backend::JsonStorage;
