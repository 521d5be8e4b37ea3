//! Domain models shared across the ledger, store, and storage layers.

pub mod common;
pub mod fund;
pub mod transaction;

pub use common::{Identifiable, NamedEntity};
pub use fund::{Fund, FundDraft, FundPatch, SubBudget, SubBudgetSeed};
pub use transaction::{Transaction, TransactionDraft, TransactionKind};
