//! Store facade and caller-facing helpers built on top of the ledger.

pub mod events;
pub mod store;
pub mod validate;

pub use events::StoreEvent;
pub use store::LedgerStore;
pub use validate::{check_draft, ValidationError};
