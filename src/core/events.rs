//! Notifications emitted by the store after a state transition commits.

use std::time::Duration;

/// Event delivered synchronously to subscribers once a mutation (or a
/// connectivity change) has taken effect. Consumers drive presentation
/// from these; none of them gates or reorders store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    TransactionAdded { id: String },
    FundAdded { id: String },
    FundUpdated { id: String },
    FundRemoved { id: String },
    ConnectivityChanged { offline: bool },
    /// The cosmetic sync indicator should show for roughly this long.
    SyncStarted { duration: Duration },
    /// A mutation was applied in memory but writing it to storage failed.
    PersistFailed { message: String },
}

pub(crate) type Subscriber = Box<dyn Fn(&StoreEvent) + Send>;
