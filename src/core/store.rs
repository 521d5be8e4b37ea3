//! The ledger store: single source of truth consumed by the view layer.
//!
//! Replaces the original app's implicit global singleton with an explicitly
//! constructed, dependency-injected object: views hold the store, call its
//! mutation surface, and subscribe to [`StoreEvent`] notifications instead
//! of relying on ambient reactivity.

use std::fmt;
use std::time::{Duration, Instant};

use crate::core::events::{StoreEvent, Subscriber};
use crate::domain::{Fund, FundDraft, FundPatch, Transaction, TransactionDraft};
use crate::errors::LedgerError;
use crate::ledger::{summary, Ledger, Totals};
use crate::storage::StorageBackend;

/// How long the cosmetic sync indicator shows after a mutation.
const SYNC_FLASH: Duration = Duration::from_millis(1000);
/// Longer flash shown when connectivity is regained.
const RECONNECT_FLASH: Duration = Duration::from_millis(1500);

/// Facade that coordinates ledger state, persistence, connectivity, and
/// subscriber notification.
///
/// Every mutation is a single synchronous state transition: the ledger is
/// updated, both slots are persisted best-effort, and events fire before
/// the call returns. A persistence failure never rolls back the in-memory
/// state; it is logged and surfaced as [`StoreEvent::PersistFailed`].
pub struct LedgerStore {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
    offline: bool,
    syncing_until: Option<Instant>,
    subscribers: Vec<Subscriber>,
}

impl LedgerStore {
    /// Opens the store, loading both persisted slots. Missing slots yield
    /// an empty ledger.
    pub fn open(storage: Box<dyn StorageBackend>) -> Result<Self, LedgerError> {
        let transactions = storage.load_transactions()?;
        let funds = storage.load_funds()?;
        tracing::debug!(
            transactions = transactions.len(),
            funds = funds.len(),
            "ledger store opened"
        );
        Ok(Self {
            ledger: Ledger::from_parts(transactions, funds),
            storage,
            offline: false,
            syncing_until: None,
            subscribers: Vec::new(),
        })
    }

    /// Registers a listener invoked synchronously for every event.
    pub fn subscribe(&mut self, listener: impl Fn(&StoreEvent) + Send + 'static) {
        self.subscribers.push(Box::new(listener));
    }

    /// Records a transaction; see [`Ledger::apply_transaction`] for the
    /// bookkeeping rules. The store trusts the caller on amount validity.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Result<Transaction, LedgerError> {
        let txn = self.ledger.apply_transaction(draft)?;
        self.commit(StoreEvent::TransactionAdded { id: txn.id.clone() });
        Ok(txn)
    }

    /// Creates a fund with a zeroed pool; sub-budget seeds override the
    /// supplied target with their sum.
    pub fn add_fund(&mut self, draft: FundDraft) -> Fund {
        let fund = self.ledger.add_fund(draft);
        self.commit(StoreEvent::FundAdded { id: fund.id.clone() });
        fund
    }

    /// Applies a partial update to the matching fund.
    pub fn update_fund(&mut self, id: &str, patch: FundPatch) -> Result<(), LedgerError> {
        self.ledger.update_fund(id, patch)?;
        self.commit(StoreEvent::FundUpdated { id: id.to_string() });
        Ok(())
    }

    /// Deletes the matching fund. Transactions referencing it remain in
    /// the log with a dangling id.
    pub fn remove_fund(&mut self, id: &str) -> Result<Fund, LedgerError> {
        let fund = self.ledger.remove_fund(id)?;
        self.commit(StoreEvent::FundRemoved { id: fund.id.clone() });
        Ok(fund)
    }

    /// Flips the connectivity flag. Regaining connectivity shows a longer
    /// sync flash, matching the original app's online handler.
    pub fn set_offline(&mut self, offline: bool) {
        if self.offline == offline {
            return;
        }
        self.offline = offline;
        self.emit(&StoreEvent::ConnectivityChanged { offline });
        if !offline {
            self.flash_sync(RECONNECT_FLASH);
        }
    }

    pub fn is_offline(&self) -> bool {
        self.offline
    }

    /// True while the transient sync indicator should show. Purely
    /// presentational; never blocks or serializes mutations.
    pub fn is_syncing(&self) -> bool {
        self.syncing_until
            .map_or(false, |until| Instant::now() < until)
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn funds(&self) -> &[Fund] {
        self.ledger.funds()
    }

    pub fn fund(&self, id: &str) -> Option<&Fund> {
        self.ledger.fund(id)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Aggregate totals, recomputed from the log on every call.
    pub fn totals(&self) -> Totals {
        self.ledger.totals()
    }

    pub fn expense_by_category(&self) -> Vec<summary::CategoryTotal> {
        summary::expense_by_category(self.ledger.transactions())
    }

    pub fn monthly_flows(&self, year: i32) -> Vec<summary::MonthlyFlow> {
        summary::monthly_flows(self.ledger.transactions(), year)
    }

    fn commit(&mut self, event: StoreEvent) {
        if let Err(err) = self.persist() {
            tracing::warn!(error = %err, "failed to persist ledger state");
            self.emit(&StoreEvent::PersistFailed {
                message: err.to_string(),
            });
        }
        self.emit(&event);
        if !self.offline {
            self.flash_sync(SYNC_FLASH);
        }
    }

    fn persist(&self) -> Result<(), LedgerError> {
        self.storage.save_transactions(self.ledger.transactions())?;
        self.storage.save_funds(self.ledger.funds())
    }

    fn flash_sync(&mut self, duration: Duration) {
        self.syncing_until = Some(Instant::now() + duration);
        self.emit(&StoreEvent::SyncStarted { duration });
    }

    fn emit(&self, event: &StoreEvent) {
        for listener in &self.subscribers {
            listener(event);
        }
    }
}

impl fmt::Debug for LedgerStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LedgerStore")
            .field("transactions", &self.ledger.transactions().len())
            .field("funds", &self.ledger.funds().len())
            .field("offline", &self.offline)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
