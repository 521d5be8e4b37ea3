#![doc(test(attr(deny(warnings))))]

//! Billetera Core offers the ledger, fund, and summary primitives that power
//! a personal budgeting application: an in-memory transaction log, named
//! savings funds with optional sub-budgets, and derived balance reporting,
//! persisted as plain JSON slots.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Billetera Core tracing initialized.");
    });
}
