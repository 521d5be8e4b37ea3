//! Caller-facing validation for transaction drafts.
//!
//! The store itself performs no bounds checks; these helpers give the form
//! layer the refusals it surfaces to the user before submitting. A fund or
//! sub-budget id that does not resolve is left for the store to reject.

use thiserror::Error;

use crate::domain::{TransactionDraft, TransactionKind};
use crate::ledger::Ledger;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount must be a positive number")]
    NonPositiveAmount,
    #[error("amount exceeds the available balance")]
    InsufficientBalance,
    #[error("amount exceeds what the fund has saved")]
    InsufficientFundBalance,
    #[error("amount exceeds the sub-budget allowance")]
    InsufficientSubBudgetAllowance,
}

/// Checks a draft against the current ledger state.
///
/// - amounts must be finite and strictly positive;
/// - expenses paid from the free balance, and savings contributions, must
///   not exceed the available balance;
/// - expenses charged to a fund must fit its current pool, and to a
///   sub-budget its remaining allowance.
pub fn check_draft(ledger: &Ledger, draft: &TransactionDraft) -> Result<(), ValidationError> {
    if !draft.amount.is_finite() || draft.amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount);
    }
    match draft.kind {
        TransactionKind::Income => Ok(()),
        TransactionKind::Saving => check_balance(ledger, draft.amount),
        TransactionKind::Expense => match draft.fund_id.as_deref() {
            None => check_balance(ledger, draft.amount),
            Some(fund_id) => {
                let Some(fund) = ledger.fund(fund_id) else {
                    return Ok(());
                };
                if draft.amount > fund.current_amount {
                    return Err(ValidationError::InsufficientFundBalance);
                }
                if let Some(sub) = draft
                    .sub_budget_id
                    .as_deref()
                    .and_then(|id| fund.sub_budget(id))
                {
                    if draft.amount > sub.remaining() {
                        return Err(ValidationError::InsufficientSubBudgetAllowance);
                    }
                }
                Ok(())
            }
        },
    }
}

fn check_balance(ledger: &Ledger, amount: f64) -> Result<(), ValidationError> {
    if amount > ledger.totals().balance {
        return Err(ValidationError::InsufficientBalance);
    }
    Ok(())
}
