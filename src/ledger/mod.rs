//! In-memory ledger state: the transaction log and the fund collection.
//!
//! The ledger is the only code allowed to mutate fund balances, which keeps
//! `Fund::current_amount` and `SubBudget::spent` consistent with the
//! transaction log across every mutation.

pub mod summary;

use crate::domain::{Fund, FundDraft, FundPatch, Transaction, TransactionDraft, TransactionKind};
use crate::errors::LedgerError;

pub use summary::{CategoryTotal, MonthlyFlow, Totals};

/// Holds the transaction log (newest first) and the fund collection.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    funds: Vec<Fund>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a ledger from previously persisted state.
    pub fn from_parts(transactions: Vec<Transaction>, funds: Vec<Fund>) -> Self {
        Self {
            transactions,
            funds,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn funds(&self) -> &[Fund] {
        &self.funds
    }

    pub fn fund(&self, id: &str) -> Option<&Fund> {
        self.funds.iter().find(|fund| fund.id == id)
    }

    fn fund_mut(&mut self, id: &str) -> Option<&mut Fund> {
        self.funds.iter_mut().find(|fund| fund.id == id)
    }

    /// Records a transaction and applies its effect on the referenced fund.
    ///
    /// Referenced fund and sub-budget ids are checked up front; an unknown
    /// reference is an error and leaves the ledger untouched. On success the
    /// record is prepended to the log and at most one fund (and one
    /// sub-budget within it) is adjusted:
    ///
    /// - a `saving` with a fund grows that fund's pool by the amount;
    /// - an `expense` with a fund shrinks the pool, clamped at zero, and
    ///   grows the matching sub-budget's `spent` when one is named.
    pub fn apply_transaction(
        &mut self,
        draft: TransactionDraft,
    ) -> Result<Transaction, LedgerError> {
        if let Some(fund_id) = draft.fund_id.as_deref() {
            let fund = self
                .fund(fund_id)
                .ok_or_else(|| LedgerError::UnknownFund(fund_id.to_string()))?;
            if let Some(sub_id) = draft.sub_budget_id.as_deref() {
                if fund.sub_budget(sub_id).is_none() {
                    return Err(LedgerError::UnknownSubBudget {
                        fund: fund_id.to_string(),
                        sub_budget: sub_id.to_string(),
                    });
                }
            }
        }

        let txn = draft.into_transaction();
        if let Some(fund_id) = txn.fund_id.clone() {
            match txn.kind {
                TransactionKind::Saving => {
                    if let Some(fund) = self.fund_mut(&fund_id) {
                        fund.current_amount += txn.amount;
                    }
                }
                TransactionKind::Expense => {
                    if let Some(fund) = self.fund_mut(&fund_id) {
                        fund.current_amount = (fund.current_amount - txn.amount).max(0.0);
                        if let Some(sub_id) = txn.sub_budget_id.clone() {
                            if let Some(sub) = fund.sub_budget_mut(&sub_id) {
                                sub.spent += txn.amount;
                            }
                        }
                    }
                }
                TransactionKind::Income => {}
            }
        }
        self.transactions.insert(0, txn.clone());
        Ok(txn)
    }

    /// Creates a fund from the draft and appends it to the collection.
    pub fn add_fund(&mut self, draft: FundDraft) -> Fund {
        let fund = draft.into_fund();
        self.funds.push(fund.clone());
        fund
    }

    /// Applies the named fields of the patch to the matching fund.
    ///
    /// Transactions already applied keep their historical effect; replacing
    /// the sub-budget collection recomputes the target as the sum of the
    /// new slices.
    pub fn update_fund(&mut self, id: &str, patch: FundPatch) -> Result<(), LedgerError> {
        let fund = self
            .fund_mut(id)
            .ok_or_else(|| LedgerError::UnknownFund(id.to_string()))?;
        if let Some(name) = patch.name {
            fund.name = name;
        }
        if let Some(target_amount) = patch.target_amount {
            fund.target_amount = target_amount;
        }
        if let Some(sub_budgets) = patch.sub_budgets {
            fund.target_amount = sub_budgets.iter().map(|sb| sb.amount).sum();
            fund.sub_budgets = sub_budgets;
        }
        Ok(())
    }

    /// Removes and returns the matching fund.
    ///
    /// Transactions referencing the removed fund stay in the log; readers
    /// must treat the dangling id as "no longer available".
    pub fn remove_fund(&mut self, id: &str) -> Result<Fund, LedgerError> {
        let index = self
            .funds
            .iter()
            .position(|fund| fund.id == id)
            .ok_or_else(|| LedgerError::UnknownFund(id.to_string()))?;
        Ok(self.funds.remove(index))
    }

    /// Recomputes the aggregate totals from the current log.
    pub fn totals(&self) -> Totals {
        Totals::from_log(&self.transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SubBudgetSeed;

    fn fund_with_sub_budget(ledger: &mut Ledger) -> (String, String) {
        let fund = ledger.add_fund(
            FundDraft::new("Vacaciones", 0.0)
                .with_sub_budgets(vec![SubBudgetSeed::new("Alojamiento", 150000.0)]),
        );
        let sub_id = fund.sub_budgets[0].id.clone();
        (fund.id, sub_id)
    }

    #[test]
    fn saving_grows_the_referenced_fund() {
        let mut ledger = Ledger::new();
        let fund = ledger.add_fund(FundDraft::new("Viaje", 300000.0));

        ledger
            .apply_transaction(TransactionDraft::saving(100000.0, fund.id.clone()))
            .unwrap();
        ledger
            .apply_transaction(TransactionDraft::saving(50000.0, fund.id.clone()))
            .unwrap();

        assert_eq!(ledger.fund(&fund.id).unwrap().current_amount, 150000.0);
    }

    #[test]
    fn expense_shrinks_pool_and_marks_sub_budget_spent() {
        let mut ledger = Ledger::new();
        let (fund_id, sub_id) = fund_with_sub_budget(&mut ledger);
        ledger
            .apply_transaction(TransactionDraft::saving(100000.0, fund_id.clone()))
            .unwrap();

        ledger
            .apply_transaction(
                TransactionDraft::expense(50000.0, "Comida")
                    .with_fund(fund_id.clone())
                    .with_sub_budget(sub_id.clone()),
            )
            .unwrap();

        let fund = ledger.fund(&fund_id).unwrap();
        assert_eq!(fund.current_amount, 50000.0);
        assert_eq!(fund.sub_budget(&sub_id).unwrap().spent, 50000.0);
    }

    #[test]
    fn expense_clamps_fund_pool_at_zero() {
        let mut ledger = Ledger::new();
        let fund = ledger.add_fund(FundDraft::new("Chico", 10000.0));
        ledger
            .apply_transaction(TransactionDraft::saving(3000.0, fund.id.clone()))
            .unwrap();

        ledger
            .apply_transaction(TransactionDraft::expense(5000.0, "Ocio").with_fund(fund.id.clone()))
            .unwrap();

        assert_eq!(ledger.fund(&fund.id).unwrap().current_amount, 0.0);
    }

    #[test]
    fn sibling_sub_budgets_are_untouched() {
        let mut ledger = Ledger::new();
        let fund = ledger.add_fund(FundDraft::new("Viaje", 0.0).with_sub_budgets(vec![
            SubBudgetSeed::new("Alojamiento", 200000.0),
            SubBudgetSeed::new("Comida", 150000.0),
        ]));
        let first = fund.sub_budgets[0].id.clone();
        let second = fund.sub_budgets[1].id.clone();

        ledger
            .apply_transaction(
                TransactionDraft::expense(20000.0, "Comida")
                    .with_fund(fund.id.clone())
                    .with_sub_budget(second.clone()),
            )
            .unwrap();

        let fund = ledger.fund(&fund.id).unwrap();
        assert_eq!(fund.sub_budget(&first).unwrap().spent, 0.0);
        assert_eq!(fund.sub_budget(&second).unwrap().spent, 20000.0);
    }

    #[test]
    fn unknown_fund_reference_is_rejected_without_side_effects() {
        let mut ledger = Ledger::new();
        let err = ledger
            .apply_transaction(TransactionDraft::saving(100.0, "missing"))
            .expect_err("unknown fund must be rejected");
        assert!(matches!(err, LedgerError::UnknownFund(ref id) if id == "missing"));
        assert!(ledger.transactions().is_empty());
    }

    #[test]
    fn unknown_sub_budget_reference_is_rejected() {
        let mut ledger = Ledger::new();
        let fund = ledger.add_fund(FundDraft::new("Viaje", 1000.0));
        let err = ledger
            .apply_transaction(
                TransactionDraft::expense(10.0, "Comida")
                    .with_fund(fund.id.clone())
                    .with_sub_budget("nope"),
            )
            .expect_err("unknown sub-budget must be rejected");
        assert!(matches!(err, LedgerError::UnknownSubBudget { .. }));
        assert!(ledger.transactions().is_empty());
        assert_eq!(ledger.fund(&fund.id).unwrap().current_amount, 0.0);
    }

    #[test]
    fn log_is_ordered_newest_first() {
        let mut ledger = Ledger::new();
        let first = ledger
            .apply_transaction(TransactionDraft::income(1.0, "Salario"))
            .unwrap();
        let second = ledger
            .apply_transaction(TransactionDraft::income(2.0, "Ventas"))
            .unwrap();
        assert_eq!(ledger.transactions()[0].id, second.id);
        assert_eq!(ledger.transactions()[1].id, first.id);
    }

    #[test]
    fn removing_a_fund_leaves_its_transactions_in_the_log() {
        let mut ledger = Ledger::new();
        let fund = ledger.add_fund(FundDraft::new("Viaje", 1000.0));
        ledger
            .apply_transaction(TransactionDraft::saving(100.0, fund.id.clone()))
            .unwrap();

        let removed = ledger.remove_fund(&fund.id).unwrap();
        assert_eq!(removed.id, fund.id);
        assert!(ledger.fund(&fund.id).is_none());
        assert_eq!(ledger.transactions().len(), 1);
        assert_eq!(ledger.transactions()[0].fund_id.as_deref(), Some(fund.id.as_str()));
    }

    #[test]
    fn update_fund_recomputes_target_from_replaced_sub_budgets() {
        let mut ledger = Ledger::new();
        let fund = ledger.add_fund(FundDraft::new("Viaje", 500.0));
        let slices = vec![
            crate::domain::SubBudget {
                id: "a".into(),
                name: "Alojamiento".into(),
                amount: 300.0,
                spent: 0.0,
            },
            crate::domain::SubBudget {
                id: "b".into(),
                name: "Comida".into(),
                amount: 200.0,
                spent: 0.0,
            },
        ];
        let fund_id = fund.id.clone();
        ledger
            .update_fund(&fund_id, FundPatch::replace_sub_budgets(slices))
            .unwrap();
        let updated = ledger.fund(&fund_id).unwrap();
        assert_eq!(updated.target_amount, 500.0);
        assert_eq!(updated.sub_budgets.len(), 2);

        ledger
            .update_fund(&fund_id, FundPatch::rename("Viaje al Sur"))
            .unwrap();
        assert_eq!(ledger.funds()[0].name, "Viaje al Sur");
    }

    #[test]
    fn update_unknown_fund_fails() {
        let mut ledger = Ledger::new();
        let err = ledger
            .update_fund("missing", FundPatch::retarget(1.0))
            .expect_err("update must fail for unknown id");
        assert!(matches!(err, LedgerError::UnknownFund(_)));
    }
}
