//! Derived aggregates recomputed from the transaction log on every read.
//!
//! Nothing here is cached: recomputing from the same log twice always
//! yields the same totals.

use chrono::Datelike;

use crate::domain::{Transaction, TransactionKind};

/// Aggregate totals over the full transaction log.
///
/// Accounting policy: `balance = income − expense − savings`, where every
/// expense is subtracted, including expenses charged against a fund's pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub savings: f64,
    pub balance: f64,
}

impl Totals {
    pub fn from_log(transactions: &[Transaction]) -> Self {
        let mut income = 0.0;
        let mut expense = 0.0;
        let mut savings = 0.0;
        for txn in transactions {
            match txn.kind {
                TransactionKind::Income => income += txn.amount,
                TransactionKind::Expense => expense += txn.amount,
                TransactionKind::Saving => savings += txn.amount,
            }
        }
        Self {
            income,
            expense,
            savings,
            balance: income - expense - savings,
        }
    }
}

/// Total expense recorded against one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Expense totals grouped by category, largest first. Feeds the expense
/// distribution chart.
pub fn expense_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut groups: Vec<CategoryTotal> = Vec::new();
    for txn in transactions {
        if txn.kind != TransactionKind::Expense {
            continue;
        }
        match groups.iter_mut().find(|g| g.category == txn.category) {
            Some(group) => group.total += txn.amount,
            None => groups.push(CategoryTotal {
                category: txn.category.clone(),
                total: txn.amount,
            }),
        }
    }
    groups.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
    groups
}

/// Income and expense recorded within one calendar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyFlow {
    /// Calendar month, 1-based.
    pub month: u32,
    pub income: f64,
    pub expense: f64,
}

/// Per-month income and expense totals for one year, always twelve entries.
/// Feeds the income-versus-expense bar chart.
pub fn monthly_flows(transactions: &[Transaction], year: i32) -> Vec<MonthlyFlow> {
    let mut flows: Vec<MonthlyFlow> = (1..=12)
        .map(|month| MonthlyFlow {
            month,
            income: 0.0,
            expense: 0.0,
        })
        .collect();
    for txn in transactions {
        if txn.date.year() != year {
            continue;
        }
        let slot = &mut flows[txn.date.month() as usize - 1];
        match txn.kind {
            TransactionKind::Income => slot.income += txn.amount,
            TransactionKind::Expense => slot.expense += txn.amount,
            TransactionKind::Saving => {}
        }
    }
    flows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionDraft;
    use chrono::{TimeZone, Utc};

    fn log() -> Vec<Transaction> {
        vec![
            TransactionDraft::income(200000.0, "Salario").into_transaction(),
            TransactionDraft::expense(30000.0, "Comida").into_transaction(),
            TransactionDraft::expense(12000.0, "Transporte").into_transaction(),
            TransactionDraft::expense(8000.0, "Comida").into_transaction(),
            TransactionDraft::saving(50000.0, "f1").into_transaction(),
        ]
    }

    #[test]
    fn totals_follow_the_balance_identity() {
        let totals = Totals::from_log(&log());
        assert_eq!(totals.income, 200000.0);
        assert_eq!(totals.expense, 50000.0);
        assert_eq!(totals.savings, 50000.0);
        assert_eq!(totals.balance, totals.income - totals.expense - totals.savings);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let log = log();
        assert_eq!(Totals::from_log(&log), Totals::from_log(&log));
    }

    #[test]
    fn groups_expenses_by_category_largest_first() {
        let groups = expense_by_category(&log());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Comida");
        assert_eq!(groups[0].total, 38000.0);
        assert_eq!(groups[1].category, "Transporte");
    }

    #[test]
    fn monthly_flows_cover_the_whole_year() {
        let march = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let july = Utc.with_ymd_and_hms(2024, 7, 2, 9, 0, 0).unwrap();
        let other_year = Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap();
        let log = vec![
            TransactionDraft::income(1000.0, "Salario")
                .at(march)
                .into_transaction(),
            TransactionDraft::expense(400.0, "Comida")
                .at(march)
                .into_transaction(),
            TransactionDraft::expense(100.0, "Ocio")
                .at(july)
                .into_transaction(),
            TransactionDraft::income(9999.0, "Salario")
                .at(other_year)
                .into_transaction(),
        ];

        let flows = monthly_flows(&log, 2024);
        assert_eq!(flows.len(), 12);
        assert_eq!(flows[2].income, 1000.0);
        assert_eq!(flows[2].expense, 400.0);
        assert_eq!(flows[6].expense, 100.0);
        assert_eq!(flows[0].income, 0.0);
    }
}
