//! Domain models for savings funds and their sub-budgets.

use serde::{Deserialize, Serialize};

use crate::domain::common::{fresh_id, Identifiable, NamedEntity};

/// A named slice of a fund's target, tracking its own spent amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubBudget {
    pub id: String,
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub spent: f64,
}

impl SubBudget {
    /// Allowance still available before the slice is exhausted.
    pub fn remaining(&self) -> f64 {
        (self.amount - self.spent).max(0.0)
    }
}

impl Identifiable for SubBudget {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A named savings goal with a target amount, an accumulated pool, and
/// optional sub-budgets dividing the target.
///
/// `current_amount` is derived state: it is mutated only by the ledger's
/// transaction application and never directly by callers. The serde aliases
/// accept the allocated/spent field pair written by early app versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    pub id: String,
    pub name: String,
    #[serde(alias = "allocatedAmount")]
    pub target_amount: f64,
    #[serde(default, alias = "spentAmount")]
    pub current_amount: f64,
    #[serde(default)]
    pub sub_budgets: Vec<SubBudget>,
}

impl Fund {
    pub fn sub_budget(&self, id: &str) -> Option<&SubBudget> {
        self.sub_budgets.iter().find(|sb| sb.id == id)
    }

    pub(crate) fn sub_budget_mut(&mut self, id: &str) -> Option<&mut SubBudget> {
        self.sub_budgets.iter_mut().find(|sb| sb.id == id)
    }

    /// Share of the target already accumulated, in percent. Zero-target
    /// funds report 0 rather than dividing by zero.
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }
        (self.current_amount / self.target_amount) * 100.0
    }

    /// Amount still missing to reach the target, floored at zero.
    pub fn remaining_to_target(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }
}

impl Identifiable for Fund {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for Fund {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Seed for a sub-budget created alongside a fund.
#[derive(Debug, Clone)]
pub struct SubBudgetSeed {
    pub name: String,
    pub amount: f64,
}

impl SubBudgetSeed {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    pub(crate) fn into_sub_budget(self) -> SubBudget {
        SubBudget {
            id: fresh_id(),
            name: self.name,
            amount: self.amount,
            spent: 0.0,
        }
    }
}

/// A candidate fund lacking generated fields.
///
/// When sub-budget seeds are supplied, the effective target is their sum
/// and any caller-supplied target is overridden.
#[derive(Debug, Clone)]
pub struct FundDraft {
    pub name: String,
    pub target_amount: f64,
    pub sub_budgets: Vec<SubBudgetSeed>,
}

impl FundDraft {
    pub fn new(name: impl Into<String>, target_amount: f64) -> Self {
        Self {
            name: name.into(),
            target_amount,
            sub_budgets: Vec::new(),
        }
    }

    pub fn with_sub_budgets(mut self, seeds: Vec<SubBudgetSeed>) -> Self {
        self.sub_budgets = seeds;
        self
    }

    pub(crate) fn into_fund(self) -> Fund {
        let sub_budgets: Vec<SubBudget> = self
            .sub_budgets
            .into_iter()
            .map(SubBudgetSeed::into_sub_budget)
            .collect();
        let target_amount = if sub_budgets.is_empty() {
            self.target_amount
        } else {
            sub_budgets.iter().map(|sb| sb.amount).sum()
        };
        Fund {
            id: fresh_id(),
            name: self.name,
            target_amount,
            current_amount: 0.0,
            sub_budgets,
        }
    }
}

/// Partial update applied to an existing fund.
///
/// Replacing the sub-budget collection recomputes the target as the sum of
/// the new slices, mirroring the creation flow.
#[derive(Debug, Clone, Default)]
pub struct FundPatch {
    pub name: Option<String>,
    pub target_amount: Option<f64>,
    pub sub_budgets: Option<Vec<SubBudget>>,
}

impl FundPatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn retarget(target_amount: f64) -> Self {
        Self {
            target_amount: Some(target_amount),
            ..Self::default()
        }
    }

    pub fn replace_sub_budgets(sub_budgets: Vec<SubBudget>) -> Self {
        Self {
            sub_budgets: Some(sub_budgets),
            ..Self::default()
        }
    }
}
