//! Domain types for recurring fixed obligations (rent, groceries, internet).

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Identifiable, Owned};

/// One line of a fixed expense breakdown. `total_price` is derived and kept
/// consistent by [`FixedExpense::recompute_total`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseItem {
    pub name: String,
    pub quantity: f64,
    pub unit_price: f64,
    #[serde(default)]
    pub total_price: f64,
}

impl ExpenseItem {
    pub fn new(name: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
            total_price: quantity * unit_price,
        }
    }
}

/// Declared cadence of a fixed expense.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PeriodType {
    Weekly,
    Monthly,
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PeriodType::Weekly => "Weekly",
            PeriodType::Monthly => "Monthly",
        };
        f.write_str(label)
    }
}

/// A recurring obligation with an itemized cost breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixedExpense {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: String,
    pub period_type: PeriodType,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    #[serde(default)]
    pub items: Vec<ExpenseItem>,
    #[serde(default)]
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
}

impl FixedExpense {
    pub fn new(
        user_id: Uuid,
        category: impl Into<String>,
        period_type: PeriodType,
        period_start: NaiveDate,
        period_end: NaiveDate,
        items: Vec<ExpenseItem>,
    ) -> Self {
        let mut expense = Self {
            id: Uuid::new_v4(),
            user_id,
            category: category.into(),
            period_type,
            period_start,
            period_end,
            items,
            total_amount: 0.0,
            created_at: Utc::now(),
        };
        expense.recompute_total();
        expense
    }

    /// Re-derives each item's `total_price` and the overall `total_amount`.
    /// Invoked on every write so the stored totals never drift.
    pub fn recompute_total(&mut self) {
        for item in &mut self.items {
            item.total_price = item.quantity * item.unit_price;
        }
        self.total_amount = self.items.iter().map(|item| item.total_price).sum();
    }
}

impl Identifiable for FixedExpense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Owned for FixedExpense {
    fn user_id(&self) -> Uuid {
        self.user_id
    }
}
