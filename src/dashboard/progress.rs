//! Weekly progress: recurring weekly obligations measured against income
//! earned since the start of the week.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{DateFilter, Journal, PeriodType};

/// Whether weekly income covers the weekly fixed obligations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStatus {
    Surplus,
    Deficit,
    Neutral,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeeklyProgress {
    pub fixed_weekly_expenses: f64,
    pub weekly_income: f64,
    pub remaining_amount: f64,
    pub progress_percentage: f64,
    pub status: ProgressStatus,
}

impl WeeklyProgress {
    /// Derives the progress signal. Percentage is income over obligations,
    /// clamped to [0, 100]; zero obligations yield zero percent.
    pub fn from_parts(fixed_weekly_expenses: f64, weekly_income: f64) -> Self {
        let remaining_amount = weekly_income - fixed_weekly_expenses;
        let progress_percentage = if fixed_weekly_expenses > 0.0 {
            ((weekly_income / fixed_weekly_expenses) * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        let status = if remaining_amount > 0.0 {
            ProgressStatus::Surplus
        } else if remaining_amount < 0.0 {
            ProgressStatus::Deficit
        } else {
            ProgressStatus::Neutral
        };
        Self {
            fixed_weekly_expenses,
            weekly_income,
            remaining_amount,
            progress_percentage,
            status,
        }
    }
}

/// Computes the weekly progress for a journal. All weekly fixed expenses
/// count toward the obligation total regardless of their declared period
/// window; income is restricted to `start_of_week` onward.
pub fn weekly_progress(journal: &Journal, start_of_week: NaiveDateTime) -> WeeklyProgress {
    let fixed = journal.sum_fixed_expenses(Some(PeriodType::Weekly));
    let income = journal.sum_incomes(&DateFilter::since(start_of_week));
    WeeklyProgress::from_parts(fixed, income)
}
