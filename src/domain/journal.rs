//! Per-user record collection with the query primitives the dashboard
//! aggregation is built on: date filtering, sums, counts, and group-sums.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    common::Dated, daily_log::DailyLog, expense::Expense, fixed_expense::FixedExpense,
    fixed_expense::PeriodType, income::Income, meal_plan::MealPlan, note::Note,
};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Half-open date window. `from` is inclusive, `to` is exclusive; either
/// side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DateFilter {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl DateFilter {
    /// Matches every record regardless of date.
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches records dated on or after `from`.
    pub fn since(from: NaiveDateTime) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    /// Matches records with `from <= date < to`.
    pub fn between(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn matches(&self, date: NaiveDateTime) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date < to)
    }
}

/// All records tracked for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journal {
    pub user_id: Uuid,
    #[serde(default)]
    pub incomes: Vec<Income>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub fixed_expenses: Vec<FixedExpense>,
    #[serde(default)]
    pub meal_plans: Vec<MealPlan>,
    #[serde(default)]
    pub daily_logs: Vec<DailyLog>,
    #[serde(default)]
    pub notes: Vec<Note>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Journal::schema_version_default")]
    pub schema_version: u8,
}

impl Journal {
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            incomes: Vec::new(),
            expenses: Vec::new(),
            fixed_expenses: Vec::new(),
            meal_plans: Vec::new(),
            daily_logs: Vec::new(),
            notes: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }

    pub fn income(&self, id: Uuid) -> Option<&Income> {
        self.incomes.iter().find(|income| income.id == id)
    }

    pub fn income_mut(&mut self, id: Uuid) -> Option<&mut Income> {
        self.incomes.iter_mut().find(|income| income.id == id)
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn expense_mut(&mut self, id: Uuid) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|expense| expense.id == id)
    }

    pub fn fixed_expense(&self, id: Uuid) -> Option<&FixedExpense> {
        self.fixed_expenses.iter().find(|fixed| fixed.id == id)
    }

    pub fn fixed_expense_mut(&mut self, id: Uuid) -> Option<&mut FixedExpense> {
        self.fixed_expenses.iter_mut().find(|fixed| fixed.id == id)
    }

    pub fn meal_plan(&self, id: Uuid) -> Option<&MealPlan> {
        self.meal_plans.iter().find(|plan| plan.id == id)
    }

    pub fn meal_plan_mut(&mut self, id: Uuid) -> Option<&mut MealPlan> {
        self.meal_plans.iter_mut().find(|plan| plan.id == id)
    }

    pub fn daily_log(&self, id: Uuid) -> Option<&DailyLog> {
        self.daily_logs.iter().find(|log| log.id == id)
    }

    pub fn daily_log_mut(&mut self, id: Uuid) -> Option<&mut DailyLog> {
        self.daily_logs.iter_mut().find(|log| log.id == id)
    }

    pub fn note(&self, id: Uuid) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn note_mut(&mut self, id: Uuid) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.id == id)
    }

    pub fn incomes_in(&self, filter: &DateFilter) -> Vec<&Income> {
        Self::filter_dated(&self.incomes, filter)
    }

    pub fn expenses_in(&self, filter: &DateFilter) -> Vec<&Expense> {
        Self::filter_dated(&self.expenses, filter)
    }

    pub fn meal_plans_in(&self, filter: &DateFilter) -> Vec<&MealPlan> {
        Self::filter_dated(&self.meal_plans, filter)
    }

    /// Sum of income amounts matching the filter; 0 on an empty match.
    pub fn sum_incomes(&self, filter: &DateFilter) -> f64 {
        self.incomes_in(filter).iter().map(|income| income.amount).sum()
    }

    /// Sum of expense amounts matching the filter; 0 on an empty match.
    pub fn sum_expenses(&self, filter: &DateFilter) -> f64 {
        self.expenses_in(filter).iter().map(|expense| expense.amount).sum()
    }

    pub fn count_incomes(&self, filter: &DateFilter) -> usize {
        self.incomes_in(filter).len()
    }

    pub fn count_expenses(&self, filter: &DateFilter) -> usize {
        self.expenses_in(filter).len()
    }

    /// Sum of declared totals over fixed expenses, optionally restricted to
    /// one period type. No date window applies here.
    pub fn sum_fixed_expenses(&self, period: Option<PeriodType>) -> f64 {
        self.fixed_expenses
            .iter()
            .filter(|fixed| period.map_or(true, |p| fixed.period_type == p))
            .map(|fixed| fixed.total_amount)
            .sum()
    }

    /// Per-category expense sums in first-encountered order.
    pub fn group_expenses_by_category(&self, filter: &DateFilter) -> Vec<(String, f64)> {
        group_sum(self.expenses_in(filter), |expense| expense.category.clone(), |expense| {
            expense.amount
        })
    }

    /// Per-source income sums in first-encountered order.
    pub fn group_incomes_by_source(&self, filter: &DateFilter) -> Vec<(String, f64)> {
        group_sum(self.incomes_in(filter), |income| income.source.clone(), |income| {
            income.amount
        })
    }

    fn filter_dated<'a, T: Dated>(records: &'a [T], filter: &DateFilter) -> Vec<&'a T> {
        records
            .iter()
            .filter(|record| filter.matches(record.date()))
            .collect()
    }
}

fn group_sum<T>(
    records: Vec<&T>,
    key: impl Fn(&T) -> String,
    amount: impl Fn(&T) -> f64,
) -> Vec<(String, f64)> {
    let mut groups: Vec<(String, f64)> = Vec::new();
    for record in records {
        let label = key(record);
        match groups.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, total)) => *total += amount(record),
            None => groups.push((label, amount(record))),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::income::IncomeCategory;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn date_filter_lower_bound_is_inclusive() {
        let boundary = at(2025, 6, 2);
        let filter = DateFilter::since(boundary);
        assert!(filter.matches(boundary));
        assert!(!filter.matches(boundary - chrono::Duration::seconds(1)));
    }

    #[test]
    fn sums_over_empty_match_are_zero() {
        let journal = Journal::new(Uuid::new_v4());
        let filter = DateFilter::since(at(2025, 1, 1));
        assert_eq!(journal.sum_incomes(&filter), 0.0);
        assert_eq!(journal.sum_expenses(&filter), 0.0);
        assert!(journal.group_expenses_by_category(&filter).is_empty());
    }

    #[test]
    fn group_sums_accumulate_in_first_seen_order() {
        let user = Uuid::new_v4();
        let mut journal = Journal::new(user);
        for (source, amount) in [("Salary", 100.0), ("Freelance", 40.0), ("Salary", 60.0)] {
            journal.incomes.push(Income::new(
                user,
                source,
                amount,
                at(2025, 6, 2),
                IncomeCategory::Active,
            ));
        }
        let groups = journal.group_incomes_by_source(&DateFilter::all());
        assert_eq!(
            groups,
            vec![("Salary".to_string(), 160.0), ("Freelance".to_string(), 40.0)]
        );
    }
}
