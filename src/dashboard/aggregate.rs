//! Grouped-sum queries over a journal: per-window totals, top-5 breakdowns,
//! record counts, and day-grained trend series for charts.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::{DateFilter, Journal};

use super::date_range::DateRanges;

const TOP_BREAKDOWN_LIMIT: usize = 5;

/// Income and expense sums for one window, with the derived balance.
/// Balance is never clamped; deficits are negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WindowTotals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

impl WindowTotals {
    pub fn from_parts(income: f64, expenses: f64) -> Self {
        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}

/// One group in a category/source breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub label: String,
    pub total: f64,
}

/// Record counts per entity type plus today's activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuickStats {
    pub totals: RecordCounts,
    pub today: TodayCounts,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordCounts {
    pub incomes: usize,
    pub expenses: usize,
    pub daily_logs: usize,
    pub meal_plans: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodayCounts {
    pub incomes: usize,
    pub expenses: usize,
}

/// Chart period selection. Unrecognized labels fall back to `Month`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendPeriod {
    Week,
    Month,
    Year,
}

impl TrendPeriod {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "week" => TrendPeriod::Week,
            "year" => TrendPeriod::Year,
            _ => TrendPeriod::Month,
        }
    }

    /// Date window covered by the period, relative to `now`: the last 7
    /// days, the current calendar month, or the current calendar year.
    pub fn range(self, now: NaiveDateTime) -> DateFilter {
        match self {
            TrendPeriod::Week => DateFilter::between(now - Duration::days(7), now),
            TrendPeriod::Month => {
                let ranges = DateRanges::from_now(now);
                DateFilter::between(ranges.start_of_month, ranges.end_of_month + Duration::days(1))
            }
            TrendPeriod::Year => {
                let start = NaiveDate::from_ymd_opt(now.year(), 1, 1)
                    .unwrap_or_else(|| now.date())
                    .and_hms_opt(0, 0, 0)
                    .unwrap();
                let end = NaiveDate::from_ymd_opt(now.year() + 1, 1, 1)
                    .unwrap_or_else(|| now.date())
                    .and_hms_opt(0, 0, 0)
                    .unwrap();
                DateFilter::between(start, end)
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrendPeriod::Week => "week",
            TrendPeriod::Month => "month",
            TrendPeriod::Year => "year",
        }
    }
}

/// Daily sum within a trend series, keyed by calendar day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub amount: f64,
}

/// Trend series plus full breakdowns for one chart period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendData {
    pub period: TrendPeriod,
    pub income_trend: Vec<TrendPoint>,
    pub expense_trend: Vec<TrendPoint>,
    pub expenses_by_category: Vec<CategoryTotal>,
    pub income_by_source: Vec<CategoryTotal>,
}

/// Income/expense totals for the window starting at `start` (inclusive).
pub fn window_totals(journal: &Journal, start: NaiveDateTime) -> WindowTotals {
    let filter = DateFilter::since(start);
    WindowTotals::from_parts(journal.sum_incomes(&filter), journal.sum_expenses(&filter))
}

/// All-time income/expense totals.
pub fn all_time_totals(journal: &Journal) -> WindowTotals {
    let filter = DateFilter::all();
    WindowTotals::from_parts(journal.sum_incomes(&filter), journal.sum_expenses(&filter))
}

/// Five largest expense categories, descending by sum. Ties keep the
/// first-encountered order.
pub fn top_expense_categories(journal: &Journal, filter: &DateFilter) -> Vec<CategoryTotal> {
    top_n(journal.group_expenses_by_category(filter), TOP_BREAKDOWN_LIMIT)
}

/// Five largest income sources, descending by sum.
pub fn top_income_sources(journal: &Journal, filter: &DateFilter) -> Vec<CategoryTotal> {
    top_n(journal.group_incomes_by_source(filter), TOP_BREAKDOWN_LIMIT)
}

/// Record counts overall and for today.
pub fn quick_stats(journal: &Journal, ranges: &DateRanges) -> QuickStats {
    let today = DateFilter::since(ranges.today);
    QuickStats {
        totals: RecordCounts {
            incomes: journal.incomes.len(),
            expenses: journal.expenses.len(),
            daily_logs: journal.daily_logs.len(),
            meal_plans: journal.meal_plans.len(),
        },
        today: TodayCounts {
            incomes: journal.count_incomes(&today),
            expenses: journal.count_expenses(&today),
        },
    }
}

/// Day-grained income and expense series for the period, ascending by day,
/// plus the untruncated category/source breakdowns over the same range.
pub fn trend(journal: &Journal, period: TrendPeriod, now: NaiveDateTime) -> TrendData {
    let filter = period.range(now);
    let income_trend = daily_series(
        journal
            .incomes_in(&filter)
            .into_iter()
            .map(|income| (income.date, income.amount)),
    );
    let expense_trend = daily_series(
        journal
            .expenses_in(&filter)
            .into_iter()
            .map(|expense| (expense.date, expense.amount)),
    );
    TrendData {
        period,
        income_trend,
        expense_trend,
        expenses_by_category: sorted_descending(journal.group_expenses_by_category(&filter)),
        income_by_source: sorted_descending(journal.group_incomes_by_source(&filter)),
    }
}

fn daily_series(records: impl Iterator<Item = (NaiveDateTime, f64)>) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = Vec::new();
    for (date, amount) in records {
        let (year, month, day) = (date.year(), date.month(), date.day());
        match points
            .iter_mut()
            .find(|point| point.year == year && point.month == month && point.day == day)
        {
            Some(point) => point.amount += amount,
            None => points.push(TrendPoint {
                year,
                month,
                day,
                amount,
            }),
        }
    }
    points.sort_by_key(|point| (point.year, point.month, point.day));
    points
}

fn sorted_descending(groups: Vec<(String, f64)>) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = groups
        .into_iter()
        .map(|(label, total)| CategoryTotal { label, total })
        .collect();
    // Stable sort: equal sums keep first-encountered group order.
    totals.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
    totals
}

fn top_n(groups: Vec<(String, f64)>, limit: usize) -> Vec<CategoryTotal> {
    let mut totals = sorted_descending(groups);
    totals.truncate(limit);
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Expense, Income, IncomeCategory};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn journal_with_expenses(entries: &[(&str, f64)]) -> Journal {
        let user = Uuid::new_v4();
        let mut journal = Journal::new(user);
        for (category, amount) in entries {
            journal
                .expenses
                .push(Expense::new(user, "item", *amount, at(2025, 6, 10), *category));
        }
        journal
    }

    #[test]
    fn top_categories_are_descending_and_capped_at_five() {
        let journal = journal_with_expenses(&[
            ("Food", 40.0),
            ("Food", 10.0),
            ("Transport", 20.0),
            ("Bills", 5.0),
            ("Other", 1.0),
            ("Shopping", 100.0),
        ]);
        let top = top_expense_categories(&journal, &DateFilter::all());
        let labels: Vec<&str> = top.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(labels, vec!["Shopping", "Food", "Transport", "Bills", "Other"]);
        assert_eq!(top[0].total, 100.0);
        assert_eq!(top[1].total, 50.0);
        assert_eq!(top.len(), 5);

        let journal = journal_with_expenses(&[
            ("A", 1.0),
            ("B", 2.0),
            ("C", 3.0),
            ("D", 4.0),
            ("E", 5.0),
            ("F", 6.0),
        ]);
        assert_eq!(top_expense_categories(&journal, &DateFilter::all()).len(), 5);
    }

    #[test]
    fn tied_sums_keep_first_encountered_order() {
        let journal = journal_with_expenses(&[("Rent", 50.0), ("Food", 50.0), ("Gym", 50.0)]);
        let top = top_expense_categories(&journal, &DateFilter::all());
        let labels: Vec<&str> = top.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(labels, vec!["Rent", "Food", "Gym"]);
    }

    #[test]
    fn window_balance_can_go_negative() {
        let user = Uuid::new_v4();
        let mut journal = Journal::new(user);
        journal
            .incomes
            .push(Income::new(user, "Salary", 30.0, at(2025, 6, 10), IncomeCategory::Active));
        journal
            .expenses
            .push(Expense::new(user, "Laptop", 130.0, at(2025, 6, 10), "Tech"));
        let totals = all_time_totals(&journal);
        assert_eq!(totals.balance, -100.0);
    }

    #[test]
    fn unrecognized_trend_period_defaults_to_month() {
        assert_eq!(TrendPeriod::parse("quarter"), TrendPeriod::Month);
        assert_eq!(TrendPeriod::parse("WEEK"), TrendPeriod::Week);
        assert_eq!(TrendPeriod::parse("year"), TrendPeriod::Year);
    }

    #[test]
    fn trend_points_are_grouped_by_day_and_sorted_ascending() {
        let user = Uuid::new_v4();
        let mut journal = Journal::new(user);
        for (day, amount) in [(12, 10.0), (3, 5.0), (12, 2.5)] {
            journal.incomes.push(Income::new(
                user,
                "Salary",
                amount,
                at(2025, 6, day),
                IncomeCategory::Active,
            ));
        }
        let data = trend(&journal, TrendPeriod::Month, at(2025, 6, 20));
        assert_eq!(data.income_trend.len(), 2);
        assert_eq!(data.income_trend[0].day, 3);
        assert_eq!(data.income_trend[1].day, 12);
        assert_eq!(data.income_trend[1].amount, 12.5);
    }

    #[test]
    fn week_trend_only_covers_the_last_seven_days() {
        let user = Uuid::new_v4();
        let mut journal = Journal::new(user);
        journal
            .incomes
            .push(Income::new(user, "Old", 99.0, at(2025, 6, 1), IncomeCategory::Active));
        journal
            .incomes
            .push(Income::new(user, "Fresh", 10.0, at(2025, 6, 18), IncomeCategory::Active));
        let data = trend(&journal, TrendPeriod::Week, at(2025, 6, 20));
        assert_eq!(data.income_trend.len(), 1);
        assert_eq!(data.income_trend[0].amount, 10.0);
    }
}
