use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;
use uuid::Uuid;

use lifetrack_core::{
    clock::FixedClock,
    dashboard::{DashboardService, ProgressStatus},
    domain::{
        DailyLog, Expense, ExpenseItem, FixedExpense, Income, IncomeCategory, Journal, Meal,
        MealPlan, MealType, Mood, PeriodType,
    },
    storage::{JsonStorage, StorageBackend},
};

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
}

// Wednesday 2025-06-11; the week starts Monday 2025-06-09.
fn now() -> NaiveDateTime {
    at(2025, 6, 11, 12)
}

fn this_monday() -> NaiveDateTime {
    at(2025, 6, 9, 10)
}

fn store_with(journal: &Journal) -> (TempDir, JsonStorage) {
    let dir = TempDir::new().expect("temp dir");
    let storage = JsonStorage::new(Some(dir.path().to_path_buf())).expect("storage");
    storage.save(journal).expect("save journal");
    (dir, storage)
}

#[test]
fn window_sums_respect_week_month_and_all_time_boundaries() {
    let user = Uuid::new_v4();
    let mut journal = Journal::new(user);
    journal.incomes.push(Income::new(
        user,
        "Salary",
        100.0,
        this_monday(),
        IncomeCategory::Active,
    ));
    journal.incomes.push(Income::new(
        user,
        "Freelance",
        50.0,
        at(2025, 5, 20, 9),
        IncomeCategory::Business,
    ));
    journal
        .expenses
        .push(Expense::new(user, "Groceries", 30.0, this_monday(), "Food"));

    let (_dir, storage) = store_with(&journal);
    let clock = FixedClock(now());
    let data = DashboardService::overview(&storage, &clock, user).expect("overview");

    assert_eq!(data.weekly.income, 100.0);
    assert_eq!(data.weekly.expenses, 30.0);
    assert_eq!(data.weekly.balance, 70.0);
    assert_eq!(data.monthly.income, 100.0);
    assert_eq!(data.summary.income, 150.0);
    assert_eq!(data.summary.expenses, 30.0);
    assert_eq!(data.summary.balance, 120.0);
}

#[test]
fn record_on_the_boundary_instant_is_included() {
    let user = Uuid::new_v4();
    let mut journal = Journal::new(user);
    // Exactly midnight of the start of the week.
    journal.incomes.push(Income::new(
        user,
        "Salary",
        40.0,
        at(2025, 6, 9, 0),
        IncomeCategory::Active,
    ));

    let (_dir, storage) = store_with(&journal);
    let clock = FixedClock(now());
    let data = DashboardService::overview(&storage, &clock, user).expect("overview");
    assert_eq!(data.weekly.income, 40.0);
}

#[test]
fn empty_journal_produces_zeros_not_errors() {
    let user = Uuid::new_v4();
    let dir = TempDir::new().expect("temp dir");
    let storage = JsonStorage::new(Some(dir.path().to_path_buf())).expect("storage");
    let clock = FixedClock(now());

    let data = DashboardService::overview(&storage, &clock, user).expect("overview");
    assert_eq!(data.summary.income, 0.0);
    assert_eq!(data.summary.expenses, 0.0);
    assert_eq!(data.summary.balance, 0.0);
    assert!(data.analytics.top_expense_categories.is_empty());
    assert!(data.recent_activities.daily_logs.is_empty());
    assert_eq!(data.recent_activities.weekly_meal_count, 0);

    let stats = DashboardService::quick_stats(&storage, &clock, user).expect("stats");
    assert_eq!(stats.totals.incomes, 0);
    assert_eq!(stats.today.expenses, 0);
}

#[test]
fn overview_is_idempotent_without_intervening_writes() {
    let user = Uuid::new_v4();
    let mut journal = Journal::new(user);
    journal.incomes.push(Income::new(
        user,
        "Salary",
        321.5,
        this_monday(),
        IncomeCategory::Active,
    ));
    journal
        .expenses
        .push(Expense::new(user, "Rent", 120.0, at(2025, 6, 10, 8), "Housing"));

    let (_dir, storage) = store_with(&journal);
    let clock = FixedClock(now());
    let first = DashboardService::overview(&storage, &clock, user).expect("first");
    let second = DashboardService::overview(&storage, &clock, user).expect("second");
    assert_eq!(first, second);
}

#[test]
fn top_five_breakdowns_drop_the_smallest_category() {
    let user = Uuid::new_v4();
    let mut journal = Journal::new(user);
    for (category, amount) in [
        ("Food", 40.0),
        ("Food", 10.0),
        ("Transport", 20.0),
        ("Bills", 5.0),
        ("Other", 1.0),
        ("Shopping", 100.0),
    ] {
        journal
            .expenses
            .push(Expense::new(user, "entry", amount, at(2025, 6, 10, 9), category));
    }

    let (_dir, storage) = store_with(&journal);
    let clock = FixedClock(now());
    let data = DashboardService::overview(&storage, &clock, user).expect("overview");
    let top = &data.analytics.top_expense_categories;
    assert_eq!(top.len(), 5);
    assert_eq!(top[0].label, "Shopping");
    assert_eq!(top[0].total, 100.0);
    assert_eq!(top[1].label, "Food");
    assert_eq!(top[1].total, 50.0);
    assert_eq!(top[2].label, "Transport");
    assert_eq!(top[3].label, "Bills");
    let totals: Vec<f64> = top.iter().map(|entry| entry.total).collect();
    assert!(totals.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn recent_activities_cover_logs_meals_and_weekly_count() {
    let user = Uuid::new_v4();
    let mut journal = Journal::new(user);
    for day in 1..=7 {
        journal.daily_logs.push(
            DailyLog::new(user, NaiveDate::from_ymd_opt(2025, 6, day).unwrap())
                .with_mood(Mood::Calm)
                .with_note(format!("day {}", day)),
        );
    }
    // Today's plan plus one earlier in the week and one last week.
    journal.meal_plans.push(MealPlan::new(
        user,
        at(2025, 6, 11, 0),
        vec![
            Meal::new(MealType::Breakfast, "Oats").with_calories(300.0),
            Meal::new(MealType::Dinner, "Stir fry").with_cost(6.5),
        ],
    ));
    journal
        .meal_plans
        .push(MealPlan::new(user, at(2025, 6, 9, 0), vec![]));
    journal
        .meal_plans
        .push(MealPlan::new(user, at(2025, 6, 4, 0), vec![]));

    let (_dir, storage) = store_with(&journal);
    let clock = FixedClock(now());
    let data = DashboardService::overview(&storage, &clock, user).expect("overview");

    let recent = &data.recent_activities;
    assert_eq!(recent.daily_logs.len(), 5);
    assert_eq!(
        recent.daily_logs[0].date,
        NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()
    );
    assert_eq!(recent.today_meals.len(), 2);
    assert_eq!(recent.today_meals[0].name, "Oats");
    assert_eq!(recent.weekly_meal_count, 2);
}

#[test]
fn weekly_progress_reports_deficit_with_partial_coverage() {
    let user = Uuid::new_v4();
    let mut journal = Journal::new(user);
    journal.fixed_expenses.push(FixedExpense::new(
        user,
        "Groceries",
        PeriodType::Weekly,
        NaiveDate::from_ymd_opt(2025, 6, 9).unwrap(),
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        vec![ExpenseItem::new("Food", 1.0, 200.0)],
    ));
    journal.incomes.push(Income::new(
        user,
        "Salary",
        150.0,
        this_monday(),
        IncomeCategory::Active,
    ));

    let (_dir, storage) = store_with(&journal);
    let clock = FixedClock(now());
    let progress = DashboardService::weekly_progress(&storage, &clock, user).expect("progress");
    assert_eq!(progress.fixed_weekly_expenses, 200.0);
    assert_eq!(progress.weekly_income, 150.0);
    assert_eq!(progress.remaining_amount, -50.0);
    assert_eq!(progress.progress_percentage, 75.0);
    assert_eq!(progress.status, ProgressStatus::Deficit);
}

#[test]
fn weekly_fixed_expenses_ignore_their_declared_period_window() {
    let user = Uuid::new_v4();
    let mut journal = Journal::new(user);
    // A weekly obligation declared for a past week still counts; a monthly
    // one never does.
    journal.fixed_expenses.push(FixedExpense::new(
        user,
        "Transport",
        PeriodType::Weekly,
        NaiveDate::from_ymd_opt(2025, 5, 5).unwrap(),
        NaiveDate::from_ymd_opt(2025, 5, 11).unwrap(),
        vec![ExpenseItem::new("Bus pass", 1.0, 30.0)],
    ));
    journal.fixed_expenses.push(FixedExpense::new(
        user,
        "Rent",
        PeriodType::Monthly,
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        vec![ExpenseItem::new("Rent", 1.0, 900.0)],
    ));

    let (_dir, storage) = store_with(&journal);
    let clock = FixedClock(now());
    let progress = DashboardService::weekly_progress(&storage, &clock, user).expect("progress");
    assert_eq!(progress.fixed_weekly_expenses, 30.0);
}

#[test]
fn charts_fall_back_to_month_for_unknown_periods() {
    let user = Uuid::new_v4();
    let mut journal = Journal::new(user);
    journal.incomes.push(Income::new(
        user,
        "Salary",
        75.0,
        at(2025, 6, 3, 9),
        IncomeCategory::Active,
    ));
    journal.incomes.push(Income::new(
        user,
        "Dividends",
        25.0,
        at(2025, 1, 15, 9),
        IncomeCategory::Investment,
    ));

    let (_dir, storage) = store_with(&journal);
    let clock = FixedClock(now());

    let month = DashboardService::charts(&storage, &clock, user, "bogus").expect("charts");
    assert_eq!(month.period.label(), "month");
    assert_eq!(month.income_trend.len(), 1);
    assert_eq!(month.income_trend[0].amount, 75.0);

    let year = DashboardService::charts(&storage, &clock, user, "year").expect("charts");
    assert_eq!(year.income_trend.len(), 2);
    assert_eq!(year.income_trend[0].month, 1);
    assert_eq!(year.income_by_source.len(), 2);
}
