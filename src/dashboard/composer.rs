//! Assembles the composite dashboard payloads. Every entry point reloads
//! the user's journal from storage and recomputes; there is no caching, and
//! any retrieval failure fails the whole request.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;
use crate::domain::{DateFilter, Journal, MealType, Mood};
use crate::errors::TrackerError;
use crate::storage::StorageBackend;

use super::aggregate::{self, CategoryTotal, QuickStats, TrendData, TrendPeriod, WindowTotals};
use super::date_range::DateRanges;
use super::progress::{self, WeeklyProgress};

const RECENT_LOG_LIMIT: usize = 5;

/// Digest of a daily log for the recent-activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyLogDigest {
    pub date: NaiveDate,
    pub mood: Mood,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Digest of one of today's planned meals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealDigest {
    pub meal_type: MealType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentActivities {
    pub daily_logs: Vec<DailyLogDigest>,
    pub today_meals: Vec<MealDigest>,
    pub weekly_meal_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Analytics {
    pub top_expense_categories: Vec<CategoryTotal>,
    pub top_income_sources: Vec<CategoryTotal>,
}

/// The composite dashboard response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardData {
    pub summary: WindowTotals,
    pub daily: WindowTotals,
    pub weekly: WindowTotals,
    pub monthly: WindowTotals,
    pub recent_activities: RecentActivities,
    pub analytics: Analytics,
}

pub struct DashboardService;

impl DashboardService {
    /// Full dashboard: all-time summary, per-window totals, recent
    /// activities, and top-5 analytics.
    pub fn overview(
        store: &dyn StorageBackend,
        clock: &dyn Clock,
        user_id: Uuid,
    ) -> Result<DashboardData, TrackerError> {
        let journal = store.load_or_create(user_id)?;
        let ranges = DateRanges::from_now(clock.now());
        tracing::debug!(user = %user_id, "composing dashboard overview");
        Ok(Self::compose_overview(&journal, &ranges))
    }

    /// Trend series and breakdowns for a chart period. Unrecognized period
    /// labels silently fall back to the current month.
    pub fn charts(
        store: &dyn StorageBackend,
        clock: &dyn Clock,
        user_id: Uuid,
        period: &str,
    ) -> Result<TrendData, TrackerError> {
        let journal = store.load_or_create(user_id)?;
        Ok(aggregate::trend(&journal, TrendPeriod::parse(period), clock.now()))
    }

    /// Record counts overall and for today.
    pub fn quick_stats(
        store: &dyn StorageBackend,
        clock: &dyn Clock,
        user_id: Uuid,
    ) -> Result<QuickStats, TrackerError> {
        let journal = store.load_or_create(user_id)?;
        let ranges = DateRanges::from_now(clock.now());
        Ok(aggregate::quick_stats(&journal, &ranges))
    }

    /// Legacy all-time income/expense/balance triple.
    pub fn summary(
        store: &dyn StorageBackend,
        user_id: Uuid,
    ) -> Result<WindowTotals, TrackerError> {
        let journal = store.load_or_create(user_id)?;
        Ok(aggregate::all_time_totals(&journal))
    }

    /// Weekly fixed obligations vs income earned this week.
    pub fn weekly_progress(
        store: &dyn StorageBackend,
        clock: &dyn Clock,
        user_id: Uuid,
    ) -> Result<WeeklyProgress, TrackerError> {
        let journal = store.load_or_create(user_id)?;
        let ranges = DateRanges::from_now(clock.now());
        Ok(progress::weekly_progress(&journal, ranges.start_of_week))
    }

    fn compose_overview(journal: &Journal, ranges: &DateRanges) -> DashboardData {
        DashboardData {
            summary: aggregate::all_time_totals(journal),
            daily: aggregate::window_totals(journal, ranges.today),
            weekly: aggregate::window_totals(journal, ranges.start_of_week),
            monthly: aggregate::window_totals(journal, ranges.start_of_month),
            recent_activities: Self::recent_activities(journal, ranges),
            analytics: Analytics {
                top_expense_categories: aggregate::top_expense_categories(
                    journal,
                    &DateFilter::all(),
                ),
                top_income_sources: aggregate::top_income_sources(journal, &DateFilter::all()),
            },
        }
    }

    fn recent_activities(journal: &Journal, ranges: &DateRanges) -> RecentActivities {
        let mut logs: Vec<&crate::domain::DailyLog> = journal.daily_logs.iter().collect();
        logs.sort_by(|a, b| b.date.cmp(&a.date));
        let daily_logs = logs
            .into_iter()
            .take(RECENT_LOG_LIMIT)
            .map(|log| DailyLogDigest {
                date: log.date,
                mood: log.mood,
                note: log.note.clone(),
                created_at: log.created_at,
            })
            .collect();

        let today_window = DateFilter::between(ranges.today, ranges.today + Duration::days(1));
        let today_meals = journal
            .meal_plans_in(&today_window)
            .into_iter()
            .flat_map(|plan| plan.meals.iter())
            .map(|meal| MealDigest {
                meal_type: meal.meal_type,
                name: meal.name.clone(),
                calories: meal.calories,
            })
            .collect();

        let weekly_meal_count = journal
            .meal_plans_in(&DateFilter::since(ranges.start_of_week))
            .len();

        RecentActivities {
            daily_logs,
            today_meals,
            weekly_meal_count,
        }
    }
}
