//! Dashboard aggregation: date windows, summed totals, breakdowns, trend
//! series, and the weekly progress signal, assembled into composite payloads.

pub mod aggregate;
pub mod composer;
pub mod date_range;
pub mod progress;

pub use aggregate::{
    CategoryTotal, QuickStats, RecordCounts, TodayCounts, TrendData, TrendPeriod, TrendPoint,
    WindowTotals,
};
pub use composer::{
    Analytics, DailyLogDigest, DashboardData, DashboardService, MealDigest, RecentActivities,
};
pub use date_range::DateRanges;
pub use progress::{ProgressStatus, WeeklyProgress};
