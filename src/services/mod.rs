pub mod daily_log_service;
pub mod expense_service;
pub mod fixed_expense_service;
pub mod income_service;
pub mod meal_plan_service;
pub mod note_service;

pub use daily_log_service::DailyLogService;
pub use expense_service::ExpenseService;
pub use fixed_expense_service::FixedExpenseService;
pub use income_service::IncomeService;
pub use meal_plan_service::MealPlanService;
pub use note_service::NoteService;

use crate::errors::TrackerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error("{0}")]
    Invalid(String),
}
