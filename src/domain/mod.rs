pub mod common;
pub mod daily_log;
pub mod expense;
pub mod fixed_expense;
pub mod income;
pub mod journal;
pub mod meal_plan;
pub mod note;

pub use daily_log::{DailyLog, Mood};
pub use expense::Expense;
pub use fixed_expense::{ExpenseItem, FixedExpense, PeriodType};
pub use income::{Income, IncomeCategory};
pub use journal::{DateFilter, Journal};
pub use meal_plan::{Meal, MealPlan, MealType};
pub use note::Note;
