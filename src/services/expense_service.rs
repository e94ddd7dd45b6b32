use uuid::Uuid;

use crate::domain::{Expense, Journal};

use super::{ServiceError, ServiceResult};

pub struct ExpenseService;

impl ExpenseService {
    pub fn add(journal: &mut Journal, expense: Expense) -> ServiceResult<Uuid> {
        Self::validate(&expense)?;
        let id = expense.id;
        journal.expenses.push(expense);
        journal.touch();
        Ok(id)
    }

    pub fn edit(journal: &mut Journal, id: Uuid, changes: Expense) -> ServiceResult<()> {
        Self::validate(&changes)?;
        let expense = journal
            .expense_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Expense not found".into()))?;
        expense.title = changes.title;
        expense.amount = changes.amount;
        expense.date = changes.date;
        expense.category = changes.category;
        expense.icon = changes.icon;
        journal.touch();
        Ok(())
    }

    pub fn remove(journal: &mut Journal, id: Uuid) -> ServiceResult<()> {
        let before = journal.expenses.len();
        journal.expenses.retain(|expense| expense.id != id);
        if journal.expenses.len() == before {
            return Err(ServiceError::Invalid("Expense not found".into()));
        }
        journal.touch();
        Ok(())
    }

    /// Expenses sorted by date descending, newest first.
    pub fn list(journal: &Journal) -> Vec<&Expense> {
        let mut expenses: Vec<&Expense> = journal.expenses.iter().collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        expenses
    }

    fn validate(expense: &Expense) -> ServiceResult<()> {
        if expense.title.trim().is_empty() {
            return Err(ServiceError::Invalid("Expense title is required".into()));
        }
        if expense.amount <= 0.0 {
            return Err(ServiceError::Invalid(
                "Expense amount must be positive".into(),
            ));
        }
        Ok(())
    }
}
