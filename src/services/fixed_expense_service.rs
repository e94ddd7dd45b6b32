use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{FixedExpense, Journal, PeriodType};

use super::{ServiceError, ServiceResult};

pub struct FixedExpenseService;

impl FixedExpenseService {
    /// Adds a fixed expense, re-deriving its item and overall totals.
    pub fn add(journal: &mut Journal, mut fixed: FixedExpense) -> ServiceResult<Uuid> {
        Self::validate(&fixed)?;
        fixed.recompute_total();
        let id = fixed.id;
        journal.fixed_expenses.push(fixed);
        journal.touch();
        Ok(id)
    }

    /// Adds several fixed expenses in one call. Fails before any insert if
    /// the batch is empty or any entry is invalid.
    pub fn add_bulk(journal: &mut Journal, batch: Vec<FixedExpense>) -> ServiceResult<Vec<Uuid>> {
        if batch.is_empty() {
            return Err(ServiceError::Invalid("No fixed expenses provided".into()));
        }
        for fixed in &batch {
            Self::validate(fixed)?;
        }
        let mut ids = Vec::with_capacity(batch.len());
        for mut fixed in batch {
            fixed.recompute_total();
            ids.push(fixed.id);
            journal.fixed_expenses.push(fixed);
        }
        journal.touch();
        Ok(ids)
    }

    pub fn edit(journal: &mut Journal, id: Uuid, changes: FixedExpense) -> ServiceResult<()> {
        Self::validate(&changes)?;
        let fixed = journal
            .fixed_expense_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Fixed expense not found".into()))?;
        fixed.category = changes.category;
        fixed.period_type = changes.period_type;
        fixed.period_start = changes.period_start;
        fixed.period_end = changes.period_end;
        fixed.items = changes.items;
        fixed.recompute_total();
        journal.touch();
        Ok(())
    }

    pub fn remove(journal: &mut Journal, id: Uuid) -> ServiceResult<()> {
        let before = journal.fixed_expenses.len();
        journal.fixed_expenses.retain(|fixed| fixed.id != id);
        if journal.fixed_expenses.len() == before {
            return Err(ServiceError::Invalid("Fixed expense not found".into()));
        }
        journal.touch();
        Ok(())
    }

    pub fn list(journal: &Journal) -> Vec<&FixedExpense> {
        journal.fixed_expenses.iter().collect()
    }

    /// Fixed expenses restricted by period type and/or a declared period
    /// window (entries whose whole period falls inside the window).
    pub fn list_filtered<'a>(
        journal: &'a Journal,
        period_type: Option<PeriodType>,
        window: Option<(NaiveDate, NaiveDate)>,
    ) -> Vec<&'a FixedExpense> {
        journal
            .fixed_expenses
            .iter()
            .filter(|fixed| period_type.map_or(true, |p| fixed.period_type == p))
            .filter(|fixed| {
                window.map_or(true, |(start, end)| {
                    fixed.period_start >= start && fixed.period_end <= end
                })
            })
            .collect()
    }

    fn validate(fixed: &FixedExpense) -> ServiceResult<()> {
        if fixed.category.trim().is_empty() {
            return Err(ServiceError::Invalid(
                "Fixed expense category is required".into(),
            ));
        }
        if fixed.period_end < fixed.period_start {
            return Err(ServiceError::Invalid(
                "Period end must not precede period start".into(),
            ));
        }
        for item in &fixed.items {
            if item.name.trim().is_empty() {
                return Err(ServiceError::Invalid("Item name is required".into()));
            }
            if item.quantity <= 0.0 {
                return Err(ServiceError::Invalid(
                    "Item quantity must be positive".into(),
                ));
            }
            if item.unit_price < 0.0 {
                return Err(ServiceError::Invalid(
                    "Item unit price cannot be negative".into(),
                ));
            }
        }
        Ok(())
    }
}
