use uuid::Uuid;

use crate::domain::{Income, Journal};

use super::{ServiceError, ServiceResult};

pub struct IncomeService;

impl IncomeService {
    pub fn add(journal: &mut Journal, income: Income) -> ServiceResult<Uuid> {
        Self::validate(&income)?;
        let id = income.id;
        journal.incomes.push(income);
        journal.touch();
        Ok(id)
    }

    pub fn edit(journal: &mut Journal, id: Uuid, changes: Income) -> ServiceResult<()> {
        Self::validate(&changes)?;
        let income = journal
            .income_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Income not found".into()))?;
        income.source = changes.source;
        income.amount = changes.amount;
        income.date = changes.date;
        income.category = changes.category;
        income.icon = changes.icon;
        journal.touch();
        Ok(())
    }

    pub fn remove(journal: &mut Journal, id: Uuid) -> ServiceResult<()> {
        let before = journal.incomes.len();
        journal.incomes.retain(|income| income.id != id);
        if journal.incomes.len() == before {
            return Err(ServiceError::Invalid("Income not found".into()));
        }
        journal.touch();
        Ok(())
    }

    /// Incomes sorted by date descending, newest first.
    pub fn list(journal: &Journal) -> Vec<&Income> {
        let mut incomes: Vec<&Income> = journal.incomes.iter().collect();
        incomes.sort_by(|a, b| b.date.cmp(&a.date));
        incomes
    }

    fn validate(income: &Income) -> ServiceResult<()> {
        if income.source.trim().is_empty() {
            return Err(ServiceError::Invalid("Income source is required".into()));
        }
        if income.amount <= 0.0 {
            return Err(ServiceError::Invalid("Income amount must be positive".into()));
        }
        Ok(())
    }
}
