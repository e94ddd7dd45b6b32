use uuid::Uuid;

use crate::domain::{Journal, MealPlan};

use super::{ServiceError, ServiceResult};

pub struct MealPlanService;

impl MealPlanService {
    /// Adds a plan, re-deriving its cost and calorie totals.
    pub fn add(journal: &mut Journal, mut plan: MealPlan) -> ServiceResult<Uuid> {
        Self::validate(&plan)?;
        plan.recompute_totals();
        let id = plan.id;
        journal.meal_plans.push(plan);
        journal.touch();
        Ok(id)
    }

    pub fn edit(journal: &mut Journal, id: Uuid, changes: MealPlan) -> ServiceResult<()> {
        Self::validate(&changes)?;
        let plan = journal
            .meal_plan_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Meal plan not found".into()))?;
        plan.date = changes.date;
        plan.meals = changes.meals;
        plan.recompute_totals();
        journal.touch();
        Ok(())
    }

    pub fn remove(journal: &mut Journal, id: Uuid) -> ServiceResult<()> {
        let before = journal.meal_plans.len();
        journal.meal_plans.retain(|plan| plan.id != id);
        if journal.meal_plans.len() == before {
            return Err(ServiceError::Invalid("Meal plan not found".into()));
        }
        journal.touch();
        Ok(())
    }

    /// Plans sorted by date descending, newest first.
    pub fn list(journal: &Journal) -> Vec<&MealPlan> {
        let mut plans: Vec<&MealPlan> = journal.meal_plans.iter().collect();
        plans.sort_by(|a, b| b.date.cmp(&a.date));
        plans
    }

    fn validate(plan: &MealPlan) -> ServiceResult<()> {
        for meal in &plan.meals {
            if meal.name.trim().is_empty() {
                return Err(ServiceError::Invalid("Meal name is required".into()));
            }
        }
        Ok(())
    }
}
