//! Domain types for day-level meal planning.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Dated, Identifiable, Owned};

/// Supported meal slots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        };
        f.write_str(label)
    }
}

/// One planned meal. Cost and calories are optional estimates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
}

impl Meal {
    pub fn new(meal_type: MealType, name: impl Into<String>) -> Self {
        Self {
            meal_type,
            name: name.into(),
            ingredients: Vec::new(),
            cost: None,
            calories: None,
        }
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_calories(mut self, calories: f64) -> Self {
        self.calories = Some(calories);
        self
    }
}

/// A day's plan holding zero or more meals, with derived totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealPlan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDateTime,
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub total_cost: f64,
    #[serde(default)]
    pub total_calories: f64,
}

impl MealPlan {
    pub fn new(user_id: Uuid, date: NaiveDateTime, meals: Vec<Meal>) -> Self {
        let mut plan = Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            meals,
            total_cost: 0.0,
            total_calories: 0.0,
        };
        plan.recompute_totals();
        plan
    }

    /// Re-derives cost and calorie totals from the meal entries.
    pub fn recompute_totals(&mut self) {
        self.total_cost = self.meals.iter().filter_map(|meal| meal.cost).sum();
        self.total_calories = self.meals.iter().filter_map(|meal| meal.calories).sum();
    }
}

impl Identifiable for MealPlan {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Owned for MealPlan {
    fn user_id(&self) -> Uuid {
        self.user_id
    }
}

impl Dated for MealPlan {
    fn date(&self) -> NaiveDateTime {
        self.date
    }
}
