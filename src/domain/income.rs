//! Domain types representing income records.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Dated, Identifiable, Owned};

/// A single income entry attributed to a source and category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Income {
    pub id: Uuid,
    pub user_id: Uuid,
    pub source: String,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub category: IncomeCategory,
    #[serde(default)]
    pub icon: String,
}

impl Income {
    pub fn new(
        user_id: Uuid,
        source: impl Into<String>,
        amount: f64,
        date: NaiveDateTime,
        category: IncomeCategory,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            source: source.into(),
            amount,
            date,
            category,
            icon: String::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

impl Identifiable for Income {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Owned for Income {
    fn user_id(&self) -> Uuid {
        self.user_id
    }
}

impl Dated for Income {
    fn date(&self) -> NaiveDateTime {
        self.date
    }
}

/// Closed set of income categories. Serialized labels match the historical
/// wire format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IncomeCategory {
    #[serde(rename = "Active Income")]
    Active,
    #[serde(rename = "Passive Income")]
    Passive,
    #[serde(rename = "Investment Income")]
    Investment,
    #[serde(rename = "Business Income")]
    Business,
    Other,
}

impl fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IncomeCategory::Active => "Active Income",
            IncomeCategory::Passive => "Passive Income",
            IncomeCategory::Investment => "Investment Income",
            IncomeCategory::Business => "Business Income",
            IncomeCategory::Other => "Other",
        };
        f.write_str(label)
    }
}
