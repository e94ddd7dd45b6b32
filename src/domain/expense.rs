//! Domain types representing expense records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Dated, Identifiable, Owned};

/// A single expense entry. The category is a free-text label grouped as-is
/// by the dashboard analytics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub category: String,
    #[serde(default)]
    pub icon: String,
}

impl Expense {
    pub fn new(
        user_id: Uuid,
        title: impl Into<String>,
        amount: f64,
        date: NaiveDateTime,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            amount,
            date,
            category: category.into(),
            icon: String::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Owned for Expense {
    fn user_id(&self) -> Uuid {
        self.user_id
    }
}

impl Dated for Expense {
    fn date(&self) -> NaiveDateTime {
        self.date
    }
}
