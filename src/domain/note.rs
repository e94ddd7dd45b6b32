//! Free-form dated notes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Dated, Identifiable, Owned};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDateTime,
    pub note: String,
}

impl Note {
    pub fn new(user_id: Uuid, date: NaiveDateTime, note: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            note: note.into(),
        }
    }
}

impl Identifiable for Note {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Owned for Note {
    fn user_id(&self) -> Uuid {
        self.user_id
    }
}

impl Dated for Note {
    fn date(&self) -> NaiveDateTime {
        self.date
    }
}
