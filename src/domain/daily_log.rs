//! Domain types for daily mood and productivity logs.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Identifiable, Owned};

/// Mood recorded with a daily log.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Sad,
    Tired,
    Stressed,
    Excited,
    Calm,
    Anxious,
    Motivated,
    #[default]
    Neutral,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Tired => "Tired",
            Mood::Stressed => "Stressed",
            Mood::Excited => "Excited",
            Mood::Calm => "Calm",
            Mood::Anxious => "Anxious",
            Mood::Motivated => "Motivated",
            Mood::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

/// One journal entry per calendar day. Uniqueness of `date` is enforced by
/// the daily-log service on write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub productivity: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    #[serde(default)]
    pub important_events: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DailyLog {
    pub fn new(user_id: Uuid, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            mood: Mood::default(),
            note: None,
            energy_level: None,
            productivity: None,
            sleep_hours: None,
            important_events: Vec::new(),
            goals: Vec::new(),
            reflection: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl Identifiable for DailyLog {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Owned for DailyLog {
    fn user_id(&self) -> Uuid {
        self.user_id
    }
}
