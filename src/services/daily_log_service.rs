use uuid::Uuid;

use crate::domain::{DailyLog, Journal};

use super::{ServiceError, ServiceResult};

pub struct DailyLogService;

impl DailyLogService {
    /// Adds a log, rejecting a second entry for the same calendar date.
    pub fn add(journal: &mut Journal, log: DailyLog) -> ServiceResult<Uuid> {
        Self::validate(&log)?;
        if journal.daily_logs.iter().any(|existing| existing.date == log.date) {
            return Err(ServiceError::Invalid(format!(
                "A daily log for {} already exists",
                log.date
            )));
        }
        let id = log.id;
        journal.daily_logs.push(log);
        journal.touch();
        Ok(id)
    }

    pub fn edit(journal: &mut Journal, id: Uuid, changes: DailyLog) -> ServiceResult<()> {
        Self::validate(&changes)?;
        if journal
            .daily_logs
            .iter()
            .any(|existing| existing.date == changes.date && existing.id != id)
        {
            return Err(ServiceError::Invalid(format!(
                "A daily log for {} already exists",
                changes.date
            )));
        }
        let log = journal
            .daily_log_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Daily log not found".into()))?;
        log.date = changes.date;
        log.mood = changes.mood;
        log.note = changes.note;
        log.energy_level = changes.energy_level;
        log.productivity = changes.productivity;
        log.sleep_hours = changes.sleep_hours;
        log.important_events = changes.important_events;
        log.goals = changes.goals;
        log.reflection = changes.reflection;
        journal.touch();
        Ok(())
    }

    pub fn remove(journal: &mut Journal, id: Uuid) -> ServiceResult<()> {
        let before = journal.daily_logs.len();
        journal.daily_logs.retain(|log| log.id != id);
        if journal.daily_logs.len() == before {
            return Err(ServiceError::Invalid("Daily log not found".into()));
        }
        journal.touch();
        Ok(())
    }

    /// Logs sorted by date descending, newest first.
    pub fn list(journal: &Journal) -> Vec<&DailyLog> {
        let mut logs: Vec<&DailyLog> = journal.daily_logs.iter().collect();
        logs.sort_by(|a, b| b.date.cmp(&a.date));
        logs
    }

    fn validate(log: &DailyLog) -> ServiceResult<()> {
        if let Some(level) = log.energy_level {
            if !(1..=10).contains(&level) {
                return Err(ServiceError::Invalid(
                    "Energy level must be between 1 and 10".into(),
                ));
            }
        }
        if let Some(level) = log.productivity {
            if !(1..=10).contains(&level) {
                return Err(ServiceError::Invalid(
                    "Productivity must be between 1 and 10".into(),
                ));
            }
        }
        if let Some(hours) = log.sleep_hours {
            if !(0.0..=24.0).contains(&hours) {
                return Err(ServiceError::Invalid(
                    "Sleep hours must be between 0 and 24".into(),
                ));
            }
        }
        Ok(())
    }
}
