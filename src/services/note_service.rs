use uuid::Uuid;

use crate::domain::{Journal, Note};

use super::{ServiceError, ServiceResult};

pub struct NoteService;

impl NoteService {
    pub fn add(journal: &mut Journal, note: Note) -> ServiceResult<Uuid> {
        Self::validate(&note)?;
        let id = note.id;
        journal.notes.push(note);
        journal.touch();
        Ok(id)
    }

    pub fn edit(journal: &mut Journal, id: Uuid, changes: Note) -> ServiceResult<()> {
        Self::validate(&changes)?;
        let note = journal
            .note_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Note not found".into()))?;
        note.date = changes.date;
        note.note = changes.note;
        journal.touch();
        Ok(())
    }

    pub fn remove(journal: &mut Journal, id: Uuid) -> ServiceResult<()> {
        let before = journal.notes.len();
        journal.notes.retain(|note| note.id != id);
        if journal.notes.len() == before {
            return Err(ServiceError::Invalid("Note not found".into()));
        }
        journal.touch();
        Ok(())
    }

    /// Notes sorted by date descending, newest first.
    pub fn list(journal: &Journal) -> Vec<&Note> {
        let mut notes: Vec<&Note> = journal.notes.iter().collect();
        notes.sort_by(|a, b| b.date.cmp(&a.date));
        notes
    }

    fn validate(note: &Note) -> ServiceResult<()> {
        if note.note.trim().is_empty() {
            return Err(ServiceError::Invalid("Note text is required".into()));
        }
        Ok(())
    }
}
