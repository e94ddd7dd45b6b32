pub mod json_backend;

use std::path::Path;

use uuid::Uuid;

use crate::{domain::Journal, errors::TrackerError};

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Abstraction over persistence backends capable of storing per-user journals.
pub trait StorageBackend: Send + Sync {
    fn save(&self, journal: &Journal) -> Result<()>;
    fn load(&self, user_id: Uuid) -> Result<Journal>;
    fn exists(&self, user_id: Uuid) -> bool;
    fn list_users(&self) -> Result<Vec<Uuid>>;
    fn delete(&self, user_id: Uuid) -> Result<()>;

    /// Loads the user's journal, or starts an empty one when none has been
    /// persisted yet. A missing journal is not an error; a corrupt or
    /// unreadable one is.
    fn load_or_create(&self, user_id: Uuid) -> Result<Journal> {
        if self.exists(user_id) {
            self.load(user_id)
        } else {
            Ok(Journal::new(user_id))
        }
    }

    /// Optional helpers for ad-hoc file operations. Default implementations
    /// forward to the JSON codec when not overridden.
    fn save_to_path(&self, journal: &Journal, path: &Path) -> Result<()> {
        json_backend::save_journal_to_path(journal, path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Journal> {
        json_backend::load_journal_from_path(path)
    }
}

pub use json_backend::JsonStorage;
