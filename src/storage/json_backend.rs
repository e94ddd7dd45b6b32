//! JSON persistence: one pretty-printed journal file per user under the
//! application data directory, written atomically.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use uuid::Uuid;

use crate::{
    domain::Journal,
    errors::TrackerError,
    utils::{app_data_dir, ensure_dir, journals_dir_in},
};

use super::{Result, StorageBackend};

const JOURNAL_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
    journals_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        let journals_dir = journals_dir_in(&root);
        ensure_dir(&journals_dir)?;
        Ok(Self { root, journals_dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn journal_path(&self, user_id: Uuid) -> PathBuf {
        self.journals_dir
            .join(format!("{}.{}", user_id, JOURNAL_EXTENSION))
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, journal: &Journal) -> Result<()> {
        let path = self.journal_path(journal.user_id);
        save_journal_to_path(journal, &path)?;
        tracing::debug!(user = %journal.user_id, path = %path.display(), "journal saved");
        Ok(())
    }

    fn load(&self, user_id: Uuid) -> Result<Journal> {
        let path = self.journal_path(user_id);
        if !path.exists() {
            return Err(TrackerError::NotFound(format!(
                "journal for user `{}` not found",
                user_id
            )));
        }
        load_journal_from_path(&path)
    }

    fn exists(&self, user_id: Uuid) -> bool {
        self.journal_path(user_id).exists()
    }

    fn list_users(&self) -> Result<Vec<Uuid>> {
        if !self.journals_dir.exists() {
            return Ok(Vec::new());
        }
        let mut users = Vec::new();
        for entry in fs::read_dir(&self.journals_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(JOURNAL_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                if let Ok(user_id) = stem.parse::<Uuid>() {
                    users.push(user_id);
                }
            }
        }
        users.sort();
        Ok(users)
    }

    fn delete(&self, user_id: Uuid) -> Result<()> {
        let path = self.journal_path(user_id);
        if !path.exists() {
            return Err(TrackerError::NotFound(format!(
                "journal for user `{}` not found",
                user_id
            )));
        }
        fs::remove_file(path)?;
        Ok(())
    }
}

pub fn save_journal_to_path(journal: &Journal, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(journal)?;
    let tmp = tmp_path(path);
    write_all(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn load_journal_from_path(path: &Path) -> Result<Journal> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
