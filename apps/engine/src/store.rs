//! Persistence collaborators.
//!
//! One résumé slot and one session slot, behind traits so the engine-facing
//! code never sees the storage mechanism. The file-backed implementation is
//! injected where it is needed; there is no module-wide store.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;

const RESUME_SLOT: &str = "resume.json";
const SESSION_SLOT: &str = "session.json";

/// The signed-in flag and email pair kept between screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub authenticated: bool,
    pub email: String,
}

/// Single-slot résumé persistence: one record per session, replaced
/// wholesale on save.
pub trait ResumeStore {
    fn save(&self, doc: &ResumeDocument) -> Result<(), AppError>;
    fn load(&self) -> Result<Option<ResumeDocument>, AppError>;
}

pub trait SessionStore {
    fn set_session(&self, session: &SessionState) -> Result<(), AppError>;
    fn get_session(&self) -> Result<Option<SessionState>, AppError>;
    fn clear_session(&self) -> Result<(), AppError>;
}

/// File-backed store: one directory, one JSON file per slot.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(JsonFileStore { dir })
    }

    fn read_slot<T: DeserializeOwned>(&self, slot: &str) -> Result<Option<T>, AppError> {
        let path = self.dir.join(slot);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn write_slot<T: Serialize>(&self, slot: &str, value: &T) -> Result<(), AppError> {
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(self.dir.join(slot), raw)?;
        debug!(slot, "wrote store slot");
        Ok(())
    }
}

impl ResumeStore for JsonFileStore {
    fn save(&self, doc: &ResumeDocument) -> Result<(), AppError> {
        self.write_slot(RESUME_SLOT, doc)
    }

    fn load(&self) -> Result<Option<ResumeDocument>, AppError> {
        self.read_slot(RESUME_SLOT)
    }
}

impl SessionStore for JsonFileStore {
    fn set_session(&self, session: &SessionState) -> Result<(), AppError> {
        self.write_slot(SESSION_SLOT, session)
    }

    fn get_session(&self) -> Result<Option<SessionState>, AppError> {
        self.read_slot(SESSION_SLOT)
    }

    fn clear_session(&self) -> Result<(), AppError> {
        let path = self.dir.join(SESSION_SLOT);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_store(dir: &tempfile::TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path()).unwrap()
    }

    #[test]
    fn test_resume_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        assert!(store.load().unwrap().is_none());

        let doc = ResumeDocument::sample();
        store.save(&doc).unwrap();
        assert_eq!(store.load().unwrap(), Some(doc));
    }

    #[test]
    fn test_save_replaces_the_slot_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        let mut doc = ResumeDocument::sample();
        store.save(&doc).unwrap();

        doc.personal.name = "Jane Roe".to_string();
        doc.projects.clear();
        store.save(&doc).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.personal.name, "Jane Roe");
        assert!(loaded.projects.is_empty());
    }

    #[test]
    fn test_session_set_get_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        assert!(store.get_session().unwrap().is_none());

        let session = SessionState {
            authenticated: true,
            email: "demo@resumade.com".to_string(),
        };
        store.set_session(&session).unwrap();
        assert_eq!(store.get_session().unwrap(), Some(session));

        store.clear_session().unwrap();
        assert!(store.get_session().unwrap().is_none());
        // Clearing an already-empty slot is fine.
        store.clear_session().unwrap();
    }

    #[test]
    fn test_corrupt_slot_surfaces_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        fs::write(dir.path().join(RESUME_SLOT), "{not json").unwrap();
        assert!(matches!(store.load(), Err(AppError::Serde(_))));
    }
}
