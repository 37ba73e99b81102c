//! File-backed session store.
//!
//! Each key lives in its own JSON file under the data directory. Writes are
//! last-write-wins; reads of missing or corrupt files fall back to defaults.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::answers::AnswerMap;
use crate::config::StorageConfig;
use crate::error::{Result, VisionGuideError};
use crate::session::QuestionnaireSession;

pub const SESSION_FORMAT_VERSION: &str = "1.0";

const ANSWERS_FILE: &str = "answers.json";
const CURRENT_QUESTION_FILE: &str = "current_question.json";
const SESSION_ID_FILE: &str = "session_id.json";
const SESSION_FILE: &str = "session.json";
const HISTORY_FILE: &str = "sessions.json";

/// A persisted snapshot of one questionnaire session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSession {
    pub session_id: String,
    pub last_updated: DateTime<Utc>,
    pub version: String,
    #[serde(default)]
    pub answers: AnswerMap,
    #[serde(default)]
    pub current_question_index: usize,
}

impl SavedSession {
    pub fn to_session(&self) -> QuestionnaireSession {
        QuestionnaireSession::resume(self.answers.clone(), self.current_question_index)
    }
}

/// `session_<unix millis>_<9 random chars>`
pub fn new_session_id() -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("session_{}_{}", Utc::now().timestamp_millis(), &random[..9])
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
    history_limit: usize,
}

impl SessionStore {
    pub fn new(root: impl Into<PathBuf>, history_limit: usize) -> Self {
        Self {
            root: root.into(),
            history_limit: history_limit.max(1),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.resolved_data_dir(), config.history_limit)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let path = self.path(name);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Error reading {}: {}", path.display(), e);
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring corrupt {}: {}", path.display(), e);
                None
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        std::fs::create_dir_all(&self.root).map_err(|e| VisionGuideError::Storage {
            message: format!("cannot create {}: {}", self.root.display(), e),
        })?;
        let path = self.path(name);
        let tmp = self.path(&format!(".{name}.tmp"));
        std::fs::write(&tmp, serde_json::to_vec_pretty(value)?)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<()> {
        match std::fs::remove_file(self.path(name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn answers(&self) -> AnswerMap {
        self.read_json(ANSWERS_FILE).unwrap_or_default()
    }

    pub fn set_answers(&self, answers: &AnswerMap) -> Result<()> {
        self.write_json(ANSWERS_FILE, answers)
    }

    pub fn current_question_index(&self) -> usize {
        self.read_json(CURRENT_QUESTION_FILE).unwrap_or(0)
    }

    pub fn set_current_question_index(&self, index: usize) -> Result<()> {
        self.write_json(CURRENT_QUESTION_FILE, &index)
    }

    /// The active session id, created and stored on first use.
    pub fn session_id(&self) -> Result<String> {
        if let Some(id) = self.read_json::<String>(SESSION_ID_FILE) {
            return Ok(id);
        }
        let id = new_session_id();
        self.write_json(SESSION_ID_FILE, &id)?;
        tracing::debug!(session_id = %id, "created session id");
        Ok(id)
    }

    /// The in-progress session as last saved, if any.
    pub fn current_session(&self) -> Option<SavedSession> {
        self.read_json(SESSION_FILE)
    }

    /// Questionnaire state rebuilt from the stored answers and cursor.
    pub fn restore(&self) -> QuestionnaireSession {
        QuestionnaireSession::resume(self.answers(), self.current_question_index())
    }

    /// Stamp and persist `session`, upserting it into the bounded history.
    pub fn save_session(&self, session: &QuestionnaireSession) -> Result<SavedSession> {
        let saved = SavedSession {
            session_id: self.session_id()?,
            last_updated: Utc::now(),
            version: SESSION_FORMAT_VERSION.to_string(),
            answers: session.answers().clone(),
            current_question_index: session.current_index(),
        };

        self.set_answers(&saved.answers)?;
        self.set_current_question_index(saved.current_question_index)?;
        self.write_json(SESSION_FILE, &saved)?;

        let mut history = self.history();
        match history
            .iter_mut()
            .find(|s| s.session_id == saved.session_id)
        {
            Some(existing) => *existing = saved.clone(),
            None => history.push(saved.clone()),
        }
        if history.len() > self.history_limit {
            let excess = history.len() - self.history_limit;
            history.drain(..excess);
        }
        self.write_json(HISTORY_FILE, &history)?;

        tracing::info!(
            session_id = %saved.session_id,
            answers = saved.answers.len(),
            "session saved"
        );
        Ok(saved)
    }

    /// Make a stored session the active one. Returns `None` when no session
    /// with `session_id` is in the history.
    pub fn load_session(&self, session_id: &str) -> Result<Option<SavedSession>> {
        let Some(found) = self
            .history()
            .into_iter()
            .find(|s| s.session_id == session_id)
        else {
            return Ok(None);
        };
        self.set_answers(&found.answers)?;
        self.set_current_question_index(found.current_question_index)?;
        self.write_json(SESSION_ID_FILE, &found.session_id)?;
        Ok(Some(found))
    }

    /// History in storage order (oldest first).
    fn history(&self) -> Vec<SavedSession> {
        self.read_json(HISTORY_FILE).unwrap_or_default()
    }

    /// Saved sessions, most recently updated first.
    pub fn saved_sessions(&self) -> Vec<SavedSession> {
        let mut sessions = self.history();
        sessions.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
        sessions
    }

    /// Forget the active session. The history is kept.
    pub fn clear_all(&self) -> Result<()> {
        self.remove(ANSWERS_FILE)?;
        self.remove(CURRENT_QUESTION_FILE)?;
        self.remove(SESSION_ID_FILE)?;
        self.remove(SESSION_FILE)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str, limit: usize) -> SessionStore {
        let dir = std::env::temp_dir().join(format!("vision-guide-{}-{}", tag, Uuid::new_v4()));
        SessionStore::new(dir, limit)
    }

    #[test]
    fn test_session_id_format_and_stability() {
        let id = new_session_id();
        let parts: Vec<&str> = id.splitn(3, '_').collect();
        assert_eq!(parts[0], "session");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);

        let store = temp_store("id", 10);
        let first = store.session_id().unwrap();
        assert_eq!(store.session_id().unwrap(), first);
        let _ = std::fs::remove_dir_all(store.root());
    }

    #[test]
    fn test_missing_files_read_as_defaults() {
        let store = temp_store("empty", 10);
        assert!(store.answers().is_empty());
        assert_eq!(store.current_question_index(), 0);
        assert!(store.saved_sessions().is_empty());
        assert!(store.current_session().is_none());
        assert!(store.clear_all().is_ok());
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let store = temp_store("corrupt", 10);
        std::fs::create_dir_all(store.root()).unwrap();
        std::fs::write(store.root().join(ANSWERS_FILE), "{not json").unwrap();
        assert!(store.answers().is_empty());
        let _ = std::fs::remove_dir_all(store.root());
    }

    #[test]
    fn test_save_upserts_same_session() {
        let store = temp_store("upsert", 10);
        let session = QuestionnaireSession::new().with_answer("time_1", "mixed");
        let first = store.save_session(&session).unwrap();
        let second = store
            .save_session(&session.with_answer("time_2", 6).next())
            .unwrap();

        assert_eq!(first.session_id, second.session_id);
        assert_eq!(second.version, "1.0");
        let sessions = store.saved_sessions();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].answers.len(), 2);
        assert_eq!(store.current_question_index(), 1);
        assert_eq!(store.current_session().unwrap(), second);
        let _ = std::fs::remove_dir_all(store.root());
    }
}
