//! Persistence of quiz progress and results over a pluggable key-value store.
//!
//! Failures never reach callers of [`ResultStore`] or [`ProgressStore`]: they
//! are logged and surface as "nothing saved" or "nothing found".

use super::domain::{AnswerSet, PersonalityResult};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

pub const PROGRESS_KEY: &str = "prismPersona_progress";
pub const RESULTS_KEY: &str = "prismPersona_results";

/// String key-value capability, the analogue of browser local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored document is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .lock()
            .map(|entries| entries.contains_key(key))
            .unwrap_or(false)
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

fn read_json<S, T>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

fn write_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// In-progress answers as persisted between visits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedProgress {
    #[serde(default)]
    pub answers: AnswerSet,
    #[serde(default)]
    pub timestamp: i64,
}

pub struct ProgressStore<S> {
    store: Arc<S>,
}

impl<S> Clone for ProgressStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> ProgressStore<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns whether the progress document was written.
    pub fn save(&self, answers: &AnswerSet, timestamp: i64) -> bool {
        let progress = SavedProgress {
            answers: answers.clone(),
            timestamp,
        };
        match write_json(self.store.as_ref(), PROGRESS_KEY, &progress) {
            Ok(()) => true,
            Err(err) => {
                error!(error = %err, "failed to save quiz progress");
                false
            }
        }
    }

    pub fn load(&self) -> Option<SavedProgress> {
        read_json(self.store.as_ref(), PROGRESS_KEY).unwrap_or_else(|err| {
            warn!(error = %err, "failed to load saved progress");
            None
        })
    }

    pub fn clear(&self) {
        if let Err(err) = self.store.remove(PROGRESS_KEY) {
            error!(error = %err, "failed to clear quiz progress");
        }
    }
}

pub struct ResultStore<S> {
    store: Arc<S>,
}

impl<S> Clone for ResultStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> ResultStore<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Overwrites any previous result. Returns whether the write succeeded.
    pub fn save(&self, result: &PersonalityResult) -> bool {
        match write_json(self.store.as_ref(), RESULTS_KEY, result) {
            Ok(()) => {
                info!(
                    archetype = %result.archetype,
                    timestamp = result.timestamp,
                    "saved personality result"
                );
                true
            }
            Err(err) => {
                error!(error = %err, "failed to save personality result");
                false
            }
        }
    }

    pub fn load(&self) -> Option<PersonalityResult> {
        read_json(self.store.as_ref(), RESULTS_KEY).unwrap_or_else(|err| {
            error!(error = %err, "failed to load personality result");
            None
        })
    }

    pub fn clear(&self) {
        if let Err(err) = self.store.remove(RESULTS_KEY) {
            error!(error = %err, "failed to clear personality result");
        }
    }
}

/// Downloadable JSON document for a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultExport {
    pub file_name: String,
    pub contents: String,
}

impl ResultExport {
    pub fn from_result(result: &PersonalityResult) -> Result<Self, StoreError> {
        let date = DateTime::<Utc>::from_timestamp_millis(result.timestamp)
            .unwrap_or_else(Utc::now)
            .format("%Y-%m-%d");

        Ok(Self {
            file_name: format!("result_{date}.json"),
            contents: serde_json::to_string_pretty(result)?,
        })
    }

    pub fn write_to<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, StoreError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.contents)?;
        info!(path = %path.display(), "exported personality result");
        Ok(path)
    }
}
