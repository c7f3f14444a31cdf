//! Best-score persistence behind a small read/write trait.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use crate::log;

pub trait HighScoreStore: Send {
    fn read_high_score(&self) -> Result<u32, String>;
    fn write_high_score(&mut self, score: u32) -> Result<(), String>;
}

pub type SharedHighScoreStore = Arc<Mutex<Box<dyn HighScoreStore>>>;

/// A beaten record that still has to reach its store. Writing may block on
/// file IO, so callers run `persist` away from the tick path.
pub struct PendingHighScore {
    store: SharedHighScoreStore,
    score: u32,
}

impl PendingHighScore {
    pub(crate) fn new(store: SharedHighScoreStore, score: u32) -> Self {
        Self { store, score }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn persist(self) {
        let result = self
            .store
            .lock()
            .map_err(|_| "High score store lock poisoned".to_string())
            .and_then(|mut store| store.write_high_score(self.score));

        match result {
            Ok(()) => log!("Persisted high score {}", self.score),
            Err(e) => log!("Failed to persist high score {}: {}", self.score, e),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u32,
}

impl Validate for HighScoreRecord {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Keeps the best score in a small YAML document on disk.
pub struct FileHighScoreStore {
    manager: ConfigManager<FileContentConfigProvider, HighScoreRecord, YamlConfigSerializer>,
}

impl FileHighScoreStore {
    pub fn new(file_path: &str) -> Self {
        Self {
            manager: ConfigManager::from_yaml_file(file_path),
        }
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn read_high_score(&self) -> Result<u32, String> {
        self.manager.get_config().map(|record| record.high_score)
    }

    fn write_high_score(&mut self, score: u32) -> Result<(), String> {
        self.manager.set_config(&HighScoreRecord { high_score: score })
    }
}

/// Process-local store. Clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHighScoreStore {
    inner: Arc<Mutex<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    high_score: u32,
    writes: usize,
}

impl InMemoryHighScoreStore {
    pub fn new(high_score: u32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(InMemoryState { high_score, writes: 0 })),
        }
    }

    pub fn writes(&self) -> usize {
        self.inner.lock().map(|s| s.writes).unwrap_or(0)
    }
}

impl HighScoreStore for InMemoryHighScoreStore {
    fn read_high_score(&self) -> Result<u32, String> {
        self.inner
            .lock()
            .map(|s| s.high_score)
            .map_err(|_| "High score lock poisoned".to_string())
    }

    fn write_high_score(&mut self, score: u32) -> Result<(), String> {
        let mut state = self
            .inner
            .lock()
            .map_err(|_| "High score lock poisoned".to_string())?;
        state.high_score = score;
        state.writes += 1;
        Ok(())
    }
}
