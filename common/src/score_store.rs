use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigSerializer, ContentProvider, FileContentProvider, YamlConfigSerializer};

/// Durable home of the best score. Errors are reported, never fatal:
/// the engine decides how to fall back.
pub trait ScoreStore {
    /// `Ok(None)` when no score has been stored yet.
    fn read(&self) -> Result<Option<u32>, String>;
    fn write(&self, value: u32) -> Result<(), String>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct BestScoreRecord {
    best_score: u32,
}

/// Keeps the best score as a one-field YAML document.
pub struct FileScoreStore<TProvider = FileContentProvider>
where
    TProvider: ContentProvider,
{
    provider: TProvider,
    serializer: YamlConfigSerializer,
}

impl FileScoreStore<FileContentProvider> {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentProvider::new(file_path))
    }
}

impl<TProvider> FileScoreStore<TProvider>
where
    TProvider: ContentProvider,
{
    pub fn new(provider: TProvider) -> Self {
        Self {
            provider,
            serializer: YamlConfigSerializer::new(),
        }
    }
}

impl<TProvider> ScoreStore for FileScoreStore<TProvider>
where
    TProvider: ContentProvider,
{
    fn read(&self) -> Result<Option<u32>, String> {
        let Some(content) = self.provider.get_content()? else {
            return Ok(None);
        };
        let record: BestScoreRecord = self.serializer.deserialize(&content)?;
        Ok(Some(record.best_score))
    }

    fn write(&self, value: u32) -> Result<(), String> {
        let content = self.serializer.serialize(&BestScoreRecord { best_score: value })?;
        self.provider.set_content(&content)
    }
}

#[derive(Debug, Default)]
struct MemoryScore {
    value: Option<u32>,
    writes: Vec<u32>,
}

/// In-process store. Clones share state, so a test can keep a handle
/// while the engine owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryScoreStore {
    inner: Arc<Mutex<MemoryScore>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        let store = Self::default();
        if let Ok(mut inner) = store.inner.lock() {
            inner.value = Some(value);
        }
        store
    }

    pub fn value(&self) -> Option<u32> {
        self.inner.lock().ok().and_then(|inner| inner.value)
    }

    /// Every value passed to `write`, oldest first.
    pub fn writes(&self) -> Vec<u32> {
        self.inner
            .lock()
            .map(|inner| inner.writes.clone())
            .unwrap_or_default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn read(&self) -> Result<Option<u32>, String> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| "Score store lock poisoned".to_string())?;
        Ok(inner.value)
    }

    fn write(&self, value: u32) -> Result<(), String> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| "Score store lock poisoned".to_string())?;
        inner.value = Some(value);
        inner.writes.push(value);
        Ok(())
    }
}
