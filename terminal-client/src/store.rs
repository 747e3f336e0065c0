use common::{FileScoreStore, MemoryScoreStore, ScoreStore};

/// Score storage picked at startup: a YAML file, or memory when persistence is off.
pub enum ClientScoreStore {
    File(FileScoreStore),
    Memory(MemoryScoreStore),
}

impl ScoreStore for ClientScoreStore {
    fn read(&self) -> Result<Option<u32>, String> {
        match self {
            ClientScoreStore::File(store) => store.read(),
            ClientScoreStore::Memory(store) => store.read(),
        }
    }

    fn write(&self, value: u32) -> Result<(), String> {
        match self {
            ClientScoreStore::File(store) => store.write(value),
            ClientScoreStore::Memory(store) => store.write(value),
        }
    }
}
