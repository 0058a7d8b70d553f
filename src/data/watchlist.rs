use {
    anyhow::{Context, Result},
    std::{
        fs::File,
        io::{BufReader, BufWriter},
        path::PathBuf,
    },
};

/// What a mutation did, so callers can phrase user feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Durable set of asset identifiers, insertion-ordered, no duplicates.
/// Injected into controllers so tests can swap in an in-memory fake.
pub trait WatchlistStore: Send + Sync {
    /// The persisted identifier list. Missing or corrupt storage degrades to
    /// empty; never raises.
    fn ids(&self) -> Vec<String>;

    /// Appends `id` unless already present. Every mutation rewrites the full
    /// persisted value.
    fn add(&self, id: &str) -> Result<AddOutcome>;

    /// Removes all occurrences of `id` (expected: 0 or 1).
    fn remove(&self, id: &str) -> Result<()>;
}

/// The watchlist as one JSON array of identifier strings on disk.
pub struct JsonFileWatchlist {
    path: PathBuf,
}

impl JsonFileWatchlist {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn save(&self, ids: &[String]) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("failed to create {}", self.path.display()))?;
        serde_json::to_writer(BufWriter::new(file), ids)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

impl WatchlistStore for JsonFileWatchlist {
    fn ids(&self) -> Vec<String> {
        let Ok(file) = File::open(&self.path) else {
            return Vec::new();
        };
        serde_json::from_reader(BufReader::new(file)).unwrap_or_default()
    }

    fn add(&self, id: &str) -> Result<AddOutcome> {
        let mut ids = self.ids();
        if ids.iter().any(|existing| existing == id) {
            return Ok(AddOutcome::AlreadyPresent);
        }
        ids.push(id.to_string());
        self.save(&ids)?;
        Ok(AddOutcome::Added)
    }

    fn remove(&self, id: &str) -> Result<()> {
        let mut ids = self.ids();
        ids.retain(|existing| existing != id);
        self.save(&ids)
    }
}

/// In-memory stand-in with the same contract, for tests.
#[cfg(test)]
pub struct InMemoryWatchlist {
    ids: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl InMemoryWatchlist {
    pub fn with_ids(ids: &[&str]) -> Self {
        Self {
            ids: std::sync::Mutex::new(ids.iter().map(|id| id.to_string()).collect()),
        }
    }
}

#[cfg(test)]
impl WatchlistStore for InMemoryWatchlist {
    fn ids(&self) -> Vec<String> {
        self.ids.lock().unwrap().clone()
    }

    fn add(&self, id: &str) -> Result<AddOutcome> {
        let mut ids = self.ids.lock().unwrap();
        if ids.iter().any(|existing| existing == id) {
            return Ok(AddOutcome::AlreadyPresent);
        }
        ids.push(id.to_string());
        Ok(AddOutcome::Added)
    }

    fn remove(&self, id: &str) -> Result<()> {
        self.ids.lock().unwrap().retain(|existing| existing != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::Path};

    struct TempStore {
        store: JsonFileWatchlist,
        path: PathBuf,
    }

    impl TempStore {
        fn new(tag: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "coin_deck_watchlist_{}_{}.json",
                tag,
                std::process::id()
            ));
            let _ = fs::remove_file(&path);
            Self {
                store: JsonFileWatchlist::new(&path),
                path,
            }
        }
    }

    impl Drop for TempStore {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.path);
        }
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let temp = TempStore::new("missing");
        assert!(temp.store.ids().is_empty());
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let temp = TempStore::new("corrupt");
        fs::write(&temp.path, "not json at all {{{").unwrap();
        assert!(temp.store.ids().is_empty());
    }

    #[test]
    fn add_round_trips_and_preserves_order() {
        let temp = TempStore::new("roundtrip");
        temp.store.add("bitcoin").unwrap();
        temp.store.add("ethereum").unwrap();
        assert_eq!(temp.store.ids(), vec!["bitcoin", "ethereum"]);
        assert!(Path::new(&temp.path).exists());
    }

    #[test]
    fn add_is_idempotent() {
        let temp = TempStore::new("idempotent");
        assert_eq!(temp.store.add("bitcoin").unwrap(), AddOutcome::Added);
        assert_eq!(
            temp.store.add("bitcoin").unwrap(),
            AddOutcome::AlreadyPresent
        );
        assert_eq!(temp.store.ids(), vec!["bitcoin"]);
    }

    #[test]
    fn remove_drops_the_id() {
        let temp = TempStore::new("remove");
        temp.store.add("bitcoin").unwrap();
        temp.store.add("ethereum").unwrap();
        temp.store.remove("bitcoin").unwrap();
        assert_eq!(temp.store.ids(), vec!["ethereum"]);

        // Removing an absent id is a quiet no-op.
        temp.store.remove("dogecoin").unwrap();
        assert_eq!(temp.store.ids(), vec!["ethereum"]);
    }

    #[test]
    fn in_memory_fake_honors_the_same_contract() {
        let store = InMemoryWatchlist::with_ids(&[]);
        assert_eq!(store.add("bitcoin").unwrap(), AddOutcome::Added);
        assert_eq!(store.add("bitcoin").unwrap(), AddOutcome::AlreadyPresent);
        store.add("ethereum").unwrap();
        assert_eq!(store.ids(), vec!["bitcoin", "ethereum"]);
        store.remove("bitcoin").unwrap();
        assert_eq!(store.ids(), vec!["ethereum"]);
    }
}
