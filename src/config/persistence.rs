//! File persistence configuration

pub struct PersistenceConfig {
    /// Path of the JSON file holding the watchlist identifier array
    pub watchlist_path: &'static str,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    watchlist_path: "watchlist.json",
};
