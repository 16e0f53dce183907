//! Inventory configuration.

use std::path::PathBuf;

use crate::snapshot::JsonFileStore;
use crate::store::DEFAULT_LOW_STOCK_THRESHOLD;

/// Snapshot file used when nothing else is configured.
pub const DEFAULT_DATA_PATH: &str = "inventory.json";

/// Where the inventory lives on disk and what counts as low stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    pub data_path: PathBuf,
    pub low_stock_threshold: i64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl InventoryConfig {
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    pub fn snapshot_store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.data_path)
    }
}
