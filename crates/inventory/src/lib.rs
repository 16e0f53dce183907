//! Inventory ledger: stock levels per item, with JSON snapshot persistence.
//!
//! The in-memory [`InventoryStore`] is the only source of truth for quantities.
//! Persistence goes through the [`SnapshotStore`] seam so the store itself never
//! touches the filesystem directly.

pub mod activity;
pub mod config;
pub mod report;
pub mod snapshot;
pub mod store;

pub use activity::{ActivityEntry, ActivityLog};
pub use config::InventoryConfig;
pub use report::write_report;
pub use snapshot::{InMemorySnapshotStore, JsonFileStore, PersistenceError, SnapshotStore};
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore};
