//! In-memory stock ledger.

use std::collections::HashMap;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{error, info, warn};

use stockledger_core::{DomainError, DomainResult, ItemName};

use crate::activity::ActivityLog;
use crate::snapshot::{self, PersistenceError, SnapshotStore};

/// Items strictly below this quantity are reported as low stock by default.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Stock level per item.
///
/// Single owner, single writer: mutators take `&mut self` and there is no
/// internal locking. Hosts that share a store across threads must wrap it in
/// their own lock.
///
/// Items iterate (and are saved) in the order they were first stocked. Equality
/// compares quantities only.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    quantities: HashMap<ItemName, i64>,
    order: Vec<ItemName>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` units of `item`, creating the entry at zero first if needed.
    ///
    /// An invalid item name leaves the store untouched; the failure is logged
    /// as a warning and returned, and callers are free to ignore it. Negative
    /// quantities are accepted as-is. On success the new quantity is returned
    /// and a line is appended to `log`.
    pub fn add(&mut self, item: &str, qty: i64, log: &mut ActivityLog) -> DomainResult<i64> {
        let name = match ItemName::new(item) {
            Ok(name) => name,
            Err(err) => {
                warn!(item, qty, error = %err, "invalid input for add; inventory unchanged");
                return Err(err);
            }
        };

        let current = self.get_quantity(item);
        let Some(updated) = current.checked_add(qty) else {
            let err = DomainError::validation(format!("adding {qty} to {item} overflows"));
            warn!(item, qty, error = %err, "invalid input for add; inventory unchanged");
            return Err(err);
        };

        self.insert(name, updated);
        log.record(format!("Added {qty} of {item}"));
        info!(item, qty, "added {qty} of {item}");
        Ok(updated)
    }

    /// Remove `qty` units of `item`.
    ///
    /// The entry is deleted once its quantity drops to zero or below, so
    /// [`get_quantity`](Self::get_quantity) reads 0 afterwards. Returns the
    /// remaining quantity.
    ///
    /// Failures are non-fatal and leave the store untouched:
    /// - absent item: [`DomainError::NotFound`], logged as a warning
    /// - negative quantity: [`DomainError::InvalidQuantity`], logged as an error
    pub fn remove(&mut self, item: &str, qty: i64) -> DomainResult<i64> {
        let Some(current) = self.quantities.get_mut(item) else {
            let err = DomainError::not_found(item);
            warn!(item, qty, "{err}");
            return Err(err);
        };

        if qty < 0 {
            let err = DomainError::invalid_quantity(qty);
            error!(item, qty, "{err}");
            return Err(err);
        }

        *current = current.saturating_sub(qty);
        let remaining = *current;
        if remaining <= 0 {
            self.quantities.remove(item);
            self.order.retain(|name| name.as_str() != item);
        }

        info!(item, qty, "removed {qty} of {item}");
        Ok(remaining.max(0))
    }

    /// Current quantity of `item`, or 0 when it is not stocked.
    pub fn get_quantity(&self, item: &str) -> i64 {
        self.quantities.get(item).copied().unwrap_or(0)
    }

    /// Items whose quantity is strictly below `threshold`, in iteration order.
    pub fn list_low_stock(&self, threshold: i64) -> Vec<&str> {
        self.iter()
            .filter(|(_, qty)| *qty < threshold)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.quantities.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, i64)> + '_ {
        self.order
            .iter()
            .filter_map(|name| self.quantities.get(name).map(|qty| (name, *qty)))
    }

    /// Set `name` to `qty`; a new name goes to the end of the order.
    fn insert(&mut self, name: ItemName, qty: i64) {
        if let Some(existing) = self.quantities.get_mut(&name) {
            *existing = qty;
            return;
        }
        self.order.push(name.clone());
        self.quantities.insert(name, qty);
    }

    /// Load a store from `source`.
    ///
    /// A source that holds nothing yet yields an empty store (logged as a
    /// warning). Read and parse failures are returned to the caller.
    pub fn load(source: &impl SnapshotStore) -> Result<Self, PersistenceError> {
        let location = source.location();
        let Some(contents) = source.read()? else {
            warn!(path = %location, "snapshot {location} not found; starting with empty inventory");
            return Ok(Self::new());
        };

        let store: Self = snapshot::decode(&location, &contents)?;
        info!(path = %location, items = store.len(), "inventory data loaded");
        Ok(store)
    }

    /// Write the whole store to `destination` as a JSON object.
    pub fn save(&self, destination: &impl SnapshotStore) -> Result<(), PersistenceError> {
        let location = destination.location();
        let contents = snapshot::encode(self)?;
        destination.write(&contents)?;
        info!(path = %location, items = self.len(), "inventory data saved to {location}");
        Ok(())
    }
}

impl PartialEq for InventoryStore {
    fn eq(&self, other: &Self) -> bool {
        self.quantities == other.quantities
    }
}

impl Eq for InventoryStore {}

impl FromIterator<(ItemName, i64)> for InventoryStore {
    fn from_iter<T: IntoIterator<Item = (ItemName, i64)>>(iter: T) -> Self {
        let mut store = Self::new();
        for (name, qty) in iter {
            store.insert(name, qty);
        }
        store
    }
}

impl Serialize for InventoryStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for InventoryStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StoreVisitor;

        impl<'de> Visitor<'de> for StoreVisitor {
            type Value = InventoryStore;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("an object mapping item names to integer quantities")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut store = InventoryStore::new();
                while let Some((name, qty)) = map.next_entry::<ItemName, i64>()? {
                    store.insert(name, qty);
                }
                Ok(store)
            }
        }

        deserializer.deserialize_map(StoreVisitor)
    }
}
