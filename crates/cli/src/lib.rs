//! Demonstration walkthrough of the stock ledger.

use std::io::Write;

use anyhow::Context;

use stockledger_inventory::{ActivityLog, InventoryConfig, InventoryStore, write_report};

/// Run the demo: a short series of stock movements (two of them deliberately
/// invalid), a save/reload through the configured snapshot file, and the
/// items report.
///
/// Invalid movements are logged and skipped. Snapshot IO failures abort the
/// run and are returned.
pub fn run_demo<W: Write>(config: &InventoryConfig, out: &mut W) -> anyhow::Result<InventoryStore> {
    let mut store = InventoryStore::new();
    let mut log = ActivityLog::new();

    let _ = store.add("apple", 10, &mut log);
    let _ = store.add("banana", 5, &mut log);
    let _ = store.add("", 10, &mut log);
    let _ = store.remove("apple", 3);
    let _ = store.remove("orange", 1);

    writeln!(out, "Apple stock: {}", store.get_quantity("apple"))?;
    writeln!(
        out,
        "Low items: {:?}",
        store.list_low_stock(config.low_stock_threshold)
    )?;

    let snapshot = config.snapshot_store();
    store
        .save(&snapshot)
        .context("saving inventory snapshot")?;
    let store = InventoryStore::load(&snapshot).context("reloading inventory snapshot")?;

    write_report(&store, out)?;
    tracing::debug!(entries = log.len(), "demo finished");
    Ok(store)
}
