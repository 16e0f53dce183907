//! Plain-text items report.

use std::io::{self, Write};

use tracing::info;

use crate::store::InventoryStore;

/// Write the items report: an `Items Report` header followed by one
/// `item -> qty` line per stocked item.
pub fn write_report<W: Write>(store: &InventoryStore, out: &mut W) -> io::Result<()> {
    info!(items = store.len(), "printing current inventory data");
    writeln!(out, "Items Report")?;
    for (item, qty) in store.iter() {
        writeln!(out, "{item} -> {qty}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityLog;

    #[test]
    fn report_lists_every_item_under_header() {
        let mut store = InventoryStore::new();
        let mut log = ActivityLog::new();
        store.add("banana", 5, &mut log).unwrap();
        store.add("apple", 7, &mut log).unwrap();

        let mut out = Vec::new();
        write_report(&store, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Items Report\nbanana -> 5\napple -> 7\n"
        );
    }

    #[test]
    fn empty_report_is_header_only() {
        let mut out = Vec::new();
        write_report(&InventoryStore::new(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Items Report\n");
    }
}
