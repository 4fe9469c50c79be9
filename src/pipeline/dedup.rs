//! Filtering of items that earlier runs already processed

use crate::domain::models::AgendaItem;
use crate::error::Result;
use crate::ports::storage::ItemStorePort;
use std::collections::HashSet;

/// Keep only items whose id is not yet in the store, in fetch order
///
/// Read-only with respect to the store.
pub async fn filter_unprocessed(
    items: Vec<AgendaItem>,
    store: &dyn ItemStorePort,
) -> Result<Vec<AgendaItem>> {
    let mut unprocessed = Vec::with_capacity(items.len());
    for item in items {
        if !store.is_processed(&item.id).await? {
            unprocessed.push(item);
        }
    }
    Ok(unprocessed)
}

/// Same filter against an in-memory snapshot of processed ids
pub fn retain_unseen(items: Vec<AgendaItem>, processed: &HashSet<String>) -> Vec<AgendaItem> {
    items
        .into_iter()
        .filter(|item| !processed.contains(&item.id))
        .collect()
}
