//! Committing summarized batches to the item store

use crate::domain::models::{AgendaItem, BatchSummary};
use crate::error::Result;
use crate::ports::storage::ItemStorePort;

/// What a commit changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitReceipt {
    /// Ids newly added to the store
    pub inserted: usize,
    /// Ids that were already present
    pub reaffirmed: usize,
}

/// Record every id of `batch` as processed, as one unit
pub async fn commit(
    batch: &[AgendaItem],
    summary: &BatchSummary,
    store: &dyn ItemStorePort,
) -> Result<CommitReceipt> {
    let inserted = store.commit_batch(batch, summary).await?;
    let receipt = CommitReceipt {
        inserted,
        reaffirmed: batch.len() - inserted,
    };

    if receipt.reaffirmed > 0 {
        log::debug!("{} ids in batch were already recorded", receipt.reaffirmed);
    }
    Ok(receipt)
}
