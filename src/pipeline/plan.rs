//! I/O-free planning of a run
//!
//! Given the fetched items and a snapshot of processed ids, computes which
//! batches the orchestrator would summarize and commit.

use crate::domain::models::{AgendaItem, Batch};
use crate::error::Result;
use crate::pipeline::{batcher, dedup};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    /// Fetched items already present in the snapshot
    pub skipped: usize,
    pub batches: Vec<Batch>,
}

impl RunPlan {
    /// Ids the run would add to the store, batch by batch
    pub fn pending_ids(&self) -> Vec<Vec<&str>> {
        self.batches
            .iter()
            .map(|batch| batch.iter().map(|item| item.id.as_str()).collect())
            .collect()
    }

    pub fn item_count(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }

    /// Batch the items that survived deduplication out of `fetched`
    pub fn from_unprocessed(
        fetched: usize,
        unprocessed: Vec<AgendaItem>,
        batch_size: usize,
    ) -> Result<Self> {
        Ok(Self {
            skipped: fetched - unprocessed.len(),
            batches: batcher::partition(unprocessed, batch_size)?,
        })
    }
}

pub fn plan_run(
    fetched: Vec<AgendaItem>,
    processed: &HashSet<String>,
    batch_size: usize,
) -> Result<RunPlan> {
    let total = fetched.len();
    RunPlan::from_unprocessed(total, dedup::retain_unseen(fetched, processed), batch_size)
}
