/// Item store port trait
///
/// Defines the interface for the durable record of processed agenda items.
/// Implementation: SQLite adapter
use crate::domain::models::{AgendaItem, BatchSummary, ProcessedRecord, StoredSummary, SummaryOutcome};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;

/// Port trait for item store operations
///
/// The identifier space is a set: records are only ever added, never
/// updated or deleted.
#[async_trait]
pub trait ItemStorePort: Send + Sync {
    /// Check whether an item identifier has already been processed
    async fn is_processed(&self, id: &str) -> Result<bool>;

    /// Commit a summarized batch as one unit
    ///
    /// Returns the number of identifiers newly added. Identifiers already
    /// present are left untouched.
    async fn commit_batch(&self, batch: &[AgendaItem], summary: &BatchSummary) -> Result<usize>;

    /// Snapshot of every processed identifier
    async fn processed_ids(&self) -> Result<HashSet<String>>;

    /// List processed records, optionally filtered by summary outcome
    async fn list_processed(&self, outcome: Option<SummaryOutcome>) -> Result<Vec<ProcessedRecord>>;

    /// List stored batch summaries, newest first
    async fn list_summaries(&self, limit: Option<u32>) -> Result<Vec<StoredSummary>>;
}
