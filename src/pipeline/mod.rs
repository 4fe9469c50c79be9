//! Agenda ingestion pipeline
//!
//! One run fetches agenda items, drops those already recorded, splits the
//! rest into batches and, one batch at a time, summarizes and commits it.
//! Scheduling repeated runs is left to the caller (cron, CI schedule).

pub mod batcher;
pub mod dedup;
pub mod fetcher;
pub mod persister;
pub mod plan;
pub mod summarizer;

pub use batcher::{partition, DEFAULT_BATCH_SIZE};
pub use dedup::filter_unprocessed;
pub use fetcher::{FetchOutcome, ResilientFetcher, SourceOrigin};
pub use persister::CommitReceipt;
pub use plan::{plan_run, RunPlan};
pub use summarizer::Summarizer;

use crate::domain::models::BatchSummary;
use crate::error::{AppError, Result};
use crate::ports::storage::ItemStorePort;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_PACE: Duration = Duration::from_secs(2);

/// Stages of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Init,
    Fetched,
    Deduped,
    Batching,
    Summarizing,
    Persisting,
    Done,
}

#[derive(Debug, Clone, Copy)]
pub struct PipelineSettings {
    pub batch_size: usize,
    /// Pause between consecutive batches
    pub pace: Duration,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            pace: DEFAULT_PACE,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub item_ids: Vec<String>,
    pub summary: BatchSummary,
    pub inserted: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub origin: SourceOrigin,
    pub fetched: usize,
    pub skipped: usize,
    pub batches: Vec<BatchReport>,
    pub states: Vec<RunState>,
}

impl RunReport {
    pub fn placeholder_batches(&self) -> usize {
        self.batches
            .iter()
            .filter(|b| b.summary.is_placeholder())
            .count()
    }
}

/// Sequences fetch, dedup, batching and the summarize/commit loop
pub struct Orchestrator {
    fetcher: ResilientFetcher,
    store: Arc<dyn ItemStorePort>,
    summarizer: Summarizer,
    settings: PipelineSettings,
}

impl Orchestrator {
    /// `store` must already be open with its schema in place
    pub fn new(
        fetcher: ResilientFetcher,
        store: Arc<dyn ItemStorePort>,
        summarizer: Summarizer,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            fetcher,
            store,
            summarizer,
            settings,
        }
    }

    fn advance(states: &mut Vec<RunState>, next: RunState) {
        if let Some(previous) = states.last() {
            log::debug!("pipeline state {:?} -> {:?}", previous, next);
        }
        states.push(next);
    }

    /// Execute one run to completion
    ///
    /// A failed commit aborts the run; batches committed before it stay
    /// committed and the rest are picked up again by the next run.
    pub async fn run(&self) -> Result<RunReport> {
        let mut states = vec![RunState::Init];

        let fetched = self.fetcher.fetch().await?;
        Self::advance(&mut states, RunState::Fetched);
        let fetched_count = fetched.items.len();
        log::info!(
            "Fetched {} agenda items ({} source)",
            fetched_count,
            fetched.origin
        );

        let unprocessed = filter_unprocessed(fetched.items, self.store.as_ref()).await?;
        Self::advance(&mut states, RunState::Deduped);

        let plan = RunPlan::from_unprocessed(fetched_count, unprocessed, self.settings.batch_size)?;
        let skipped = plan.skipped;
        log::info!(
            "Found {} unprocessed items ({} already recorded)",
            plan.item_count(),
            skipped
        );

        let total = plan.batches.len();
        let mut reports = Vec::with_capacity(total);

        for (index, batch) in plan.batches.into_iter().enumerate() {
            Self::advance(&mut states, RunState::Batching);
            log::info!(
                "Processing batch {}/{} of {} items",
                index + 1,
                total,
                batch.len()
            );

            Self::advance(&mut states, RunState::Summarizing);
            let summary = self.summarizer.summarize(&batch).await;
            log::info!("Batch summary:\n{}", summary.text);

            Self::advance(&mut states, RunState::Persisting);
            let receipt = persister::commit(&batch, &summary, self.store.as_ref())
                .await
                .map_err(|e| {
                    log::error!(
                        "Commit of batch {}/{} failed; stopping run: {}",
                        index + 1,
                        total,
                        e
                    );
                    AppError::Persistence {
                        batch: index + 1,
                        source: Box::new(e),
                    }
                })?;

            reports.push(BatchReport {
                item_ids: batch.iter().map(|item| item.id.clone()).collect(),
                summary,
                inserted: receipt.inserted,
            });

            if index + 1 < total && !self.settings.pace.is_zero() {
                tokio::time::sleep(self.settings.pace).await;
            }
        }

        Self::advance(&mut states, RunState::Done);

        Ok(RunReport {
            origin: fetched.origin,
            fetched: fetched_count,
            skipped,
            batches: reports,
            states,
        })
    }
}
