//! Mock implementations for testing

use crate::domain::models::{
    AgendaItem, BatchSummary, ProcessedRecord, StoredSummary, SummaryOutcome,
};
use crate::error::{AppError, Result};
use crate::ports::source::AgendaSourcePort;
use crate::ports::storage::ItemStorePort;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Mock item store implementation for testing
#[derive(Clone, Default)]
pub struct MockItemStore {
    records: Arc<Mutex<Vec<ProcessedRecord>>>,
    summaries: Arc<Mutex<Vec<StoredSummary>>>,
    commit_calls: Arc<Mutex<usize>>,
    fail_on_commit: Option<usize>,
}

impl MockItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given identifiers
    pub fn with_ids(ids: &[&str]) -> Self {
        let store = Self::default();
        {
            let mut records = store.records.lock().unwrap();
            for id in ids {
                records.push(ProcessedRecord::new(
                    &AgendaItem::new(*id, "seeded", "m_00"),
                    SummaryOutcome::Generated,
                ));
            }
        }
        store
    }

    /// Make the n-th call to `commit_batch` (1-based) fail
    pub fn failing_on_commit(mut self, n: usize) -> Self {
        self.fail_on_commit = Some(n);
        self
    }

    pub fn commit_calls(&self) -> usize {
        *self.commit_calls.lock().unwrap()
    }

    pub fn ids(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.id.clone())
            .collect()
    }

    pub fn summaries(&self) -> Vec<StoredSummary> {
        self.summaries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ItemStorePort for MockItemStore {
    async fn is_processed(&self, id: &str) -> Result<bool> {
        Ok(self.records.lock().unwrap().iter().any(|r| r.id == id))
    }

    async fn commit_batch(&self, batch: &[AgendaItem], summary: &BatchSummary) -> Result<usize> {
        let call = {
            let mut calls = self.commit_calls.lock().unwrap();
            *calls += 1;
            *calls
        };
        if self.fail_on_commit == Some(call) {
            return Err(AppError::Other(format!("simulated write failure on commit {}", call)));
        }

        let mut records = self.records.lock().unwrap();
        let mut summaries = self.summaries.lock().unwrap();
        let batch_id = summaries.len() as i64 + 1;

        let mut inserted = 0;
        for item in batch {
            if records.iter().any(|r| r.id == item.id) {
                continue;
            }
            let mut record = ProcessedRecord::new(item, summary.outcome);
            record.batch_id = Some(batch_id);
            records.push(record);
            inserted += 1;
        }

        if inserted > 0 {
            let mut stored = StoredSummary::new(summary, inserted);
            stored.id = Some(batch_id);
            summaries.push(stored);
        }
        Ok(inserted)
    }

    async fn processed_ids(&self) -> Result<HashSet<String>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.id.clone())
            .collect())
    }

    async fn list_processed(&self, outcome: Option<SummaryOutcome>) -> Result<Vec<ProcessedRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| outcome.map_or(true, |o| r.outcome == o))
            .cloned()
            .collect())
    }

    async fn list_summaries(&self, limit: Option<u32>) -> Result<Vec<StoredSummary>> {
        let summaries = self.summaries.lock().unwrap();
        let limit = limit.map_or(usize::MAX, |l| l as usize);
        Ok(summaries.iter().rev().take(limit).cloned().collect())
    }
}

/// Deterministic agenda source for tests
#[derive(Clone)]
pub struct FakeSource {
    response: std::result::Result<Vec<AgendaItem>, String>,
    calls: Arc<Mutex<usize>>,
}

impl FakeSource {
    pub fn items(items: Vec<AgendaItem>) -> Self {
        Self {
            response: Ok(items),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl AgendaSourcePort for FakeSource {
    async fn fetch_items(&self) -> Result<Vec<AgendaItem>> {
        *self.calls.lock().unwrap() += 1;
        self.response.clone().map_err(AppError::Source)
    }

    fn source_name(&self) -> &str {
        "fake"
    }
}

/// `count` items with ids `item_001..` spread over meetings of three
pub fn sample_items(count: usize) -> Vec<AgendaItem> {
    (1..=count)
        .map(|n| {
            AgendaItem::new(
                format!("item_{:03}", n),
                format!("Agenda item number {}", n),
                format!("m_{:02}", (n - 1) / 3 + 1),
            )
        })
        .collect()
}
