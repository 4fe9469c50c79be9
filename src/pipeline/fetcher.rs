//! Agenda fetching with a fallback source

use crate::adapters::sources::FallbackSource;
use crate::domain::models::AgendaItem;
use crate::error::Result;
use crate::ports::source::AgendaSourcePort;
use serde::Serialize;
use std::sync::Arc;

/// Which source produced a run's input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceOrigin {
    Live,
    Fallback,
}

impl std::fmt::Display for SourceOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceOrigin::Live => write!(f, "live"),
            SourceOrigin::Fallback => write!(f, "fallback"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub items: Vec<AgendaItem>,
    pub origin: SourceOrigin,
}

/// Fetches from a primary source and substitutes the fallback on any error
///
/// No retry is attempted.
pub struct ResilientFetcher {
    primary: Arc<dyn AgendaSourcePort>,
    fallback: Arc<dyn AgendaSourcePort>,
}

impl ResilientFetcher {
    pub fn new(primary: Arc<dyn AgendaSourcePort>, fallback: Arc<dyn AgendaSourcePort>) -> Self {
        Self { primary, fallback }
    }

    /// Pair `primary` with the built-in fixed agenda list
    pub fn with_default_fallback(primary: Arc<dyn AgendaSourcePort>) -> Self {
        Self::new(primary, Arc::new(FallbackSource::new()))
    }

    pub async fn fetch(&self) -> Result<FetchOutcome> {
        match self.primary.fetch_items().await {
            Ok(items) => Ok(FetchOutcome {
                items,
                origin: SourceOrigin::Live,
            }),
            Err(e) => {
                log::warn!(
                    "Fetching from {} failed ({}); using {} data",
                    self.primary.source_name(),
                    e,
                    self.fallback.source_name()
                );
                let items = self.fallback.fetch_items().await?;
                Ok(FetchOutcome {
                    items,
                    origin: SourceOrigin::Fallback,
                })
            }
        }
    }
}
