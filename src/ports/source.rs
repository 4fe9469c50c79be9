/// Agenda source port trait
///
/// Defines the interface for anything that can produce the current list of
/// agenda items.
/// Implementations: LIMS records API, fixed fallback list
use crate::domain::models::AgendaItem;
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for agenda data sources
#[async_trait]
pub trait AgendaSourcePort: Send + Sync {
    /// Fetch the current agenda items in source order
    async fn fetch_items(&self) -> Result<Vec<AgendaItem>>;

    /// Short name used in logs
    fn source_name(&self) -> &str;
}
