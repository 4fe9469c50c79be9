/// Domain layer - core business models
///
/// These models are storage-agnostic and represent core business entities.
pub mod models;
pub mod prompts;

pub use models::{
    AgendaItem, Batch, BatchSummary, ProcessedRecord, StoredSummary, SummaryOutcome,
};
pub use prompts::PromptTemplates;
