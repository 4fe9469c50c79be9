//! Scheduled ingestion of city council agenda items.
//!
//! Each run fetches the current agenda from the records API, skips items a
//! previous run already recorded, and summarizes the rest in small batches
//! through a text generation service before committing them to a local
//! SQLite store.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod ports;

pub use config::AppConfig;
pub use domain::{AgendaItem, Batch, BatchSummary, ProcessedRecord, SummaryOutcome};
pub use error::{AppError, Result};
pub use pipeline::{Orchestrator, PipelineSettings, RunReport};
