//! Wiring of adapters into a runnable pipeline

use crate::adapters::services::llm::GoogleService;
use crate::adapters::sources::LimsSource;
use crate::adapters::storage::SqliteStorage;
use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::pipeline::{Orchestrator, ResilientFetcher, Summarizer};
use std::sync::Arc;

/// Open the item store, creating its tables if needed
pub fn initialize_store(config: &AppConfig) -> Result<Arc<SqliteStorage>> {
    if let Some(parent) = config.db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::StoreInit(e.to_string()))?;
        }
    }

    Ok(Arc::new(SqliteStorage::open(&config.db_path)?))
}

/// Summarizer backed by Gemini, or disabled when no key is configured
pub fn build_summarizer(config: &AppConfig) -> Result<Summarizer> {
    match config.api_key() {
        Some(key) => {
            let service = GoogleService::new(key.to_string())?;
            Ok(Summarizer::new(Arc::new(service), config.llm_config()))
        }
        None => {
            log::warn!("GEMINI_API_KEY is not set; batches will get placeholder summaries");
            Ok(Summarizer::disabled(config.llm_config()))
        }
    }
}

pub fn build_orchestrator(config: &AppConfig, store: Arc<SqliteStorage>) -> Result<Orchestrator> {
    config.validate()?;

    let live = LimsSource::new(config.api_url.clone(), config.fetch_timeout())?;
    let fetcher = ResilientFetcher::with_default_fallback(Arc::new(live));

    Ok(Orchestrator::new(
        fetcher,
        store,
        build_summarizer(config)?,
        config.pipeline_settings(),
    ))
}
