//! Batch summarization with a placeholder fallback

use crate::domain::models::{AgendaItem, BatchSummary};
use crate::domain::PromptTemplates;
use crate::ports::llm::{LlmConfig, LlmServicePort};
use std::sync::Arc;

/// Turns a batch into summary text
///
/// Never fails from the caller's side: service errors and a missing
/// credential both produce `BatchSummary::placeholder`.
pub struct Summarizer {
    service: Option<Arc<dyn LlmServicePort>>,
    config: LlmConfig,
}

impl Summarizer {
    pub fn new(service: Arc<dyn LlmServicePort>, config: LlmConfig) -> Self {
        if !service.is_configured() {
            log::warn!(
                "{} service has no credential; summaries will be placeholders",
                service.provider_name()
            );
            return Self::disabled(config);
        }

        Self {
            service: Some(service),
            config,
        }
    }

    /// Summarizer that never calls out
    pub fn disabled(config: LlmConfig) -> Self {
        Self {
            service: None,
            config,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.service.is_some()
    }

    pub async fn summarize(&self, batch: &[AgendaItem]) -> BatchSummary {
        let Some(service) = &self.service else {
            return BatchSummary::placeholder(batch.len());
        };

        let prompt = PromptTemplates::for_batch(batch);
        match service.generate_text(&prompt, &self.config).await {
            Ok(text) => BatchSummary::generated(text),
            Err(e) => {
                log::warn!(
                    "{} summarization failed for batch of {}: {}",
                    service.provider_name(),
                    batch.len(),
                    e
                );
                BatchSummary::placeholder(batch.len())
            }
        }
    }
}
