use crate::adapters::sources::LIMS_API_URL;
use crate::error::{AppError, Result};
use crate::pipeline::{PipelineSettings, DEFAULT_BATCH_SIZE};
use crate::ports::llm::LlmConfig;
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration, from command-line flags or the environment
#[derive(Args, Debug, Clone)]
pub struct AppConfig {
    /// SQLite file recording processed agenda items
    #[arg(long, env = "AGENDA_DIGEST_DB", default_value = "agenda_digest.db", global = true)]
    pub db_path: PathBuf,

    /// Records API endpoint returning agenda items
    #[arg(long, env = "LIMS_API_URL", default_value = LIMS_API_URL, global = true)]
    pub api_url: String,

    /// Timeout for the records API request, in seconds
    #[arg(long, default_value = "10", global = true)]
    pub fetch_timeout_secs: u64,

    /// Items per summarization request
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE, global = true)]
    pub batch_size: usize,

    /// Pause between batches, in milliseconds
    #[arg(long, default_value = "2000", global = true)]
    pub pace_ms: u64,

    /// Gemini model name
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-3-pro", global = true)]
    pub model: String,

    /// Gemini API key; summaries are placeholders without it
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    pub gemini_api_key: Option<String>,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(AppError::Config("batch size must be at least 1".to_string()));
        }

        if self.fetch_timeout_secs == 0 {
            return Err(AppError::Config(
                "fetch timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            batch_size: self.batch_size,
            pace: Duration::from_millis(self.pace_ms),
        }
    }

    pub fn llm_config(&self) -> LlmConfig {
        LlmConfig {
            model: self.model.clone(),
            ..LlmConfig::default()
        }
    }

    /// The configured API key, if it is non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("agenda_digest.db"),
            api_url: LIMS_API_URL.to_string(),
            fetch_timeout_secs: 10,
            batch_size: DEFAULT_BATCH_SIZE,
            pace_ms: 2000,
            model: "gemini-3-pro".to_string(),
            gemini_api_key: None,
        }
    }
}
