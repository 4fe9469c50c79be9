//! Minneapolis LIMS records API adapter
//!
//! Implements AgendaSourcePort over a single time-bounded GET request.

use crate::domain::models::AgendaItem;
use crate::error::{AppError, Result};
use crate::ports::source::AgendaSourcePort;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

pub const LIMS_API_URL: &str = "https://lims.minneapolismn.gov/api/Meetings";

/// Live agenda source backed by the LIMS HTTP API
pub struct LimsSource {
    client: Client,
    url: String,
}

impl LimsSource {
    /// Create a source for `url`; every request is bounded by `timeout`
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl AgendaSourcePort for LimsSource {
    async fn fetch_items(&self) -> Result<Vec<AgendaItem>> {
        log::info!("Fetching agenda items from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AppError::Source(format!("Request to records API failed: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::Source(format!(
                "Records API returned status {}",
                status
            )));
        }

        let items: Vec<AgendaItem> = response
            .json()
            .await
            .map_err(|e| AppError::Source(format!("Failed to parse records response: {}", e)))?;

        Ok(items)
    }

    fn source_name(&self) -> &str {
        "lims"
    }
}
