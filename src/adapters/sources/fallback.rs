//! Fixed agenda list used when the records API cannot be reached

use crate::domain::models::AgendaItem;
use crate::error::Result;
use crate::ports::source::AgendaSourcePort;
use async_trait::async_trait;

const FALLBACK_ITEMS: [(&str, &str, &str); 6] = [
    ("item_101", "Public Works Funding 2026", "m_01"),
    ("item_102", "Zoning Board Expansion", "m_01"),
    ("item_103", "Metro Transit Safety Initiative", "m_02"),
    ("item_104", "Affordable Housing Mandate", "m_02"),
    ("item_105", "City Infrastructure Repair Bill", "m_02"),
    ("item_106", "New Library Construction", "m_03"),
];

/// Agenda source that always yields the same six items
#[derive(Debug, Clone, Default)]
pub struct FallbackSource;

impl FallbackSource {
    pub fn new() -> Self {
        Self
    }

    pub fn items() -> Vec<AgendaItem> {
        FALLBACK_ITEMS
            .iter()
            .map(|(id, title, meeting_id)| AgendaItem::new(*id, *title, *meeting_id))
            .collect()
    }
}

#[async_trait]
impl AgendaSourcePort for FallbackSource {
    async fn fetch_items(&self) -> Result<Vec<AgendaItem>> {
        Ok(Self::items())
    }

    fn source_name(&self) -> &str {
        "fallback"
    }
}
