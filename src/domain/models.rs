/// Domain models for Agenda Digest
///
/// These models represent core business entities and are storage-agnostic.
use serde::{Deserialize, Serialize};

/// A legislative matter on a council agenda.
///
/// Field names follow the records API wire format (`Id`, `Title`, `MeetingId`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgendaItem {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "MeetingId")]
    pub meeting_id: String,
}

impl AgendaItem {
    /// Creates a new agenda item
    pub fn new(id: impl Into<String>, title: impl Into<String>, meeting_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            meeting_id: meeting_id.into(),
        }
    }
}

/// An ordered group of agenda items summarized together
pub type Batch = Vec<AgendaItem>;

/// Whether a batch summary came from the generation service or the placeholder
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SummaryOutcome {
    Generated,
    Placeholder,
}

impl std::fmt::Display for SummaryOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryOutcome::Generated => write!(f, "generated"),
            SummaryOutcome::Placeholder => write!(f, "placeholder"),
        }
    }
}

impl std::str::FromStr for SummaryOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generated" => Ok(SummaryOutcome::Generated),
            "placeholder" => Ok(SummaryOutcome::Placeholder),
            other => Err(format!("unknown summary outcome: {}", other)),
        }
    }
}

/// Text returned by the summarizer for one batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchSummary {
    pub text: String,
    pub outcome: SummaryOutcome,
}

impl BatchSummary {
    pub fn generated(text: String) -> Self {
        Self {
            text,
            outcome: SummaryOutcome::Generated,
        }
    }

    /// Deterministic stand-in used when the generation service is unavailable
    pub fn placeholder(item_count: usize) -> Self {
        Self {
            text: format!("AI Summary placeholder for {} items", item_count),
            outcome: SummaryOutcome::Placeholder,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.outcome == SummaryOutcome::Placeholder
    }
}

/// An agenda item that has been summarized and committed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessedRecord {
    pub id: String,
    pub title: String,
    pub meeting_id: String,
    pub outcome: SummaryOutcome,
    pub batch_id: Option<i64>,
    pub processed_at: i64, // Unix timestamp
}

impl ProcessedRecord {
    /// Creates a record for an item committed now
    pub fn new(item: &AgendaItem, outcome: SummaryOutcome) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            meeting_id: item.meeting_id.clone(),
            outcome,
            batch_id: None,
            processed_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// A persisted batch summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSummary {
    pub id: Option<i64>,
    pub summary: String,
    pub outcome: SummaryOutcome,
    /// Ids this batch newly recorded; less than the batch size on overlap
    pub item_count: i64,
    pub created_at: i64,
}

impl StoredSummary {
    pub fn new(summary: &BatchSummary, item_count: usize) -> Self {
        Self {
            id: None,
            summary: summary.text.clone(),
            outcome: summary.outcome,
            item_count: item_count as i64,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}
