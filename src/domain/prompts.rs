//! Prompt templates for agenda summarization

use crate::domain::models::AgendaItem;

/// Default prompt templates
pub struct PromptTemplates;

impl PromptTemplates {
    /// Instruction line placed above the item titles
    pub fn agenda_summary() -> &'static str {
        "Summarize the following Minneapolis City Council agenda items concisely:"
    }

    /// Build the single prompt sent for one batch
    pub fn for_batch(batch: &[AgendaItem]) -> String {
        let mut prompt = String::from(Self::agenda_summary());
        prompt.push('\n');
        for item in batch {
            let title = if item.title.trim().is_empty() {
                "Unknown"
            } else {
                item.title.as_str()
            };
            prompt.push_str("- ");
            prompt.push_str(title);
            prompt.push('\n');
        }
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_prompt_lists_titles_in_order() {
        let batch = vec![
            AgendaItem::new("a", "Zoning Board Expansion", "m_01"),
            AgendaItem::new("b", "New Library Construction", "m_03"),
        ];
        let prompt = PromptTemplates::for_batch(&batch);
        assert_eq!(
            prompt,
            "Summarize the following Minneapolis City Council agenda items concisely:\n\
             - Zoning Board Expansion\n\
             - New Library Construction\n"
        );
    }

    #[test]
    fn test_blank_title_marked_unknown() {
        let batch = vec![AgendaItem::new("a", "  ", "m_01")];
        assert!(PromptTemplates::for_batch(&batch).ends_with("- Unknown\n"));
    }
}
