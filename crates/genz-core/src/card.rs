use genz_types::{ShareMessage, TermCard, TermRecord};

use crate::highlight::Highlighter;

/// Highlight every displayed field of `record` with an already compiled query
pub fn build_card(record: &TermRecord, highlighter: &Highlighter) -> TermCard {
    TermCard {
        term: highlighter.spans(&record.term),
        definition: highlighter.spans(&record.definition),
        example: highlighter.spans(&format!("\"{}\"", record.example)),
        tags: record.tags.clone(),
        record: record.clone(),
    }
}

/// Text put on the clipboard for a record
pub fn clipboard_text(record: &TermRecord) -> String {
    format!("{}: {}", record.term, record.definition)
}

pub fn share_message(record: &TermRecord) -> ShareMessage {
    ShareMessage {
        title: format!("Gen Z Dictionary: {}", record.term),
        message: format!(
            "Ê biết từ \"{}\" là gì hông? Nghĩa là: {} đó. \nVí dụ: \"{}\"",
            record.term, record.definition, record.example
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flex() -> TermRecord {
        TermRecord::new("Flex", "khoe khoang", "Flex nhẹ cái xe", &["hành động", "mạng xã hội"])
    }

    #[test]
    fn test_clipboard_text() {
        assert_eq!(clipboard_text(&flex()), "Flex: khoe khoang");
    }

    #[test]
    fn test_share_message() {
        let share = share_message(&flex());
        assert_eq!(share.title, "Gen Z Dictionary: Flex");
        assert_eq!(
            share.message,
            "Ê biết từ \"Flex\" là gì hông? Nghĩa là: khoe khoang đó. \nVí dụ: \"Flex nhẹ cái xe\""
        );
    }

    #[test]
    fn test_card_highlights_quoted_example() {
        let card = build_card(&flex(), &Highlighter::new("flex"));
        let example: Vec<(&str, bool)> = card
            .example
            .iter()
            .map(|s| (s.text.as_str(), s.is_match))
            .collect();
        assert_eq!(example, vec![("\"", false), ("Flex", true), (" nhẹ cái xe\"", false)]);
        assert_eq!(card.tags, vec!["hành động", "mạng xã hội"]);
        assert_eq!(card.definition.len(), 1);
    }
}
