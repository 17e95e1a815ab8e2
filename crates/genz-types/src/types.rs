use serde::{Deserialize, Serialize};

/// One glossary entry as served by the dictionary API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRecord {
    pub term: String,
    pub definition: String,
    pub example: String,
    pub tags: Vec<String>,
}

impl TermRecord {
    pub fn new(
        term: impl Into<String>,
        definition: impl Into<String>,
        example: impl Into<String>,
        tags: &[&str],
    ) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            example: example.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Contiguous piece of text, tagged as matching the active query or not
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    pub text: String,
    pub is_match: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: false,
        }
    }

    pub fn matched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: true,
        }
    }
}

/// Display model of a single record for the current query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCard {
    pub term: Vec<Span>,
    pub definition: Vec<Span>,
    /// Example sentence wrapped in quotes, highlighted as a whole
    pub example: Vec<Span>,
    pub tags: Vec<String>,
    pub record: TermRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub cards: Vec<TermCard>,
}

impl SearchResults {
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TermRecord> {
        self.cards.get(index).map(|c| &c.record)
    }
}

/// Text handed to the platform share sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareMessage {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready {
        count: usize,
    },
    Failed {
        reason: String,
    },
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    QueryChanged(String),
    CopyEntry(usize),
    ShareEntry(usize),
    StoreLoaded(LoadStatus),
    ShowResults(SearchResults),
    StatusUpdate(LoadStatus),
    Notice(String),
    UiEvent(UiEvent),
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Help,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Bundled,
    Remote,
    File,
}

impl SourceKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bundled" | "static" => Some(SourceKind::Bundled),
            "remote" | "http" => Some(SourceKind::Remote),
            "file" => Some(SourceKind::File),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Bundled => "bundled",
            SourceKind::Remote => "remote",
            SourceKind::File => "file",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_record_requires_all_fields() {
        let ok = r#"{"term":"Flex","definition":"khoe khoang","example":"Flex nhẹ","tags":[]}"#;
        let record: TermRecord = serde_json::from_str(ok).unwrap();
        assert_eq!(record.term, "Flex");
        assert!(record.tags.is_empty());

        let missing = r#"{"term":"Flex","definition":"khoe khoang","tags":[]}"#;
        assert!(serde_json::from_str::<TermRecord>(missing).is_err());
    }

    #[test]
    fn test_span_serializes_camel_case() {
        let json = serde_json::to_string(&Span::matched("fl")).unwrap();
        assert_eq!(json, r#"{"text":"fl","isMatch":true}"#);
    }

    #[test]
    fn test_source_kind_parse() {
        assert_eq!(SourceKind::parse("Remote"), Some(SourceKind::Remote));
        assert_eq!(SourceKind::parse(" file "), Some(SourceKind::File));
        assert_eq!(SourceKind::parse("static"), Some(SourceKind::Bundled));
        assert_eq!(SourceKind::parse("ftp"), None);
    }
}
