use std::sync::Arc;

use genz_types::TermRecord;

use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// Immutable snapshot of the loaded term list.
///
/// Cloning is cheap and shares the records. A reload builds a new store and
/// replaces the old one as a whole.
#[derive(Debug, Clone)]
pub struct TermStore {
    records: Arc<[TermRecord]>,
}

impl Default for TermStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl TermStore {
    pub fn empty() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }

    pub fn from_records(records: Vec<TermRecord>) -> Self {
        Self {
            records: Arc::from(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in load order
    pub fn records(&self) -> &[TermRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &TermRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&TermRecord> {
        self.records.get(index)
    }

    /// First record whose headword equals `term`, ignoring case
    pub fn find_term(&self, term: &str) -> Option<&TermRecord> {
        let p = DefaultPreprocessor;
        let wanted = p.fold(term.trim());
        self.records.iter().find(|r| p.fold(&r.term) == wanted)
    }
}

impl From<Vec<TermRecord>> for TermStore {
    fn from(records: Vec<TermRecord>) -> Self {
        Self::from_records(records)
    }
}
