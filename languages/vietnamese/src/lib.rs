pub mod alphabet;
pub mod collation;
pub mod loader;

pub use collation::VietnameseCollation;
pub use loader::BundledTerms;

use genz_core::QueryEngine;
use genz_types::{SearchResults, TermRecord};

/// Query engine sorting by Vietnamese collation
pub fn engine() -> QueryEngine<VietnameseCollation> {
    QueryEngine::new(VietnameseCollation)
}

/// Filter `terms` by `query` and sort the hits the Vietnamese way
pub fn search<'a>(terms: &'a [TermRecord], query: &str) -> Vec<&'a TermRecord> {
    engine().search(terms, query)
}

pub fn search_cards(terms: &[TermRecord], query: &str) -> SearchResults {
    engine().search_cards(terms, query)
}
