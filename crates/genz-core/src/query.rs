use genz_types::{SearchResults, TermRecord};

use crate::card::build_card;
use crate::collation::Collation;
use crate::highlight::Highlighter;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// Filter and sort over a term list.
///
/// Stateless apart from the collation, so it is fine to call on every
/// keystroke.
pub struct QueryEngine<C: Collation> {
    collation: C,
}

impl<C: Collation> QueryEngine<C> {
    pub fn new(collation: C) -> Self {
        Self { collation }
    }

    /// Records whose term or definition contains `query` (case-folded),
    /// sorted by term. Records with equal terms keep their input order.
    pub fn search<'a>(&self, terms: &'a [TermRecord], query: &str) -> Vec<&'a TermRecord> {
        let p = DefaultPreprocessor;
        let needle = p.fold(query);

        let mut hits: Vec<&TermRecord> = terms
            .iter()
            .filter(|r| p.fold(&r.term).contains(&needle) || p.fold(&r.definition).contains(&needle))
            .collect();

        // sort_by is stable
        hits.sort_by(|a, b| self.collation.compare(&a.term, &b.term));

        tracing::debug!(
            "search {:?} [{}]: {} of {} records",
            query,
            self.collation.name(),
            hits.len(),
            terms.len()
        );

        hits
    }

    /// Same as [`search`](Self::search), with every hit turned into a
    /// highlighted card for display.
    pub fn search_cards(&self, terms: &[TermRecord], query: &str) -> SearchResults {
        let highlighter = Highlighter::new(query);
        let cards = self
            .search(terms, query)
            .into_iter()
            .map(|record| build_card(record, &highlighter))
            .collect();

        SearchResults {
            query: query.to_string(),
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::collation::CodePointCollation;

    fn engine() -> QueryEngine<CodePointCollation> {
        QueryEngine::new(CodePointCollation)
    }

    fn store() -> Vec<TermRecord> {
        vec![
            TermRecord::new("Trap", "cạm bẫy", "Coi chừng trap", &["tình yêu"]),
            TermRecord::new("Flex", "khoe khoang", "Flex nhẹ cái xe mới", &["hành động"]),
        ]
    }

    fn terms<'a>(hits: &[&'a TermRecord]) -> Vec<&'a str> {
        hits.iter().map(|r| r.term.as_str()).collect()
    }

    #[test]
    fn test_prefix_of_term() {
        let store = store();
        assert_eq!(terms(&engine().search(&store, "fl")), vec!["Flex"]);
    }

    #[test]
    fn test_matches_both_sorted() {
        let store = store();
        assert_eq!(terms(&engine().search(&store, "a")), vec!["Flex", "Trap"]);
    }

    #[test]
    fn test_matches_definition_case_insensitive() {
        let store = store();
        assert_eq!(terms(&engine().search(&store, "CẠM")), vec!["Trap"]);
    }

    #[test]
    fn test_example_and_tags_are_not_searched() {
        let store = store();
        assert!(engine().search(&store, "xe mới").is_empty());
        assert!(engine().search(&store, "tình yêu").is_empty());
    }

    #[test]
    fn test_empty_query_returns_everything_sorted() {
        let store = store();
        assert_eq!(terms(&engine().search(&store, "")), vec!["Flex", "Trap"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let store = store();
        assert!(engine().search(&store, "zzz").is_empty());
        assert!(engine().search(&[], "a").is_empty());
    }

    #[test]
    fn test_equal_terms_keep_input_order() {
        let store = vec![
            TermRecord::new("Slay", "first", "", &[]),
            TermRecord::new("Ao", "x", "", &[]),
            TermRecord::new("Slay", "second", "", &[]),
        ];
        let hits = engine().search(&store, "");
        let defs: Vec<&str> = hits.iter().map(|r| r.definition.as_str()).collect();
        assert_eq!(defs, vec!["x", "first", "second"]);
    }

    #[test]
    fn test_search_cards_counts_and_highlights() {
        let store = store();
        let results = engine().search_cards(&store, "fl");
        assert_eq!(results.count(), 1);
        assert_eq!(results.query, "fl");
        let card = &results.cards[0];
        assert!(card.term[0].is_match);
        assert_eq!(card.term[0].text, "Fl");
        assert_eq!(results.get(0).map(|r| r.term.as_str()), Some("Flex"));
    }

    fn arb_record() -> impl Strategy<Value = TermRecord> {
        ("[a-dA-D]{1,6}", "[a-d ]{0,10}").prop_map(|(term, def)| TermRecord {
            term,
            definition: def,
            example: String::new(),
            tags: vec![],
        })
    }

    proptest! {
        #[test]
        fn prop_every_hit_contains_query(store in prop::collection::vec(arb_record(), 0..20), query in "[a-dA-D]{0,2}") {
            let q = query.to_lowercase();
            for hit in engine().search(&store, &query) {
                prop_assert!(hit.term.to_lowercase().contains(&q) || hit.definition.to_lowercase().contains(&q));
            }
        }

        #[test]
        fn prop_empty_query_keeps_all(store in prop::collection::vec(arb_record(), 0..20)) {
            let hits = engine().search(&store, "");
            prop_assert_eq!(hits.len(), store.len());
            for pair in hits.windows(2) {
                prop_assert!(pair[0].term <= pair[1].term);
            }
        }
    }
}
