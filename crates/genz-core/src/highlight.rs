use genz_types::Span;
use regex::{Regex, RegexBuilder};

use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// Longer queries skip the regex and use the plain scan
const REGEX_QUERY_LIMIT: usize = 1024;

/// Split `text` into plain and matching spans for `query`.
///
/// The query is matched literally and case-insensitively, left to right,
/// without overlaps. Concatenating the span texts always gives back `text`.
/// Spans alternate plain/match: no empty span is emitted at either end, but
/// two adjacent matches are separated by an empty plain span.
pub fn highlight(text: &str, query: &str) -> Vec<Span> {
    Highlighter::new(query).spans(text)
}

/// A query compiled once and applied to many fields
#[derive(Debug, Clone)]
pub struct Highlighter {
    matcher: Matcher,
}

#[derive(Debug, Clone)]
enum Matcher {
    Blank,
    Regex(Regex),
    Scan(Vec<char>),
}

impl Highlighter {
    pub fn new(query: &str) -> Self {
        let matcher = if DefaultPreprocessor.is_blank(query) {
            Matcher::Blank
        } else if query.len() > REGEX_QUERY_LIMIT {
            Matcher::Scan(query.chars().collect())
        } else {
            match literal_pattern(query) {
                Some(pattern) => Matcher::Regex(pattern),
                None => Matcher::Scan(query.chars().collect()),
            }
        };

        Self { matcher }
    }

    pub fn spans(&self, text: &str) -> Vec<Span> {
        let ranges = match &self.matcher {
            Matcher::Blank => return vec![Span::plain(text)],
            Matcher::Regex(pattern) => pattern.find_iter(text).map(|m| (m.start(), m.end())).collect(),
            Matcher::Scan(needle) => scan(text, needle),
        };

        let mut spans = Vec::new();
        let mut cursor = 0;

        for (start, end) in ranges {
            if start > cursor || !spans.is_empty() {
                spans.push(Span::plain(&text[cursor..start]));
            }
            spans.push(Span::matched(&text[start..end]));
            cursor = end;
        }

        if spans.is_empty() {
            return vec![Span::plain(text)];
        }

        if cursor < text.len() {
            spans.push(Span::plain(&text[cursor..]));
        }

        spans
    }
}

/// Case-insensitive regex matching `query` as literal text
fn literal_pattern(query: &str) -> Option<Regex> {
    match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            tracing::debug!("Scanning for query of {} bytes: {}", query.len(), e);
            None
        }
    }
}

/// Non-overlapping byte ranges of `needle` in `text`, compared a char at a
/// time ignoring case
fn scan(text: &str, needle: &[char]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start = 0;

    while start < text.len() {
        let rest = &text[start..];
        match match_len(rest, needle) {
            Some(len) => {
                ranges.push((start, start + len));
                start += len;
            }
            None => start += rest.chars().next().map_or(1, char::len_utf8),
        }
    }

    ranges
}

fn match_len(rest: &str, needle: &[char]) -> Option<usize> {
    let mut chars = rest.char_indices();
    for &want in needle {
        let (_, got) = chars.next()?;
        if got != want && !got.to_lowercase().eq(want.to_lowercase()) {
            return None;
        }
    }
    Some(chars.next().map_or(rest.len(), |(i, _)| i))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn texts(spans: &[Span]) -> Vec<(&str, bool)> {
        spans.iter().map(|s| (s.text.as_str(), s.is_match)).collect()
    }

    fn join(spans: &[Span]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_empty_query_is_single_plain_span() {
        assert_eq!(highlight("Flex", ""), vec![Span::plain("Flex")]);
        assert_eq!(highlight("Flex", "   "), vec![Span::plain("Flex")]);
    }

    #[test]
    fn test_no_occurrence() {
        assert_eq!(highlight("Trap", "xyz"), vec![Span::plain("Trap")]);
        assert_eq!(highlight("", "a"), vec![Span::plain("")]);
    }

    #[test]
    fn test_case_insensitive_keeps_source_casing() {
        let spans = highlight("Flex là khoe", "FL");
        assert_eq!(texts(&spans), vec![("Fl", true), ("ex là khoe", false)]);
    }

    #[test]
    fn test_vietnamese_case_folding() {
        let spans = highlight("Cạm Bẫy", "BẪY");
        assert_eq!(texts(&spans), vec![("Cạm ", false), ("Bẫy", true)]);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let spans = highlight("3.14 is pi", ".");
        assert_eq!(texts(&spans), vec![("3", false), (".", true), ("14 is pi", false)]);

        let spans = highlight("a+b (c) [d] a*b?", "(c)");
        assert_eq!(
            texts(&spans),
            vec![("a+b ", false), ("(c)", true), (" [d] a*b?", false)]
        );

        assert_eq!(highlight("abc", ".*"), vec![Span::plain("abc")]);
        assert_eq!(highlight("x^$|y", "^$|"), vec![
            Span::plain("x"),
            Span::matched("^$|"),
            Span::plain("y"),
        ]);
    }

    #[test]
    fn test_non_overlapping_matches() {
        let spans = highlight("aaa", "aa");
        assert_eq!(texts(&spans), vec![("aa", true), ("a", false)]);
    }

    #[test]
    fn test_adjacent_matches_are_separated() {
        let spans = highlight("aa", "a");
        assert_eq!(texts(&spans), vec![("a", true), ("", false), ("a", true)]);
    }

    #[test]
    fn test_multiple_matches_alternate() {
        let spans = highlight("flex, re-FLEX, flexing", "flex");
        assert_eq!(
            texts(&spans),
            vec![
                ("flex", true),
                (", re-", false),
                ("FLEX", true),
                (", ", false),
                ("flex", true),
                ("ing", false),
            ]
        );
    }

    #[test]
    fn test_long_query_is_still_highlighted() {
        let query = "ă".repeat(5_000);
        let text = format!("x{}y", query.to_uppercase());

        let spans = highlight(&text, &query);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0], Span::plain("x"));
        assert!(spans[1].is_match);
        assert_eq!(spans[1].text, query.to_uppercase());
        assert_eq!(spans[2], Span::plain("y"));
    }

    #[test]
    fn test_scan_follows_the_same_span_rules() {
        let long = "a".repeat(REGEX_QUERY_LIMIT + 1);
        let text = format!("{long}{}b", long.to_uppercase());
        let spans = highlight(&text, &long);
        assert_eq!(
            texts(&spans),
            vec![(long.as_str(), true), ("", false), (long.to_uppercase().as_str(), true), ("b", false)]
        );

        assert_eq!(scan("3.14", &['.']), vec![(1, 2)]);
        assert_eq!(scan("aaa", &['a', 'a']), vec![(0, 2)]);
        assert!(scan("Flex", &['x', 'y']).is_empty());
    }

    #[test]
    fn test_one_highlighter_for_many_fields() {
        let highlighter = Highlighter::new("FL");
        assert_eq!(highlighter.spans("Flex"), highlight("Flex", "FL"));
        assert_eq!(highlighter.spans("reflow"), highlight("reflow", "FL"));
        assert_eq!(Highlighter::new(" ").spans("Flex"), vec![Span::plain("Flex")]);
    }

    proptest! {
        #[test]
        fn prop_scan_agrees_with_regex(text in "[aAbBăĂ. ]{0,30}", query in "[aAbăĂ.]{1,3}") {
            let needle: Vec<char> = query.chars().collect();
            let Some(pattern) = literal_pattern(&query) else {
                return Ok(());
            };
            let by_regex: Vec<(usize, usize)> =
                pattern.find_iter(&text).map(|m| (m.start(), m.end())).collect();
            prop_assert_eq!(scan(&text, &needle), by_regex);
        }

        #[test]
        fn prop_spans_reconstruct_text(text in "\\PC{0,40}", query in "\\PC{0,5}") {
            let spans = highlight(&text, &query);
            prop_assert_eq!(join(&spans), text);
        }

        #[test]
        fn prop_spans_alternate(text in "[aAbB. ]{0,30}", query in "[aAb.]{1,3}") {
            let spans = highlight(&text, &query);
            for pair in spans.windows(2) {
                prop_assert_ne!(pair[0].is_match, pair[1].is_match);
            }
        }

        #[test]
        fn prop_matches_equal_query_ignoring_case(text in "[a-zA-Z ]{0,30}", query in "[a-zA-Z]{1,3}") {
            for span in highlight(&text, &query).iter().filter(|s| s.is_match) {
                prop_assert_eq!(span.text.to_lowercase(), query.to_lowercase());
            }
        }
    }
}
