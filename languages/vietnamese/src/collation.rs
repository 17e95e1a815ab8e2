use std::cmp::Ordering;

use genz_core::Collation;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::alphabet::{Modifier, Tone, letter_index};

/// Vietnamese collation after the CLDR `vi` tailoring.
///
/// Compared level by level over the whole string:
/// 1. base letters in alphabet order (ă, â, đ, ê, ô, ơ, ư are letters of
///    their own), with whitespace < punctuation < digits < letters < other
///    scripts;
/// 2. tone marks: level < grave < hook above < tilde < acute < dot below,
///    then any other diacritic;
/// 3. case, lowercase first.
///
/// Strings that still tie, such as ones differing only in a stack of
/// non-Vietnamese marks, are ordered by their full NFD code points, so only
/// canonically equivalent strings compare equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct VietnameseCollation;

impl Collation for VietnameseCollation {
    fn name(&self) -> &'static str {
        "vi"
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        let left = collation_elements(a);
        let right = collation_elements(b);

        compare_level(&left, &right, |e| e.primary)
            .then_with(|| compare_level(&left, &right, |e| e.secondary))
            .then_with(|| compare_level(&left, &right, |e| e.tertiary))
            .then_with(|| compare_level(&left, &right, |e| e.base))
            .then_with(|| a.nfd().cmp(b.nfd()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Primary {
    Space,
    Punctuation(u32),
    Digit(u32),
    Letter(u8),
    Other(u32),
}

/// Tones first, diacritics foreign to Vietnamese after every tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Secondary {
    foreign: u32,
    tone: Tone,
}

#[derive(Debug, Clone, Copy)]
struct Element {
    primary: Primary,
    secondary: Secondary,
    tertiary: u8,
    /// Raw base character, last-resort tie break
    base: char,
}

fn compare_level<K: Ord>(
    left: &[Element],
    right: &[Element],
    key: impl Fn(&Element) -> K,
) -> Ordering {
    left.iter().map(&key).cmp(right.iter().map(&key))
}

fn collation_elements(text: &str) -> Vec<Element> {
    let mut elements = Vec::with_capacity(text.len());
    let mut chars = text.nfd().peekable();

    while let Some(base) = chars.next() {
        let mut marks = Vec::new();
        while let Some(&mark) = chars.peek() {
            if !is_combining_mark(mark) {
                break;
            }
            marks.push(mark);
            chars.next();
        }
        elements.push(element(base, &marks));
    }

    elements
}

fn element(base: char, marks: &[char]) -> Element {
    let lower = base.to_lowercase().next().unwrap_or(base);
    let mut modifier = None;
    let mut tone = Tone::Level;
    let mut foreign = 0;

    for &mark in marks {
        if modifier.is_none()
            && let Some(m) = Modifier::from_mark(mark)
            && letter_index(lower, Some(m)).is_some()
        {
            modifier = Some(m);
            continue;
        }

        if tone == Tone::Level
            && let Some(t) = Tone::from_mark(mark)
        {
            tone = t;
            continue;
        }

        foreign = foreign.max(mark as u32);
    }

    Element {
        primary: primary(base, lower, modifier),
        secondary: Secondary { foreign, tone },
        tertiary: u8::from(base.is_uppercase()),
        base,
    }
}

fn primary(base: char, lower: char, modifier: Option<Modifier>) -> Primary {
    if base.is_whitespace() {
        Primary::Space
    } else if let Some(index) = letter_index(lower, modifier) {
        Primary::Letter(index)
    } else if base.is_numeric() {
        Primary::Digit(base.to_digit(10).unwrap_or(base as u32))
    } else if base.is_alphabetic() {
        Primary::Other(lower as u32)
    } else {
        Primary::Punctuation(base as u32)
    }
}
