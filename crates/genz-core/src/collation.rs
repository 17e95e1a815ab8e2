//! String comparison rules used to order search results.
//!
//! Results are always sorted by headword. The comparison is pluggable so the
//! same engine can be bound to a locale table (see the language crates) or
//! to plain code-point order in tests and tools.

use std::cmp::Ordering;

/// Total ordering over strings used to sort terms.
pub trait Collation: Send + Sync {
    /// Human-readable name, used in logs.
    fn name(&self) -> &'static str;

    /// Compares two strings. Must be a total order so sorting is well defined.
    fn compare(&self, left: &str, right: &str) -> Ordering;
}

impl<C: Collation + ?Sized> Collation for Box<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn compare(&self, left: &str, right: &str) -> Ordering {
        (**self).compare(left, right)
    }
}

impl<C: Collation + ?Sized> Collation for &C {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn compare(&self, left: &str, right: &str) -> Ordering {
        (**self).compare(left, right)
    }
}

/// Raw Unicode scalar value order. No locale awareness.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodePointCollation;

impl Collation for CodePointCollation {
    fn name(&self) -> &'static str {
        "code-point"
    }

    fn compare(&self, left: &str, right: &str) -> Ordering {
        left.cmp(right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_point_order() {
        let c = CodePointCollation;
        assert_eq!(c.compare("Flex", "Trap"), Ordering::Less);
        assert_eq!(c.compare("a", "a"), Ordering::Equal);
        // Uppercase sorts before lowercase in code-point order
        assert_eq!(c.compare("Z", "a"), Ordering::Less);
    }

    #[test]
    fn test_boxed_collation_delegates() {
        let c: Box<dyn Collation> = Box::new(CodePointCollation);
        assert_eq!(c.name(), "code-point");
        assert_eq!(c.compare("b", "a"), Ordering::Greater);
    }
}
