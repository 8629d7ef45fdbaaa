//! Identifier ordering
//!
//! Name-based sort keys of the metadata views go through an
//! [`IdentifierComparator`] built from the catalog's collation.

use std::cmp::Ordering;

use log::warn;

/// Collation applied to identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Collation {
    /// Code point order
    #[default]
    Binary,
    /// Case folded, ties broken by code point order
    CaseInsensitive,
}

impl Collation {
    /// Resolve a collation name as stored in the catalog.
    /// Unknown names fall back to binary ordering.
    pub fn from_name(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return Collation::Binary;
        };
        match name.trim().to_uppercase().as_str() {
            "" | "OFF" | "BINARY" | "UCS_BASIC" => Collation::Binary,
            "NOCASE" | "CI" | "CASE_INSENSITIVE" | "IGNORECASE" => Collation::CaseInsensitive,
            other => {
                warn!("unknown collation {:?}, using binary ordering", other);
                Collation::Binary
            }
        }
    }
}

/// Total order over identifier strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentifierComparator {
    collation: Collation,
}

impl IdentifierComparator {
    pub fn new(collation: Collation) -> Self {
        IdentifierComparator { collation }
    }

    pub fn collation(&self) -> Collation {
        self.collation
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self.collation {
            Collation::Binary => a.cmp(b),
            Collation::CaseInsensitive => {
                let folded_a = a.chars().flat_map(char::to_uppercase);
                let folded_b = b.chars().flat_map(char::to_uppercase);
                folded_a.cmp(folded_b).then_with(|| a.cmp(b))
            }
        }
    }

    /// Sort names in place
    pub fn sort<S: AsRef<str>>(&self, names: &mut [S]) {
        names.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collation_names() {
        assert_eq!(Collation::from_name(None), Collation::Binary);
        assert_eq!(Collation::from_name(Some("binary")), Collation::Binary);
        assert_eq!(Collation::from_name(Some(" NoCase ")), Collation::CaseInsensitive);
        assert_eq!(Collation::from_name(Some("klingon")), Collation::Binary);
    }

    #[test]
    fn test_binary_order() {
        let comparator = IdentifierComparator::new(Collation::Binary);
        let mut names = vec!["b", "B", "a", "A"];
        comparator.sort(&mut names);
        assert_eq!(names, vec!["A", "B", "a", "b"]);
    }

    #[test]
    fn test_case_insensitive_order_is_total() {
        let comparator = IdentifierComparator::new(Collation::CaseInsensitive);
        let mut names = vec!["b", "B", "a", "A"];
        comparator.sort(&mut names);
        assert_eq!(names, vec!["A", "a", "B", "b"]);
        assert_eq!(comparator.compare("abc", "ABD"), Ordering::Less);
        assert_eq!(comparator.compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_comparator_is_stable_across_calls() {
        let comparator = IdentifierComparator::new(Collation::CaseInsensitive);
        let first = comparator.compare("Schema_1", "schema_2");
        for _ in 0..10 {
            assert_eq!(comparator.compare("Schema_1", "schema_2"), first);
        }
    }
}
