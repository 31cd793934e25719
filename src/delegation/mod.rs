//! Business rules for delegations: intake validation, attendance reporting
//! and the filtered dashboard view. Nothing in here touches the database.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub mod filter;
pub mod intake;
pub mod report;
pub mod sample;
pub mod sheet;

/// Base letters only: decomposed, accents dropped, lowercased.
fn primary_key(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase).collect()
}

/// Accents kept, case dropped.
fn secondary_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

/// Name ordering used everywhere a list is shown to people. Compares base
/// letters first, so "Émile" sits with the E's, then accents (unaccented
/// first), then case (lowercase first).
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_compare_case_insensitively() {
        assert_eq!(compare_names("alice", "Bob"), Ordering::Less);
        assert_eq!(compare_names("Zed", "adam"), Ordering::Greater);
        assert_eq!(compare_names("amy", "Amy"), Ordering::Less);
        assert_eq!(compare_names("Amy", "Amy"), Ordering::Equal);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        assert_eq!(compare_names("Émile", "Zed"), Ordering::Less);
        assert_eq!(compare_names("Émile", "Eve"), Ordering::Less);
        assert_eq!(compare_names("Émile", "Dora"), Ordering::Greater);
        assert_eq!(compare_names("Emile", "Émile"), Ordering::Less);
        assert_eq!(compare_names("émile", "Émile"), Ordering::Less);
        assert_eq!(compare_names("Zoë", "Zoe"), Ordering::Greater);
    }
}
