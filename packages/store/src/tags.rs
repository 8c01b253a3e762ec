//! Tag field parsing.
//!
//! The editor exposes tags as a single comma-separated text field. On save it
//! is split into labels; on load the labels are joined back.

use std::collections::BTreeSet;

use crate::models::Note;

/// Split a comma-separated tag field into trimmed, non-empty labels.
///
/// Order is preserved and duplicates are kept.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render tags back into the editor's tag field.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// Sorted, de-duplicated tags across a set of notes.
pub fn distinct_tags<'a>(notes: impl IntoIterator<Item = &'a Note>) -> Vec<String> {
    notes
        .into_iter()
        .flat_map(|note| note.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NoteId, UserId};

    #[test]
    fn parse_drops_blank_entries() {
        assert_eq!(
            parse_tags(" react, , notes ,ideas "),
            vec!["react".to_string(), "notes".to_string(), "ideas".to_string()]
        );
    }

    #[test]
    fn parse_empty_field() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,, ").is_empty());
    }

    #[test]
    fn parse_keeps_duplicates_in_order() {
        assert_eq!(parse_tags("b,a,b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn join_then_parse_is_stable() {
        let tags = vec!["work".to_string(), "q3 plan".to_string()];
        assert_eq!(join_tags(&tags), "work, q3 plan");
        assert_eq!(parse_tags(&join_tags(&tags)), tags);
    }

    #[test]
    fn distinct_is_sorted_and_unique() {
        let note = |tags: &[&str]| Note {
            id: NoteId::new("n"),
            owner: UserId::new("u"),
            title: String::new(),
            content: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            is_archived: false,
            updated_at: 0,
        };
        let notes = vec![note(&["zeta", "alpha"]), note(&["alpha", "mid"])];
        assert_eq!(distinct_tags(&notes), vec!["alpha", "mid", "zeta"]);
    }
}
