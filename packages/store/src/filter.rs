//! Search-term filtering over fetched notes.
//!
//! Matching is a plain case-insensitive substring test against the title,
//! the content markup and every tag. There is no tokenization and no ranking:
//! the visible set keeps the order the notes were fetched in.

use crate::format::strip_markup;
use crate::models::Note;

/// Whether `note` passes the search predicate for `term`.
///
/// A term that is blank after trimming matches every note. Otherwise the
/// term is used as typed, surrounding whitespace included.
pub fn matches(note: &Note, term: &str) -> bool {
    if term.trim().is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    note.title.to_lowercase().contains(&needle)
        || note.content.to_lowercase().contains(&needle)
        || note.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
}

/// The visible subset of `notes` for `term`, in fetch order.
pub fn filter_notes<'a>(notes: &'a [Note], term: &str) -> Vec<&'a Note> {
    notes.iter().filter(|note| matches(note, term)).collect()
}

/// Notes carrying exactly `tag`.
pub fn with_tag<'a>(notes: &'a [Note], tag: &str) -> Vec<&'a Note> {
    notes
        .iter()
        .filter(|note| note.tags.iter().any(|t| t == tag))
        .collect()
}

/// Summary shown above a result list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub results: usize,
    pub words: usize,
    pub tags: usize,
}

impl SearchStats {
    pub fn from_notes<'a>(notes: impl IntoIterator<Item = &'a Note>) -> Self {
        notes.into_iter().fold(Self::default(), |mut stats, note| {
            stats.results += 1;
            stats.words += strip_markup(&note.content).split_whitespace().count();
            stats.tags += note.tags.len();
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NoteId, UserId};

    fn note(id: &str, title: &str, content: &str, tags: &[&str]) -> Note {
        Note {
            id: NoteId::new(id),
            owner: UserId::new("u1"),
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            is_archived: false,
            updated_at: 0,
        }
    }

    fn ids(notes: &[&Note]) -> Vec<String> {
        notes.iter().map(|n| n.id.to_string()).collect()
    }

    fn sample() -> Vec<Note> {
        vec![
            note("1", "Project Plan", "<p>milestones</p>", &["proj"]),
            note("2", "Recipe", "<p>flour and eggs</p>", &[]),
            note("3", "Reading list", "<p>Rust book</p>", &["Books"]),
        ]
    }

    #[test]
    fn empty_term_passes_everything_in_order() {
        let notes = sample();
        assert_eq!(ids(&filter_notes(&notes, "")), vec!["1", "2", "3"]);
        assert_eq!(ids(&filter_notes(&notes, "   ")), vec!["1", "2", "3"]);
    }

    #[test]
    fn proj_only_matches_project_plan() {
        let notes = sample();
        let visible = filter_notes(&notes, "proj");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Project Plan");
    }

    #[test]
    fn matches_are_case_insensitive_across_fields() {
        let notes = sample();
        assert_eq!(ids(&filter_notes(&notes, "FLOUR")), vec!["2"]);
        assert_eq!(ids(&filter_notes(&notes, "books")), vec!["3"]);
        assert_eq!(ids(&filter_notes(&notes, "reading")), vec!["3"]);
    }

    #[test]
    fn surrounding_spaces_are_part_of_the_term() {
        let notes = sample();
        assert!(!matches(&notes[0], "plan "));
        assert!(filter_notes(&notes, "  recipe ").is_empty());
        assert_eq!(ids(&filter_notes(&notes, "project plan")), vec!["1"]);
        assert_eq!(ids(&filter_notes(&notes, "t p")), vec!["1"]);
    }

    #[test]
    fn no_match_yields_empty_set() {
        let notes = sample();
        assert!(filter_notes(&notes, "zebra").is_empty());
    }

    #[test]
    fn filtering_is_idempotent_and_reversible() {
        let notes = sample();
        let once = ids(&filter_notes(&notes, "r"));
        let twice = ids(&filter_notes(&notes, "r"));
        assert_eq!(once, twice);
        assert_eq!(ids(&filter_notes(&notes, "")), vec!["1", "2", "3"]);
    }

    #[test]
    fn result_is_exactly_the_matching_set() {
        let notes = sample();
        let table: [(&str, &[&str]); 8] = [
            ("", &["1", "2", "3"]),
            ("pl", &["1"]),
            ("plan", &["1"]),
            ("EGG", &["2"]),
            ("rust", &["3"]),
            ("nothing", &[]),
            ("proj", &["1"]),
            ("e", &["1", "2", "3"]),
        ];
        for (term, expected) in table {
            assert_eq!(ids(&filter_notes(&notes, term)), expected, "term {term:?}");
        }
    }

    #[test]
    fn tag_filter_is_exact() {
        let notes = sample();
        assert_eq!(ids(&with_tag(&notes, "proj")), vec!["1"]);
        assert!(with_tag(&notes, "pro").is_empty());
        assert!(with_tag(&notes, "books").is_empty());
    }

    #[test]
    fn stats_count_words_and_tags() {
        let notes = sample();
        let stats = SearchStats::from_notes(&notes);
        assert_eq!(
            stats,
            SearchStats {
                results: 3,
                words: 6,
                tags: 2
            }
        );
    }
}
