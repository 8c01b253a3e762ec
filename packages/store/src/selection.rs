//! # List selection view-model
//!
//! On a wide viewport the list and a preview pane sit side by side and the
//! selected note is local state. On a narrow viewport there is no preview
//! pane: choosing a note navigates to its editor and nothing is retained.
//!
//! The selected id is not cleared when it drops out of the visible set (for
//! example after the search term changes). Lookups simply return `None` until
//! something selects again; auto-selection only kicks in while the selection
//! is actually empty.

use crate::models::{Note, NoteId};
use crate::shortcuts::NavTarget;

/// Default width (px) below which the viewport counts as narrow.
pub const NARROW_BREAKPOINT_PX: u32 = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewport {
    Narrow,
    Wide,
}

impl Viewport {
    pub fn from_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            Viewport::Narrow
        } else {
            Viewport::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        self == Viewport::Narrow
    }
}

/// What the view should do after a note is picked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectAction {
    Preview,
    Navigate(NavTarget),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteListView {
    selected: Option<NoteId>,
}

impl NoteListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_id(&self) -> Option<&NoteId> {
        self.selected.as_ref()
    }

    /// The selected note if it is part of `visible`.
    pub fn selected_note<'a>(&self, visible: &[&'a Note]) -> Option<&'a Note> {
        let id = self.selected.as_ref()?;
        visible.iter().copied().find(|note| &note.id == id)
    }

    /// Pick the first visible note when nothing is selected on a wide
    /// viewport. Returns whether the selection changed.
    pub fn auto_select(&mut self, visible: &[&Note], viewport: Viewport) -> bool {
        if self.selected.is_some() || viewport.is_narrow() {
            return false;
        }
        match visible.first() {
            Some(first) => {
                self.selected = Some(first.id.clone());
                true
            }
            None => false,
        }
    }

    pub fn select(&mut self, id: NoteId, viewport: Viewport) -> SelectAction {
        match viewport {
            Viewport::Narrow => SelectAction::Navigate(NavTarget::Note(id)),
            Viewport::Wide => {
                self.selected = Some(id);
                SelectAction::Preview
            }
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_notes;
    use crate::models::UserId;

    fn note(id: &str, title: &str) -> Note {
        Note {
            id: NoteId::new(id),
            owner: UserId::new("u1"),
            title: title.to_string(),
            content: String::new(),
            tags: Vec::new(),
            is_archived: false,
            updated_at: 0,
        }
    }

    fn notes() -> Vec<Note> {
        vec![note("a", "Alpha"), note("b", "Beta"), note("c", "Gamma")]
    }

    #[test]
    fn viewport_classification() {
        assert_eq!(Viewport::from_width(800, NARROW_BREAKPOINT_PX), Viewport::Narrow);
        assert_eq!(Viewport::from_width(1023, NARROW_BREAKPOINT_PX), Viewport::Narrow);
        assert_eq!(Viewport::from_width(1024, NARROW_BREAKPOINT_PX), Viewport::Wide);
    }

    #[test]
    fn auto_selects_first_on_wide() {
        let notes = notes();
        let visible = filter_notes(&notes, "");
        let mut view = NoteListView::new();
        assert!(view.auto_select(&visible, Viewport::Wide));
        assert_eq!(view.selected_id(), Some(&NoteId::new("a")));
        assert_eq!(view.selected_note(&visible).unwrap().title, "Alpha");
    }

    #[test]
    fn no_auto_select_on_narrow_or_empty() {
        let notes = notes();
        let mut view = NoteListView::new();
        assert!(!view.auto_select(&filter_notes(&notes, ""), Viewport::Narrow));
        assert!(!view.auto_select(&filter_notes(&notes, "zzz"), Viewport::Wide));
        assert_eq!(view.selected_id(), None);
    }

    #[test]
    fn existing_selection_is_kept() {
        let notes = notes();
        let visible = filter_notes(&notes, "");
        let mut view = NoteListView::new();
        view.select(NoteId::new("c"), Viewport::Wide);
        assert!(!view.auto_select(&visible, Viewport::Wide));
        assert_eq!(view.selected_note(&visible).unwrap().title, "Gamma");
    }

    #[test]
    fn stale_selection_reads_as_none_without_reselecting() {
        let notes = notes();
        let mut view = NoteListView::new();
        view.select(NoteId::new("c"), Viewport::Wide);

        let visible = filter_notes(&notes, "beta");
        assert!(view.selected_note(&visible).is_none());
        assert!(!view.auto_select(&visible, Viewport::Wide));

        view.clear();
        assert!(view.auto_select(&visible, Viewport::Wide));
        assert_eq!(view.selected_note(&visible).unwrap().title, "Beta");
    }

    #[test]
    fn narrow_selection_navigates() {
        let mut view = NoteListView::new();
        let action = view.select(NoteId::new("b"), Viewport::Narrow);
        assert_eq!(action, SelectAction::Navigate(NavTarget::Note(NoteId::new("b"))));
        assert_eq!(view.selected_id(), None);
    }
}
