//! # Note edit/save state machine
//!
//! ```text
//!            edit                 begin_save (title ok)
//!   Clean ─────────► Modified ───────────────────────► Saving
//!     ▲                  ▲                               │
//!     │                  └──────── finish_save(Err) ─────┤
//!     └───────────────────────── finish_save(Ok) ────────┘
//! ```
//!
//! [`EditSession`] owns the three editable fields as raw text (the tag field
//! is the comma-separated string the user types) and only normalizes them
//! into a [`NoteDraft`] when a save begins. A save with a blank title is
//! rejected before anything reaches the backend.
//!
//! Edits made while a save is in flight are kept: the session returns to
//! `Modified` instead of `Clean` when that save completes. A manual save
//! requested during an auto-save is queued and handed back once the
//! auto-save succeeds.

use thiserror::Error;

use crate::backend::BackendError;
use crate::models::{Note, NoteDraft, NoteId};
use crate::tags::join_tags;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditState {
    Clean,
    Modified,
    Saving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditMode {
    New,
    Existing(NoteId),
}

/// What started a save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveTrigger {
    /// Button or keyboard shortcut; navigates away on success.
    Manual,
    /// Debounce expiry; silent, stays in the editor.
    Auto,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a title for your note")]
    EmptyTitle,
    #[error("A save is already in progress")]
    SaveInProgress,
    #[error("Nothing to auto-save")]
    NothingToSave,
}

/// The backend call a save resolves to.
#[derive(Clone, Debug, PartialEq)]
pub enum SaveRequest {
    Create(NoteDraft),
    Update(NoteId, NoteDraft),
}

impl SaveRequest {
    pub fn draft(&self) -> &NoteDraft {
        match self {
            SaveRequest::Create(draft) | SaveRequest::Update(_, draft) => draft,
        }
    }
}

/// Result of trying to leave the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaveGuard {
    Leave,
    Confirm,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EditSession {
    pub title: String,
    pub content: String,
    pub tags: String,
    mode: EditMode,
    state: EditState,
    in_flight: Option<SaveTrigger>,
    edited_while_saving: bool,
    manual_queued: bool,
    last_saved: Option<i64>,
    last_error: Option<String>,
}

impl EditSession {
    /// Session for a note that does not exist yet.
    pub fn new_note() -> Self {
        Self::with_mode(EditMode::New)
    }

    /// Session for an existing note; fields stay empty until [`load`](Self::load).
    pub fn existing(id: NoteId) -> Self {
        Self::with_mode(EditMode::Existing(id))
    }

    fn with_mode(mode: EditMode) -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            tags: String::new(),
            mode,
            state: EditState::Clean,
            in_flight: None,
            edited_while_saving: false,
            manual_queued: false,
            last_saved: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn is_new(&self) -> bool {
        self.mode == EditMode::New
    }

    pub fn is_modified(&self) -> bool {
        self.state != EditState::Clean
    }

    pub fn is_saving(&self) -> bool {
        self.state == EditState::Saving
    }

    pub fn last_saved(&self) -> Option<i64> {
        self.last_saved
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Replace the fields with the fetched note. Ignored unless clean, so a
    /// refreshed query never overwrites local edits.
    pub fn load(&mut self, note: &Note) -> bool {
        if self.state != EditState::Clean {
            return false;
        }
        self.title = note.title.clone();
        self.content = note.content.clone();
        self.tags = join_tags(&note.tags);
        true
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.mark_edited();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.mark_edited();
    }

    pub fn set_tags(&mut self, tags: impl Into<String>) {
        self.tags = tags.into();
        self.mark_edited();
    }

    fn mark_edited(&mut self) {
        match self.state {
            EditState::Saving => self.edited_while_saving = true,
            _ => self.state = EditState::Modified,
        }
    }

    /// Whether the auto-save debounce should be armed.
    pub fn wants_autosave(&self) -> bool {
        self.state == EditState::Modified && !self.is_new() && self.has_title()
    }

    /// Enter `Saving` and produce the backend call, or reject the transition.
    pub fn begin_save(&mut self, trigger: SaveTrigger) -> Result<SaveRequest, ValidationError> {
        if self.state == EditState::Saving {
            if trigger == SaveTrigger::Manual && self.in_flight == Some(SaveTrigger::Auto) {
                self.manual_queued = true;
            }
            return Err(ValidationError::SaveInProgress);
        }
        if !self.has_title() {
            self.last_error = Some(ValidationError::EmptyTitle.to_string());
            return Err(ValidationError::EmptyTitle);
        }
        if trigger == SaveTrigger::Auto && !self.wants_autosave() {
            return Err(ValidationError::NothingToSave);
        }

        let draft = NoteDraft::from_input(&self.title, &self.content, &self.tags);
        let request = match &self.mode {
            EditMode::New => SaveRequest::Create(draft),
            EditMode::Existing(id) => SaveRequest::Update(id.clone(), draft),
        };
        self.state = EditState::Saving;
        self.in_flight = Some(trigger);
        self.edited_while_saving = false;
        self.last_error = None;
        Ok(request)
    }

    /// Complete the in-flight save. Returns `true` when the editor should
    /// navigate away (a successful manual save).
    pub fn finish_save(&mut self, result: Result<(), BackendError>, now: i64) -> bool {
        let Some(trigger) = self.in_flight.take() else {
            return false;
        };
        match result {
            Ok(()) => {
                self.last_saved = Some(now);
                self.last_error = None;
                self.state = if self.edited_while_saving {
                    EditState::Modified
                } else {
                    EditState::Clean
                };
                self.edited_while_saving = false;
                trigger == SaveTrigger::Manual
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                self.state = EditState::Modified;
                self.edited_while_saving = false;
                self.manual_queued = false;
                false
            }
        }
    }

    pub fn has_queued_manual(&self) -> bool {
        self.manual_queued
    }

    /// Whether a manual save is waiting on a completed auto-save. Clears the
    /// request; a failed auto-save drops it.
    pub fn take_queued_manual(&mut self) -> bool {
        if self.state == EditState::Saving {
            return false;
        }
        std::mem::take(&mut self.manual_queued)
    }

    /// Once a new note has been created, further saves update it.
    pub fn attach(&mut self, id: NoteId) {
        self.mode = EditMode::Existing(id);
    }

    /// Whether leaving needs explicit confirmation.
    pub fn leave(&self) -> LeaveGuard {
        if self.is_modified() {
            LeaveGuard::Confirm
        } else {
            LeaveGuard::Leave
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;

    fn fetched() -> Note {
        Note {
            id: NoteId::new("n1"),
            owner: UserId::new("u1"),
            title: "Groceries".to_string(),
            content: "<p>milk</p>".to_string(),
            tags: vec!["home".to_string(), "list".to_string()],
            is_archived: false,
            updated_at: 0,
        }
    }

    fn loaded() -> EditSession {
        let mut session = EditSession::existing(NoteId::new("n1"));
        session.load(&fetched());
        session
    }

    #[test]
    fn starts_clean_and_loads_fields() {
        let session = loaded();
        assert_eq!(session.state(), EditState::Clean);
        assert_eq!(session.title, "Groceries");
        assert_eq!(session.tags, "home, list");
        assert_eq!(session.leave(), LeaveGuard::Leave);
    }

    #[test]
    fn any_edit_marks_modified() {
        let edits: [fn(&mut EditSession); 3] = [
            |s: &mut EditSession| s.set_title("x"),
            |s: &mut EditSession| s.set_content("x"),
            |s: &mut EditSession| s.set_tags("x"),
        ];
        for edit in edits {
            let mut session = loaded();
            edit(&mut session);
            assert_eq!(session.state(), EditState::Modified);
            assert_eq!(session.leave(), LeaveGuard::Confirm);
        }
    }

    #[test]
    fn load_never_clobbers_local_edits() {
        let mut session = loaded();
        session.set_title("Local title");
        assert!(!session.load(&fetched()));
        assert_eq!(session.title, "Local title");
    }

    #[test]
    fn blank_title_blocks_save() {
        let mut session = loaded();
        session.set_title("   ");
        assert_eq!(session.begin_save(SaveTrigger::Manual), Err(ValidationError::EmptyTitle));
        assert_eq!(session.state(), EditState::Modified);
        assert_eq!(session.last_error(), Some("Please enter a title for your note"));
    }

    #[test]
    fn save_builds_normalized_update() {
        let mut session = loaded();
        session.set_tags(" react, , notes ,ideas ");
        let request = session.begin_save(SaveTrigger::Manual).unwrap();
        assert_eq!(session.state(), EditState::Saving);
        match request {
            SaveRequest::Update(id, draft) => {
                assert_eq!(id, NoteId::new("n1"));
                assert_eq!(draft.tags, vec!["react", "notes", "ideas"]);
            }
            other => panic!("unexpected request {other:?}"),
        }
    }

    #[test]
    fn new_note_saves_as_create() {
        let mut session = EditSession::new_note();
        session.set_title("Fresh");
        assert!(matches!(
            session.begin_save(SaveTrigger::Manual),
            Ok(SaveRequest::Create(_))
        ));
    }

    #[test]
    fn success_returns_to_clean_and_records_time() {
        let mut session = loaded();
        session.set_content("<p>eggs</p>");
        session.begin_save(SaveTrigger::Manual).unwrap();
        assert!(session.finish_save(Ok(()), 1234));
        assert_eq!(session.state(), EditState::Clean);
        assert_eq!(session.last_saved(), Some(1234));
    }

    #[test]
    fn autosave_success_does_not_navigate() {
        let mut session = loaded();
        session.set_content("<p>eggs</p>");
        assert!(session.wants_autosave());
        session.begin_save(SaveTrigger::Auto).unwrap();
        assert!(!session.finish_save(Ok(()), 10));
        assert_eq!(session.state(), EditState::Clean);
    }

    #[test]
    fn failure_keeps_edits_and_surfaces_error() {
        let mut session = loaded();
        session.set_title("Renamed");
        session.begin_save(SaveTrigger::Manual).unwrap();
        let navigate = session.finish_save(Err(BackendError::Unavailable("offline".into())), 10);
        assert!(!navigate);
        assert_eq!(session.state(), EditState::Modified);
        assert_eq!(session.title, "Renamed");
        assert!(session.last_error().unwrap().contains("offline"));
        assert_eq!(session.last_saved(), None);
    }

    #[test]
    fn edits_during_save_stay_modified() {
        let mut session = loaded();
        session.set_title("One");
        session.begin_save(SaveTrigger::Auto).unwrap();
        session.set_title("Two");
        assert_eq!(session.state(), EditState::Saving);
        assert_eq!(session.begin_save(SaveTrigger::Manual), Err(ValidationError::SaveInProgress));
        session.finish_save(Ok(()), 5);
        assert_eq!(session.state(), EditState::Modified);
    }

    #[test]
    fn manual_save_during_autosave_is_queued() {
        let mut session = loaded();
        session.set_title("Queued");
        session.begin_save(SaveTrigger::Auto).unwrap();
        assert_eq!(session.begin_save(SaveTrigger::Manual), Err(ValidationError::SaveInProgress));
        assert!(session.has_queued_manual());
        assert!(!session.take_queued_manual());

        assert!(!session.finish_save(Ok(()), 5));
        assert!(session.take_queued_manual());
        assert!(!session.take_queued_manual());

        session.begin_save(SaveTrigger::Manual).unwrap();
        assert!(session.finish_save(Ok(()), 6));
    }

    #[test]
    fn queued_manual_save_is_dropped_when_autosave_fails() {
        let mut session = loaded();
        session.set_title("Queued");
        session.begin_save(SaveTrigger::Auto).unwrap();
        let _ = session.begin_save(SaveTrigger::Manual);
        session.finish_save(Err(BackendError::Unavailable("offline".into())), 5);
        assert!(!session.take_queued_manual());
        assert_eq!(session.state(), EditState::Modified);
    }

    #[test]
    fn new_notes_are_never_autosaved() {
        let mut session = EditSession::new_note();
        session.set_title("Draft");
        assert!(!session.wants_autosave());
        assert_eq!(session.begin_save(SaveTrigger::Auto), Err(ValidationError::NothingToSave));
        session.attach(NoteId::new("n9"));
        assert!(session.wants_autosave());
    }
}
