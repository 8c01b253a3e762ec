//! Note queries shared by the views.
//!
//! Every list is a resource keyed on a version counter. Mutations call
//! [`NotesVersion::invalidate`] and every mounted list refetches.

use api::Note;
use dioxus::prelude::*;

use crate::notifications::{notify_error, use_notifications};

#[derive(Clone, Copy, PartialEq)]
pub struct NotesVersion(Signal<u64>);

impl NotesVersion {
    pub fn new() -> Self {
        Self(Signal::new(0))
    }

    /// Subscribe the calling scope to invalidations.
    pub fn track(&self) -> u64 {
        (self.0)()
    }

    pub fn invalidate(mut self) {
        *self.0.write() += 1;
    }
}

pub fn use_notes_version() -> NotesVersion {
    use_context::<NotesVersion>()
}

/// Active or archived notes of the signed-in user. `None` while loading.
pub fn use_notes(archived: bool) -> Resource<Vec<Note>> {
    let version = use_notes_version();
    let notifications = use_notifications();

    use_resource(move || {
        version.track();
        async move {
            match api::get_notes(archived).await {
                Ok(notes) => notes,
                Err(e) => {
                    notify_error(notifications, format!("Failed to load notes: {e}"));
                    Vec::new()
                }
            }
        }
    })
}

/// Backend search when `term` is non-blank, otherwise the active notes.
pub fn use_note_search(term: Signal<String>) -> Resource<Vec<Note>> {
    let version = use_notes_version();
    let notifications = use_notifications();

    use_resource(move || {
        version.track();
        let term = term().trim().to_string();
        async move {
            let result = if term.is_empty() {
                api::get_notes(false).await
            } else {
                api::search_notes(term).await
            };
            match result {
                Ok(notes) => notes,
                Err(e) => {
                    notify_error(notifications, format!("Search failed: {e}"));
                    Vec::new()
                }
            }
        }
    })
}

/// Distinct tags of the signed-in user.
pub fn use_tags() -> Resource<Vec<String>> {
    let version = use_notes_version();

    use_resource(move || {
        version.track();
        async move {
            api::get_user_tags().await.unwrap_or_else(|e| {
                tracing::warn!("Failed to load tags: {}", e);
                Vec::new()
            })
        }
    })
}
