use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::backend::{BackendError, BackendResult, NoteBackend};
use crate::clock::now_ms;
use crate::filter::matches;
use crate::models::{Note, NoteDraft, NoteId, UserId};
use crate::tags::distinct_tags;
use crate::theme::{ThemePatch, ThemePreferences};

#[derive(Debug, Default)]
struct Tables {
    notes: HashMap<NoteId, Note>,
    themes: HashMap<UserId, ThemePreferences>,
    next_id: u64,
    last_write: i64,
}

impl Tables {
    /// Strictly increasing write time so "newest first" is total even within one millisecond.
    fn stamp(&mut self) -> i64 {
        self.last_write = now_ms().max(self.last_write + 1);
        self.last_write
    }

    fn owned_mut(&mut self, owner: &UserId, id: &NoteId) -> BackendResult<&mut Note> {
        let note = self
            .notes
            .get_mut(id)
            .ok_or_else(|| BackendError::NotFound(id.clone()))?;
        if &note.owner != owner {
            return Err(BackendError::Forbidden(id.clone()));
        }
        Ok(note)
    }

    fn list(&self, owner: &UserId, keep: impl Fn(&Note) -> bool) -> Vec<Note> {
        let mut notes: Vec<Note> = self
            .notes
            .values()
            .filter(|n| &n.owner == owner && keep(n))
            .cloned()
            .collect();
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        notes
    }
}

/// In-memory [`NoteBackend`] for tests and the bundled server.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> BackendResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| BackendError::Unavailable("store lock poisoned".to_string()))
    }
}

impl NoteBackend for MemoryBackend {
    async fn notes(&self, owner: &UserId, archived: bool) -> BackendResult<Vec<Note>> {
        Ok(self.lock()?.list(owner, |n| n.is_archived == archived))
    }

    async fn search_notes(&self, owner: &UserId, term: &str) -> BackendResult<Vec<Note>> {
        if term.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.lock()?.list(owner, |n| !n.is_archived && matches(n, term)))
    }

    async fn user_tags(&self, owner: &UserId) -> BackendResult<Vec<String>> {
        let tables = self.lock()?;
        Ok(distinct_tags(tables.notes.values().filter(|n| &n.owner == owner)))
    }

    async fn create_note(&self, owner: &UserId, draft: NoteDraft) -> BackendResult<NoteId> {
        let mut tables = self.lock()?;
        tables.next_id += 1;
        let id = NoteId(format!("note-{}", tables.next_id));
        let updated_at = tables.stamp();
        tables.notes.insert(
            id.clone(),
            Note {
                id: id.clone(),
                owner: owner.clone(),
                title: draft.title,
                content: draft.content,
                tags: draft.tags,
                is_archived: false,
                updated_at,
            },
        );
        Ok(id)
    }

    async fn update_note(&self, owner: &UserId, id: &NoteId, draft: NoteDraft) -> BackendResult<()> {
        let mut tables = self.lock()?;
        let updated_at = tables.stamp();
        let note = tables.owned_mut(owner, id)?;
        note.title = draft.title;
        note.content = draft.content;
        note.tags = draft.tags;
        note.updated_at = updated_at;
        Ok(())
    }

    async fn delete_note(&self, owner: &UserId, id: &NoteId) -> BackendResult<()> {
        let mut tables = self.lock()?;
        tables.owned_mut(owner, id)?;
        tables.notes.remove(id);
        Ok(())
    }

    async fn toggle_archive(&self, owner: &UserId, id: &NoteId) -> BackendResult<bool> {
        let mut tables = self.lock()?;
        let updated_at = tables.stamp();
        let note = tables.owned_mut(owner, id)?;
        note.is_archived = !note.is_archived;
        note.updated_at = updated_at;
        Ok(note.is_archived)
    }

    async fn theme(&self, owner: &UserId) -> BackendResult<ThemePreferences> {
        let mut tables = self.lock()?;
        Ok(*tables.themes.entry(owner.clone()).or_default())
    }

    async fn set_theme(&self, owner: &UserId, patch: ThemePatch) -> BackendResult<ThemePreferences> {
        let mut tables = self.lock()?;
        let prefs = tables.themes.entry(owner.clone()).or_default();
        *prefs = prefs.apply(patch);
        Ok(*prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{AppearanceMode, ColorTheme, FontTheme};

    fn alice() -> UserId {
        UserId::new("alice")
    }

    fn draft(title: &str, tags: &str) -> NoteDraft {
        NoteDraft::from_input(title, "<p>body</p>", tags)
    }

    #[tokio::test]
    async fn test_new_user_has_no_notes() {
        let backend = MemoryBackend::new();
        assert!(backend.notes(&alice(), false).await.unwrap().is_empty());
        assert!(backend.user_tags(&alice()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_and_list_newest_first() {
        let backend = MemoryBackend::new();
        let first = backend.create_note(&alice(), draft("First", "")).await.unwrap();
        let second = backend.create_note(&alice(), draft("Second", "")).await.unwrap();

        let notes = backend.notes(&alice(), false).await.unwrap();
        let ids: Vec<_> = notes.iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids, vec![second, first.clone()]);

        backend.update_note(&alice(), &first, draft("First, edited", "")).await.unwrap();
        let notes = backend.notes(&alice(), false).await.unwrap();
        assert_eq!(notes[0].id, first);
        assert_eq!(notes[0].title, "First, edited");
    }

    #[tokio::test]
    async fn test_archive_moves_between_lists() {
        let backend = MemoryBackend::new();
        let id = backend.create_note(&alice(), draft("Old", "")).await.unwrap();

        assert!(backend.toggle_archive(&alice(), &id).await.unwrap());
        assert!(backend.notes(&alice(), false).await.unwrap().is_empty());
        assert_eq!(backend.notes(&alice(), true).await.unwrap().len(), 1);

        assert!(!backend.toggle_archive(&alice(), &id).await.unwrap());
        assert_eq!(backend.notes(&alice(), false).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_search_skips_archived_and_blank_terms() {
        let backend = MemoryBackend::new();
        backend.create_note(&alice(), draft("Project Plan", "proj")).await.unwrap();
        backend.create_note(&alice(), draft("Recipe", "")).await.unwrap();
        let hidden = backend.create_note(&alice(), draft("Project Archive", "")).await.unwrap();
        backend.toggle_archive(&alice(), &hidden).await.unwrap();

        let results = backend.search_notes(&alice(), "proj").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Project Plan");
        assert!(backend.search_notes(&alice(), "  ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_results_drive_the_list_view() {
        use crate::filter::filter_notes;
        use crate::selection::{NoteListView, SelectAction, Viewport};
        use crate::shortcuts::NavTarget;

        let backend = MemoryBackend::new();
        let plan = backend.create_note(&alice(), draft("Project Plan", "")).await.unwrap();
        let notes = backend.create_note(&alice(), draft("Project Notes", "")).await.unwrap();
        backend.create_note(&alice(), draft("Recipe", "")).await.unwrap();

        let results = backend.search_notes(&alice(), "project").await.unwrap();
        let visible = filter_notes(&results, "project");
        assert_eq!(visible.len(), 2);

        let mut view = NoteListView::new();
        assert!(view.auto_select(&visible, Viewport::Wide));
        assert_eq!(view.selected_note(&visible).unwrap().id, notes);
        assert_eq!(view.select(plan.clone(), Viewport::Wide), SelectAction::Preview);
        assert_eq!(view.selected_note(&visible).unwrap().title, "Project Plan");

        // Clearing the search starts over with an empty selection.
        let mut view = NoteListView::new();
        assert_eq!(view.selected_id(), None);
        assert_eq!(
            view.select(plan.clone(), Viewport::Narrow),
            SelectAction::Navigate(NavTarget::Note(plan))
        );
    }

    #[tokio::test]
    async fn test_tags_are_distinct_and_sorted() {
        let backend = MemoryBackend::new();
        backend.create_note(&alice(), draft("A", "work, ideas")).await.unwrap();
        backend.create_note(&alice(), draft("B", "ideas,home")).await.unwrap();
        backend.create_note(&UserId::new("bob"), draft("C", "secret")).await.unwrap();

        assert_eq!(
            backend.user_tags(&alice()).await.unwrap(),
            vec!["home", "ideas", "work"]
        );
    }

    #[tokio::test]
    async fn test_other_owners_notes_are_untouchable() {
        let backend = MemoryBackend::new();
        let id = backend.create_note(&alice(), draft("Mine", "")).await.unwrap();
        let bob = UserId::new("bob");

        assert!(backend.notes(&bob, false).await.unwrap().is_empty());
        assert_eq!(
            backend.delete_note(&bob, &id).await,
            Err(BackendError::Forbidden(id.clone()))
        );
        assert_eq!(
            backend.update_note(&bob, &id, draft("Stolen", "")).await,
            Err(BackendError::Forbidden(id.clone()))
        );
        assert_eq!(backend.notes(&alice(), false).await.unwrap()[0].title, "Mine");
    }

    #[tokio::test]
    async fn test_delete_and_missing_notes() {
        let backend = MemoryBackend::new();
        let id = backend.create_note(&alice(), draft("Gone", "")).await.unwrap();
        backend.delete_note(&alice(), &id).await.unwrap();
        assert!(backend.notes(&alice(), false).await.unwrap().is_empty());
        assert_eq!(
            backend.toggle_archive(&alice(), &id).await,
            Err(BackendError::NotFound(id))
        );
    }

    #[tokio::test]
    async fn test_theme_defaults_then_patches() {
        let backend = MemoryBackend::new();
        let prefs = backend.theme(&alice()).await.unwrap();
        assert_eq!(prefs, ThemePreferences::default());

        let patched = backend
            .set_theme(
                &alice(),
                ThemePatch {
                    color_theme: Some(ColorTheme::Teal),
                    ..ThemePatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(patched.color_theme, ColorTheme::Teal);
        assert_eq!(patched.font_theme, FontTheme::Inter);
        assert_eq!(patched.appearance_mode, AppearanceMode::Light);
        assert_eq!(backend.theme(&alice()).await.unwrap(), patched);
    }
}
