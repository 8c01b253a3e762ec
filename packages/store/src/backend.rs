//! # Backend query/mutation surface
//!
//! The managed backend is consumed, not implemented: this trait is the whole
//! of what the application asks of it. Every call is scoped to the owner the
//! identity provider reported, and implementations must refuse to touch a
//! note that belongs to someone else.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`notes`](NoteBackend::notes) | Notes of one owner with the given archive flag. |
//! | [`search_notes`](NoteBackend::search_notes) | Active notes of one owner matching a free-text term. |
//! | [`user_tags`](NoteBackend::user_tags) | Distinct tags used by one owner. |
//! | [`create_note`](NoteBackend::create_note) / [`update_note`](NoteBackend::update_note) / [`delete_note`](NoteBackend::delete_note) | Note mutations. |
//! | [`toggle_archive`](NoteBackend::toggle_archive) | Flip the archive flag, returning the new value. |
//! | [`theme`](NoteBackend::theme) / [`set_theme`](NoteBackend::set_theme) | Theme preferences, created with defaults on first access. |
//!
//! Calls are attempted once; failures come back as [`BackendError`] and the
//! caller decides how to surface them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Note, NoteDraft, NoteId, UserId};
use crate::theme::{ThemePatch, ThemePreferences};

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendError {
    #[error("note {0} not found")]
    NotFound(NoteId),
    #[error("note {0} belongs to another user")]
    Forbidden(NoteId),
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

pub trait NoteBackend {
    fn notes(
        &self,
        owner: &UserId,
        archived: bool,
    ) -> impl std::future::Future<Output = BackendResult<Vec<Note>>>;

    fn search_notes(
        &self,
        owner: &UserId,
        term: &str,
    ) -> impl std::future::Future<Output = BackendResult<Vec<Note>>>;

    fn user_tags(
        &self,
        owner: &UserId,
    ) -> impl std::future::Future<Output = BackendResult<Vec<String>>>;

    fn create_note(
        &self,
        owner: &UserId,
        draft: NoteDraft,
    ) -> impl std::future::Future<Output = BackendResult<NoteId>>;

    fn update_note(
        &self,
        owner: &UserId,
        id: &NoteId,
        draft: NoteDraft,
    ) -> impl std::future::Future<Output = BackendResult<()>>;

    fn delete_note(
        &self,
        owner: &UserId,
        id: &NoteId,
    ) -> impl std::future::Future<Output = BackendResult<()>>;

    fn toggle_archive(
        &self,
        owner: &UserId,
        id: &NoteId,
    ) -> impl std::future::Future<Output = BackendResult<bool>>;

    fn theme(
        &self,
        owner: &UserId,
    ) -> impl std::future::Future<Output = BackendResult<ThemePreferences>>;

    fn set_theme(
        &self,
        owner: &UserId,
        patch: ThemePatch,
    ) -> impl std::future::Future<Output = BackendResult<ThemePreferences>>;
}
