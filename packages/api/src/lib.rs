//! # API crate — fullstack server functions for the notes app
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated
//! with `#[get(...)]` or `#[post(...)]` and compiled twice: once with the real
//! server logic (behind `#[cfg(feature = "server")]`) and once as a client
//! stub that forwards the call over HTTP.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`identity`] | `server` | Signed-in user from the environment, sign-out flag |
//! | [`state`] | `server` | Process-wide [`store::MemoryBackend`] and [`store::AppConfig`] |
//! | [`queries`] | — | Backend compositions shared by several server functions |
//!
//! ## Server functions
//!
//! - **Identity**: `get_current_user`, `login`, `logout`
//! - **Configuration**: `get_config`
//! - **Queries**: `get_notes`, `get_note`, `search_notes`, `get_user_tags`, `get_theme`
//! - **Mutations**: `create_note`, `update_note`, `delete_note`, `toggle_archive`, `set_theme`
//!
//! Every note operation is scoped to the signed-in user; a missing identity is
//! an error, never an empty result.

use dioxus::prelude::*;

#[cfg(feature = "server")]
pub mod identity;
pub mod queries;
#[cfg(feature = "server")]
pub mod state;

pub use store::{AppConfig, Note, NoteDraft, NoteId, ThemePatch, ThemePreferences, UserIdentity};

#[cfg(feature = "server")]
fn signed_in() -> Result<UserIdentity, ServerFnError> {
    identity::current_identity().map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(feature = "server")]
fn backend_error(op: &str, e: store::BackendError) -> ServerFnError {
    tracing::warn!("{} failed: {}", op, e);
    ServerFnError::new(e.to_string())
}

/// Get the signed-in user, or `None` when signed out.
#[cfg(feature = "server")]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserIdentity>, ServerFnError> {
    match identity::current_identity() {
        Ok(user) => Ok(Some(user)),
        Err(identity::IdentityError::SignedOut) => Ok(None),
        Err(e) => {
            tracing::error!("Identity provider misconfigured: {}", e);
            Err(ServerFnError::new(e.to_string()))
        }
    }
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserIdentity>, ServerFnError> {
    Ok(None)
}

/// Sign the current user out.
#[cfg(feature = "server")]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    identity::sign_out();
    tracing::info!("User signed out");
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Start a new session for the configured identity.
#[cfg(feature = "server")]
#[post("/api/auth/login")]
pub async fn login() -> Result<UserIdentity, ServerFnError> {
    let user = identity::sign_in().map_err(|e| {
        tracing::error!("Sign-in failed: {}", e);
        ServerFnError::new(e.to_string())
    })?;
    tracing::info!("User signed in: {}", user.display_name());
    Ok(user)
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login() -> Result<UserIdentity, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Client-facing configuration (timers, breakpoints, share origin).
#[cfg(feature = "server")]
#[get("/api/config")]
pub async fn get_config() -> Result<AppConfig, ServerFnError> {
    Ok(state::config().clone())
}

#[cfg(not(feature = "server"))]
#[get("/api/config")]
pub async fn get_config() -> Result<AppConfig, ServerFnError> {
    Ok(AppConfig::default())
}

/// Notes of the signed-in user with the given archive flag.
#[cfg(feature = "server")]
#[post("/api/notes/list")]
pub async fn get_notes(archived: bool) -> Result<Vec<Note>, ServerFnError> {
    use store::NoteBackend;

    let user = signed_in()?;
    state::backend()
        .notes(&user.id, archived)
        .await
        .map_err(|e| backend_error("get_notes", e))
}

#[cfg(not(feature = "server"))]
#[post("/api/notes/list")]
pub async fn get_notes(archived: bool) -> Result<Vec<Note>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// One note of the signed-in user, archived or not.
#[cfg(feature = "server")]
#[post("/api/notes/get")]
pub async fn get_note(id: NoteId) -> Result<Option<Note>, ServerFnError> {
    let user = signed_in()?;
    queries::find_note(state::backend(), &user.id, &id)
        .await
        .map_err(|e| backend_error("get_note", e))
}

#[cfg(not(feature = "server"))]
#[post("/api/notes/get")]
pub async fn get_note(id: NoteId) -> Result<Option<Note>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Free-text search over the signed-in user's active notes.
#[cfg(feature = "server")]
#[post("/api/notes/search")]
pub async fn search_notes(term: String) -> Result<Vec<Note>, ServerFnError> {
    use store::NoteBackend;

    let user = signed_in()?;
    state::backend()
        .search_notes(&user.id, term.trim())
        .await
        .map_err(|e| backend_error("search_notes", e))
}

#[cfg(not(feature = "server"))]
#[post("/api/notes/search")]
pub async fn search_notes(term: String) -> Result<Vec<Note>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Distinct tags across the signed-in user's notes.
#[cfg(feature = "server")]
#[get("/api/tags")]
pub async fn get_user_tags() -> Result<Vec<String>, ServerFnError> {
    use store::NoteBackend;

    let user = signed_in()?;
    state::backend()
        .user_tags(&user.id)
        .await
        .map_err(|e| backend_error("get_user_tags", e))
}

#[cfg(not(feature = "server"))]
#[get("/api/tags")]
pub async fn get_user_tags() -> Result<Vec<String>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/notes/create")]
pub async fn create_note(draft: NoteDraft) -> Result<NoteId, ServerFnError> {
    use store::NoteBackend;

    let user = signed_in()?;
    let id = state::backend()
        .create_note(&user.id, draft)
        .await
        .map_err(|e| backend_error("create_note", e))?;
    tracing::info!("Created note {}", id);
    Ok(id)
}

#[cfg(not(feature = "server"))]
#[post("/api/notes/create")]
pub async fn create_note(draft: NoteDraft) -> Result<NoteId, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/notes/update")]
pub async fn update_note(id: NoteId, draft: NoteDraft) -> Result<(), ServerFnError> {
    use store::NoteBackend;

    let user = signed_in()?;
    state::backend()
        .update_note(&user.id, &id, draft)
        .await
        .map_err(|e| backend_error("update_note", e))
}

#[cfg(not(feature = "server"))]
#[post("/api/notes/update")]
pub async fn update_note(id: NoteId, draft: NoteDraft) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/notes/delete")]
pub async fn delete_note(id: NoteId) -> Result<(), ServerFnError> {
    use store::NoteBackend;

    let user = signed_in()?;
    state::backend()
        .delete_note(&user.id, &id)
        .await
        .map_err(|e| backend_error("delete_note", e))?;
    tracing::info!("Deleted note {}", id);
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/notes/delete")]
pub async fn delete_note(id: NoteId) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Flip the archive flag; returns the new value.
#[cfg(feature = "server")]
#[post("/api/notes/archive")]
pub async fn toggle_archive(id: NoteId) -> Result<bool, ServerFnError> {
    use store::NoteBackend;

    let user = signed_in()?;
    state::backend()
        .toggle_archive(&user.id, &id)
        .await
        .map_err(|e| backend_error("toggle_archive", e))
}

#[cfg(not(feature = "server"))]
#[post("/api/notes/archive")]
pub async fn toggle_archive(id: NoteId) -> Result<bool, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/theme")]
pub async fn get_theme() -> Result<ThemePreferences, ServerFnError> {
    use store::NoteBackend;

    let user = signed_in()?;
    state::backend()
        .theme(&user.id)
        .await
        .map_err(|e| backend_error("get_theme", e))
}

#[cfg(not(feature = "server"))]
#[get("/api/theme")]
pub async fn get_theme() -> Result<ThemePreferences, ServerFnError> {
    Ok(ThemePreferences::default())
}

#[cfg(feature = "server")]
#[post("/api/theme")]
pub async fn set_theme(patch: ThemePatch) -> Result<ThemePreferences, ServerFnError> {
    use store::NoteBackend;

    let user = signed_in()?;
    state::backend()
        .set_theme(&user.id, patch)
        .await
        .map_err(|e| backend_error("set_theme", e))
}

#[cfg(not(feature = "server"))]
#[post("/api/theme")]
pub async fn set_theme(patch: ThemePatch) -> Result<ThemePreferences, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
