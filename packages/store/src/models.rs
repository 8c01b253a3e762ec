//! # Domain models for notes and their owners
//!
//! These types cross the server/client boundary through Dioxus server
//! functions, so every one of them is `Serialize + Deserialize`.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Note`] | A user-owned record: title, rich-text content (HTML markup), tags, archive flag, last update time. |
//! | [`NoteDraft`] | The normalized payload sent on create and update. |
//! | [`UserIdentity`] | The authenticated user as reported by the identity provider. |
//!
//! Identifiers are opaque strings assigned by the backend; the newtypes only
//! exist so a note id can never be passed where a user id is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tags::parse_tags;

/// Backend-assigned note identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub String);

/// Identity-provider user identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A note as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub owner: UserId,
    pub title: String,
    /// Rich-text body as HTML markup.
    pub content: String,
    pub tags: Vec<String>,
    pub is_archived: bool,
    /// Milliseconds since the Unix epoch.
    pub updated_at: i64,
}

/// Normalized create/update payload.
///
/// Title and content are trimmed, tags are split and cleaned. Building one
/// through [`NoteDraft::from_input`] is the only way the editor talks to the
/// backend, so stored tags always satisfy the trimmed-non-empty invariant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl NoteDraft {
    /// Build a draft from raw editor fields; `tags_input` is the comma-separated tag field.
    pub fn from_input(title: &str, content: &str, tags_input: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            tags: parse_tags(tags_input),
        }
    }
}

/// The current user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: UserId,
    pub name: Option<String>,
    pub email: String,
}

impl UserIdentity {
    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_trims_and_normalizes() {
        let draft = NoteDraft::from_input("  Plan  ", "<p>body</p>\n", " react, , notes ,ideas ");
        assert_eq!(draft.title, "Plan");
        assert_eq!(draft.content, "<p>body</p>");
        assert_eq!(draft.tags, vec!["react", "notes", "ideas"]);
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut user = UserIdentity {
            id: UserId::new("u1"),
            name: None,
            email: "ada@example.com".to_string(),
        };
        assert_eq!(user.display_name(), "ada@example.com");
        user.name = Some("Ada".to_string());
        assert_eq!(user.display_name(), "Ada");
    }

    #[test]
    fn ids_serialize_transparently() {
        #[derive(Serialize)]
        struct Wrapper {
            id: NoteId,
        }
        let doc = toml::to_string(&Wrapper { id: NoteId::new("n42") }).unwrap();
        assert_eq!(doc.trim(), "id = \"n42\"");
    }
}
