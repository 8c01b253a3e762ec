//! Compositions over [`NoteBackend`] that the server functions share.

use store::{BackendError, Note, NoteBackend, NoteId, UserId};

/// Find one of the owner's notes, archived or not.
pub async fn find_note<B: NoteBackend>(
    backend: &B,
    owner: &UserId,
    id: &NoteId,
) -> Result<Option<Note>, BackendError> {
    for archived in [false, true] {
        let notes = backend.notes(owner, archived).await?;
        if let Some(note) = notes.into_iter().find(|n| &n.id == id) {
            return Ok(Some(note));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryBackend, NoteDraft};

    #[tokio::test]
    async fn test_find_note_covers_archive() {
        let backend = MemoryBackend::new();
        let owner = UserId::new("u1");
        let id = backend
            .create_note(&owner, NoteDraft::from_input("Old", "", ""))
            .await
            .unwrap();
        backend.toggle_archive(&owner, &id).await.unwrap();

        let found = find_note(&backend, &owner, &id).await.unwrap();
        assert_eq!(found.map(|n| n.title), Some("Old".to_string()));
    }

    #[tokio::test]
    async fn test_find_note_is_owner_scoped() {
        let backend = MemoryBackend::new();
        let id = backend
            .create_note(&UserId::new("u1"), NoteDraft::from_input("Mine", "", ""))
            .await
            .unwrap();

        assert!(find_note(&backend, &UserId::new("u2"), &id).await.unwrap().is_none());
        assert!(find_note(&backend, &UserId::new("u1"), &NoteId::new("nope"))
            .await
            .unwrap()
            .is_none());
    }
}
