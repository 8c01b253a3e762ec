use api::Note;
use dioxus::prelude::*;
use store::clock::now_ms;
use store::format::{format_timestamp, strip_markup};
use store::NavTarget;

use crate::browser::copy_to_clipboard;
use crate::icons::{FaBoxArchive, FaBoxOpen, FaCopy, FaPenToSquare, FaShareNodes, FaTrashCan};
use crate::navigation::use_navigation;
use crate::notes_data::use_notes_version;
use crate::notifications::{notify, notify_error, use_notifications, Level};
use crate::share_dialog::ShareDialog;
use crate::views::ConfirmDialog;
use crate::Icon;

/// Read-only view of the selected note with its actions.
#[component]
pub fn NotePreview(note: Note) -> Element {
    let nav = use_navigation();
    let version = use_notes_version();
    let notifications = use_notifications();
    let mut confirm_delete = use_signal(|| false);
    let mut sharing = use_signal(|| false);

    let id = note.id.clone();
    let archive = move |_| {
        let id = id.clone();
        spawn(async move {
            match api::toggle_archive(id).await {
                Ok(true) => notify(notifications, Level::Success, "Note archived"),
                Ok(false) => notify(notifications, Level::Success, "Note restored"),
                Err(e) => return notify_error(notifications, format!("Failed to update note: {e}")),
            }
            version.invalidate();
        });
    };

    let id = note.id.clone();
    let delete = move |_| {
        confirm_delete.set(false);
        let id = id.clone();
        spawn(async move {
            match api::delete_note(id).await {
                Ok(()) => {
                    notify(notifications, Level::Success, "Note deleted");
                    version.invalidate();
                }
                Err(e) => notify_error(notifications, format!("Failed to delete note: {e}")),
            }
        });
    };

    let plain = strip_markup(&note.content);
    let copy = move |_| {
        let plain = plain.clone();
        spawn(async move {
            match copy_to_clipboard(&plain).await {
                Ok(()) => notify(notifications, Level::Success, "Copied to clipboard"),
                Err(e) => notify_error(notifications, format!("Failed to copy: {e}")),
            }
        });
    };

    let edit_target = NavTarget::Note(note.id.clone());
    let updated = format_timestamp(Some(note.updated_at), now_ms());

    rsx! {
        article {
            class: "note-preview",
            header {
                class: "note-preview-header",
                div {
                    h2 { class: "note-preview-title", "{note.title}" }
                    span { class: "note-preview-time", "Updated {updated}" }
                }
                div {
                    class: "note-preview-actions",
                    button {
                        class: "btn btn-ghost",
                        title: "Edit",
                        onclick: move |_| nav.go(edit_target.clone()),
                        Icon { icon: FaPenToSquare, width: 14, height: 14 }
                    }
                    button {
                        class: "btn btn-ghost",
                        title: "Copy content",
                        onclick: copy,
                        Icon { icon: FaCopy, width: 14, height: 14 }
                    }
                    button {
                        class: "btn btn-ghost",
                        title: "Share",
                        onclick: move |_| sharing.set(true),
                        Icon { icon: FaShareNodes, width: 14, height: 14 }
                    }
                    button {
                        class: "btn btn-ghost",
                        title: if note.is_archived { "Unarchive" } else { "Archive" },
                        onclick: archive,
                        if note.is_archived {
                            Icon { icon: FaBoxOpen, width: 14, height: 14 }
                        } else {
                            Icon { icon: FaBoxArchive, width: 14, height: 14 }
                        }
                    }
                    button {
                        class: "btn btn-ghost danger",
                        title: "Delete",
                        onclick: move |_| confirm_delete.set(true),
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                    }
                }
            }

            if !note.tags.is_empty() {
                div {
                    class: "note-preview-tags",
                    for (i, tag) in note.tags.iter().enumerate() {
                        span { key: "{i}", class: "tag-badge", "{tag}" }
                    }
                }
            }

            div {
                class: "note-preview-content rich-text",
                dangerous_inner_html: "{note.content}",
            }
        }

        if confirm_delete() {
            ConfirmDialog {
                title: "Delete note?",
                message: "This note will be permanently deleted. This cannot be undone.",
                confirm_label: "Delete",
                destructive: true,
                on_confirm: delete,
                on_cancel: move |_| confirm_delete.set(false),
            }
        }

        if sharing() {
            ShareDialog {
                note: note.clone(),
                on_close: move |_| sharing.set(false),
            }
        }
    }
}
