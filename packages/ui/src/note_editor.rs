//! Editor shell for one note.
//!
//! Local edits live in an [`EditSession`]; the server is only told about
//! them through [`EditSession::begin_save`]. Existing notes are auto-saved
//! once edits settle for the configured delay; new notes are only saved
//! explicitly.

use std::sync::atomic::{AtomicU64, Ordering};

use api::{Note, NoteId};
use dioxus::prelude::*;
use store::clock::now_ms;
use store::format::format_timestamp;
use store::shortcuts::{dispatch_editor, EDITOR_KEYS};
use store::{
    BackendError, Debouncer, EditSession, EditorCommand, KeyChord, LeaveGuard, NavTarget, SaveRequest, SaveTrigger,
    ValidationError,
};

use crate::app_config::use_app_config;
use crate::browser::{listener_key, remove_document_listener, set_unload_guard};
use crate::icons::{FaArrowLeft, FaBoxArchive, FaBoxOpen, FaFloppyDisk, FaTrashCan};
use crate::navigation::{use_navigation, Navigation};
use crate::notes_data::{use_notes_version, NotesVersion};
use crate::notifications::{notify, notify_error, use_notifications, Level, Notifications};
use crate::rich_text::{EditorHandle, FormattingToolbar, RichTextEditor};
use crate::timer::sleep;
use crate::views::ConfirmDialog;
use crate::Icon;

const EDITOR_CSS: Asset = asset!("/assets/styling/editor.css");

static EDITOR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Handles shared by every event in the editor.
#[derive(Clone, Copy)]
struct Editor {
    session: Signal<EditSession>,
    debouncer: Signal<Debouncer>,
    nav: Navigation,
    version: NotesVersion,
    notifications: Signal<Notifications>,
}

impl Editor {
    /// Re-arm the auto-save timer after an edit.
    fn edited(mut self) {
        if !self.session.peek().wants_autosave() {
            return;
        }
        let ticket = self.debouncer.write().schedule(now_ms());
        let delay = self.debouncer.peek().delay();
        spawn(async move {
            sleep(delay).await;
            if self.debouncer.write().claim(ticket) {
                self.save(SaveTrigger::Auto);
            }
        });
    }

    fn save(mut self, trigger: SaveTrigger) {
        let begun = self.session.write().begin_save(trigger);
        let request = match begun {
            Ok(request) => request,
            Err(ValidationError::SaveInProgress) if self.session.peek().has_queued_manual() => {
                notify(self.notifications, Level::Info, "Saving once the current save finishes");
                return;
            }
            Err(e) => {
                if trigger == SaveTrigger::Manual {
                    tracing::debug!("Save rejected: {}", e);
                }
                return;
            }
        };
        self.debouncer.write().cancel();

        spawn(async move {
            let result = match request {
                SaveRequest::Create(draft) => api::create_note(draft).await.map(Some),
                SaveRequest::Update(id, draft) => api::update_note(id, draft).await.map(|()| None),
            };
            match result {
                Ok(created) => {
                    let is_new = created.is_some();
                    if let Some(id) = created {
                        self.session.write().attach(id);
                    }
                    let navigate = self.session.write().finish_save(Ok(()), now_ms());
                    self.version.invalidate();
                    if navigate {
                        let message = if is_new { "Note created" } else { "Note saved" };
                        notify(self.notifications, Level::Success, message);
                        self.nav.go(NavTarget::AllNotes);
                    } else if self.session.write().take_queued_manual() {
                        self.save(SaveTrigger::Manual);
                    } else {
                        // Edits that arrived mid-save still need saving.
                        self.edited();
                    }
                }
                Err(e) => {
                    let error = BackendError::Unavailable(e.to_string());
                    self.session.write().finish_save(Err(error), now_ms());
                    notify_error(self.notifications, format!("Failed to save note: {e}"));
                }
            }
        });
    }
}

#[component]
pub fn NoteEditor(
    /// `None` edits a new, unsaved note.
    note_id: Option<NoteId>,
) -> Element {
    let config = use_app_config();
    let notifications = use_notifications();
    let nav = use_navigation();
    let version = use_notes_version();

    let is_new = note_id.is_none();
    let session = use_signal({
        let note_id = note_id.clone();
        move || match note_id {
            Some(id) => EditSession::existing(id),
            None => EditSession::new_note(),
        }
    });
    let mut debouncer = use_signal(|| Debouncer::new(config.peek().autosave_delay()));
    use_effect(move || {
        let delay = config().autosave_delay();
        if debouncer.peek().delay() != delay {
            debouncer.set(Debouncer::new(delay));
        }
    });

    let editor = Editor {
        session,
        debouncer,
        nav,
        version,
        notifications,
    };

    let mut fetched = use_signal(|| Option::<Note>::None);
    let mut missing = use_signal(|| false);
    let mut handle = use_signal(|| Option::<EditorHandle>::None);
    let mut confirm_leave = use_signal(|| false);
    let mut confirm_delete = use_signal(|| false);

    let _loader = use_resource(move || {
        let note_id = note_id.clone();
        let mut session = session;
        async move {
            let Some(id) = note_id else {
                return;
            };
            match api::get_note(id).await {
                Ok(Some(note)) => {
                    session.write().load(&note);
                    fetched.set(Some(note));
                }
                Ok(None) => missing.set(true),
                Err(e) => {
                    notify_error(notifications, format!("Failed to load note: {e}"));
                    missing.set(true);
                }
            }
        }
    });

    use_effect(move || set_unload_guard(session().is_modified()));

    let mut cancel = move || match session.peek().leave() {
        LeaveGuard::Leave => nav.go(NavTarget::AllNotes),
        LeaveGuard::Confirm => confirm_leave.set(true),
    };

    // Editor shortcuts apply wherever focus is, so they listen on the document.
    let listener = use_hook(|| {
        let n = EDITOR_COUNTER.fetch_add(1, Ordering::Relaxed);
        listener_key(&format!("note-editor-{n}"), "keydown")
    });
    use_drop({
        let listener = listener.clone();
        move || {
            set_unload_guard(false);
            remove_document_listener(&listener);
        }
    });
    use_future({
        let listener = listener.clone();
        move || {
            let listener = listener.clone();
            async move {
                let keys: Vec<String> = EDITOR_KEYS.iter().map(|k| k.to_lowercase()).collect();
                let js = format!(
                    r#"const key = await dioxus.recv();
                    const keys = {keys:?};
                    const handler = function(e) {{
                        const k = e.key.toLowerCase();
                        if (!keys.includes(k)) return;
                        if (k !== 'escape' && !(e.ctrlKey || e.metaKey)) return;
                        e.preventDefault();
                        dioxus.send({{ key: e.key, ctrl: e.ctrlKey, meta: e.metaKey }});
                    }};
                    const registry = window.__notesListeners || (window.__notesListeners = {{}});
                    registry[key] = ['keydown', handler];
                    document.addEventListener('keydown', handler);"#
                );
                let mut eval = document::eval(&js);
                if let Err(e) = eval.send(listener) {
                    tracing::error!("Failed to start editor shortcuts: {}", e);
                    return;
                }
                while let Ok(chord) = eval.recv::<KeyChord>().await {
                    match dispatch_editor(&chord) {
                        Some(EditorCommand::Save) => editor.save(SaveTrigger::Manual),
                        Some(EditorCommand::Cancel) => cancel(),
                        None => {}
                    }
                }
            }
        }
    });

    let toggle_archive = move |_| {
        let Some(note) = fetched() else {
            return;
        };
        spawn(async move {
            match api::toggle_archive(note.id.clone()).await {
                Ok(archived) => {
                    fetched.set(Some(Note {
                        is_archived: archived,
                        ..note
                    }));
                    let message = if archived { "Note archived" } else { "Note restored" };
                    notify(notifications, Level::Success, message);
                    version.invalidate();
                }
                Err(e) => notify_error(notifications, format!("Failed to update note: {e}")),
            }
        });
    };

    let delete = move |_| {
        confirm_delete.set(false);
        let Some(note) = fetched() else {
            return;
        };
        spawn(async move {
            match api::delete_note(note.id).await {
                Ok(()) => {
                    set_unload_guard(false);
                    notify(notifications, Level::Success, "Note deleted");
                    version.invalidate();
                    nav.go(NavTarget::AllNotes);
                }
                Err(e) => notify_error(notifications, format!("Failed to delete note: {e}")),
            }
        });
    };

    if missing() {
        return rsx! {
            div {
                class: "view-placeholder",
                h2 { "Note not found" }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| nav.go(NavTarget::AllNotes),
                    "Back to notes"
                }
            }
        };
    }

    let ready = is_new || fetched().is_some();
    if !ready {
        return rsx! {
            div { class: "view-placeholder", h2 { "Loading..." } }
        };
    }

    let current = session();
    let status = if current.is_saving() {
        Some("Saving...".to_string())
    } else {
        current
            .last_saved()
            .map(|at| format!("Saved {}", format_timestamp(Some(at), now_ms())))
    };
    let archived = fetched().map(|n| n.is_archived).unwrap_or(false);

    rsx! {
        document::Stylesheet { href: EDITOR_CSS }

        div {
            class: "editor-container",

            div {
                class: "editor-header",
                button {
                    class: "btn btn-ghost",
                    title: "Back (Esc)",
                    onclick: move |_| cancel(),
                    Icon { icon: FaArrowLeft, width: 14, height: 14 }
                }
                div {
                    class: "editor-status",
                    if current.is_modified() {
                        span { class: "badge badge-modified", "Modified" }
                    }
                    if let Some(status) = status {
                        span { class: "editor-saved", "{status}" }
                    }
                }
                div {
                    class: "editor-actions",
                    if !is_new {
                        button {
                            class: "btn btn-ghost",
                            title: if archived { "Unarchive" } else { "Archive" },
                            onclick: toggle_archive,
                            if archived {
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
                    button {
                        class: "btn btn-primary",
                        title: "Save (Ctrl/Cmd+S)",
                        disabled: current.is_saving(),
                        onclick: move |_| editor.save(SaveTrigger::Manual),
                        Icon { icon: FaFloppyDisk, width: 14, height: 14 }
                        span { if is_new { "Create" } else { "Save" } }
                    }
                }
            }

            input {
                class: "editor-title",
                r#type: "text",
                placeholder: "Note title",
                autofocus: is_new,
                value: "{current.title}",
                oninput: move |evt: FormEvent| {
                    let mut session = session;
                    session.write().set_title(evt.value());
                    editor.edited();
                },
            }
            if let Some(error) = current.last_error() {
                p { class: "editor-error", "{error}" }
            }

            input {
                class: "editor-tags",
                r#type: "text",
                placeholder: "Tags, separated by commas",
                value: "{current.tags}",
                oninput: move |evt: FormEvent| {
                    let mut session = session;
                    session.write().set_tags(evt.value());
                    editor.edited();
                },
            }

            if let Some(handle) = handle() {
                FormattingToolbar { handle: handle }
            }
            RichTextEditor {
                initial: current.content.clone(),
                on_ready: move |h| handle.set(Some(h)),
                on_change: move |html: String| {
                    let mut session = session;
                    session.write().set_content(html);
                    editor.edited();
                },
            }
        }

        if confirm_leave() {
            ConfirmDialog {
                title: "Discard changes?",
                message: "You have unsaved changes. Leave the editor anyway?",
                confirm_label: "Leave",
                destructive: true,
                on_confirm: move |_| {
                    confirm_leave.set(false);
                    set_unload_guard(false);
                    nav.go(NavTarget::AllNotes);
                },
                on_cancel: move |_| confirm_leave.set(false),
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
    }
}
