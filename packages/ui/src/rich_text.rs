//! # Rich-text editing surface
//!
//! [`RichTextEditor`] owns a `contenteditable` element and the browser's
//! editing engine behind it. Its parent never touches that engine: on mount
//! the editor hands out an [`EditorHandle`], a narrow command interface
//! (toggle marks and blocks, insert a link, undo, redo) plus a read-only
//! view of which marks are active at the caret.
//!
//! Traffic with the page goes through one long-lived eval bridge. The
//! script sends `change` messages with the new markup after every input
//! and `marks` messages whenever the selection moves. The document-level
//! selection listener is removed when the editor unmounts.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use serde::Deserialize;

use crate::browser::{listener_key, remove_document_listener};

static EDITOR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Marks and blocks the toolbar can toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strike,
    Code,
    Heading(u8),
    BulletList,
    OrderedList,
    Quote,
}

impl Mark {
    /// Name reported by the page for an active mark.
    fn name(self) -> String {
        match self {
            Mark::Bold => "bold".into(),
            Mark::Italic => "italic".into(),
            Mark::Underline => "underline".into(),
            Mark::Strike => "strikeThrough".into(),
            Mark::Code => "pre".into(),
            Mark::Heading(level) => format!("h{level}"),
            Mark::BulletList => "insertUnorderedList".into(),
            Mark::OrderedList => "insertOrderedList".into(),
            Mark::Quote => "blockquote".into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum BridgeEvent {
    Change { html: String },
    Marks { active: Vec<String> },
}

/// Command interface onto a mounted [`RichTextEditor`].
#[derive(Clone, Copy, PartialEq)]
pub struct EditorHandle {
    id: Signal<String>,
    active: Signal<Vec<String>>,
}

impl EditorHandle {
    pub fn toggle_bold(&self) {
        self.exec("bold", None);
    }

    pub fn toggle_italic(&self) {
        self.exec("italic", None);
    }

    pub fn toggle_underline(&self) {
        self.exec("underline", None);
    }

    pub fn toggle_strike(&self) {
        self.exec("strikeThrough", None);
    }

    pub fn toggle_code(&self) {
        self.toggle_block(Mark::Code, "pre");
    }

    /// Toggle a heading of `level` (1 to 3).
    pub fn toggle_heading(&self, level: u8) {
        let level = level.clamp(1, 3);
        self.toggle_block(Mark::Heading(level), &format!("h{level}"));
    }

    pub fn toggle_bullet_list(&self) {
        self.exec("insertUnorderedList", None);
    }

    pub fn toggle_ordered_list(&self) {
        self.exec("insertOrderedList", None);
    }

    pub fn toggle_quote(&self) {
        self.toggle_block(Mark::Quote, "blockquote");
    }

    /// Link the current selection to `url`; an empty url removes the link.
    pub fn set_link(&self, url: &str) {
        if url.trim().is_empty() {
            self.exec("unlink", None);
        } else {
            self.exec("createLink", Some(url.trim()));
        }
    }

    pub fn undo(&self) {
        self.exec("undo", None);
    }

    pub fn redo(&self) {
        self.exec("redo", None);
    }

    pub fn is_active(&self, mark: Mark) -> bool {
        let name = mark.name();
        self.active.read().iter().any(|m| *m == name)
    }

    fn toggle_block(&self, mark: Mark, tag: &str) {
        let target = if self.is_active(mark) { "p" } else { tag };
        self.exec("formatBlock", Some(target));
    }

    fn exec(&self, command: &str, arg: Option<&str>) {
        let eval = document::eval(
            r#"const [id, command, arg] = await dioxus.recv();
            const el = document.getElementById(id);
            if (el) {
                el.focus();
                document.execCommand(command, false, arg);
                el.dispatchEvent(new Event('input'));
            }"#,
        );
        if let Err(e) = eval.send((self.id.peek().clone(), command, arg)) {
            tracing::warn!("Editor command {} failed: {}", command, e);
        }
    }
}

#[component]
pub fn RichTextEditor(
    /// Markup loaded when the editor mounts.
    initial: String,
    on_change: EventHandler<String>,
    on_ready: EventHandler<EditorHandle>,
    #[props(default = "Start writing...".to_string())] placeholder: String,
) -> Element {
    let id = use_signal(|| {
        let n = EDITOR_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("rich-text-{n}")
    });
    let mut active = use_signal(Vec::<String>::new);

    use_effect(move || on_ready.call(EditorHandle { id, active }));
    let selection_key = use_hook(|| listener_key(&id.peek(), "selectionchange"));
    use_drop({
        let key = selection_key.clone();
        move || remove_document_listener(&key)
    });

    use_future(move || {
        let initial = initial.clone();
        let key = selection_key.clone();
        async move {
            let mut eval = document::eval(
                r#"const [id, html, key] = await dioxus.recv();
                const el = document.getElementById(id);
                if (el) {
                    const marks = ['bold', 'italic', 'underline', 'strikeThrough',
                        'insertUnorderedList', 'insertOrderedList'];
                    el.innerHTML = html;
                    el.addEventListener('input', function() {
                        dioxus.send({ kind: 'change', html: el.innerHTML });
                    });
                    const onSelection = function() {
                        const sel = document.getSelection();
                        if (!sel || !el.contains(sel.anchorNode)) return;
                        const active = marks.filter(function(m) { return document.queryCommandState(m); });
                        const block = String(document.queryCommandValue('formatBlock') || '').toLowerCase();
                        if (block) active.push(block);
                        dioxus.send({ kind: 'marks', active: active });
                    };
                    const registry = window.__notesListeners || (window.__notesListeners = {});
                    registry[key] = ['selectionchange', onSelection];
                    document.addEventListener('selectionchange', onSelection);
                }"#,
            );
            if let Err(e) = eval.send((id.peek().clone(), initial, key)) {
                tracing::error!("Failed to start editor bridge: {}", e);
                return;
            }
            while let Ok(event) = eval.recv::<BridgeEvent>().await {
                match event {
                    BridgeEvent::Change { html } => on_change.call(html),
                    BridgeEvent::Marks { active: marks } => active.set(marks),
                }
            }
        }
    });

    rsx! {
        div {
            id: "{id}",
            class: "rich-text rich-text-editor",
            contenteditable: "true",
            "data-placeholder": "{placeholder}",
        }
    }
}

/// Formatting buttons driving an [`EditorHandle`].
#[component]
pub fn FormattingToolbar(handle: EditorHandle) -> Element {
    let mut link_url = use_signal(|| Option::<String>::None);

    let button_class = move |mark: Mark| {
        if handle.is_active(mark) {
            "toolbar-button active"
        } else {
            "toolbar-button"
        }
    };

    rsx! {
        div {
            class: "formatting-toolbar",
            onmousedown: move |evt: Event<MouseData>| evt.prevent_default(),
            button { class: button_class(Mark::Bold), title: "Bold", onclick: move |_| handle.toggle_bold(), b { "B" } }
            button { class: button_class(Mark::Italic), title: "Italic", onclick: move |_| handle.toggle_italic(), i { "I" } }
            button { class: button_class(Mark::Underline), title: "Underline", onclick: move |_| handle.toggle_underline(), u { "U" } }
            button { class: button_class(Mark::Strike), title: "Strikethrough", onclick: move |_| handle.toggle_strike(), s { "S" } }
            button { class: button_class(Mark::Code), title: "Code", onclick: move |_| handle.toggle_code(), code { "</>" } }
            span { class: "toolbar-separator" }
            for level in 1..=3u8 {
                button {
                    key: "{level}",
                    class: button_class(Mark::Heading(level)),
                    title: "Heading {level}",
                    onclick: move |_| handle.toggle_heading(level),
                    "H{level}"
                }
            }
            span { class: "toolbar-separator" }
            button { class: button_class(Mark::BulletList), title: "Bullet list", onclick: move |_| handle.toggle_bullet_list(), "\u{2022}" }
            button { class: button_class(Mark::OrderedList), title: "Numbered list", onclick: move |_| handle.toggle_ordered_list(), "1." }
            button { class: button_class(Mark::Quote), title: "Quote", onclick: move |_| handle.toggle_quote(), "\u{201C}" }
            button { class: "toolbar-button", title: "Link", onclick: move |_| link_url.set(Some(String::new())), "\u{1F517}" }
            span { class: "toolbar-separator" }
            button { class: "toolbar-button", title: "Undo", onclick: move |_| handle.undo(), "\u{21B6}" }
            button { class: "toolbar-button", title: "Redo", onclick: move |_| handle.redo(), "\u{21B7}" }

            if let Some(url) = link_url() {
                div {
                    class: "toolbar-link",
                    input {
                        class: "input",
                        r#type: "url",
                        placeholder: "https://",
                        value: "{url}",
                        oninput: move |evt: FormEvent| link_url.set(Some(evt.value())),
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            handle.set_link(&url);
                            link_url.set(None);
                        },
                        "Apply"
                    }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| link_url.set(None),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_events_decode() {
        let change: BridgeEvent = serde_json::from_str(r#"{"kind":"change","html":"<p>hi</p>"}"#).unwrap();
        assert!(matches!(change, BridgeEvent::Change { html } if html == "<p>hi</p>"));

        let marks: BridgeEvent = serde_json::from_str(r#"{"kind":"marks","active":["bold","h2"]}"#).unwrap();
        assert!(matches!(marks, BridgeEvent::Marks { active } if active == ["bold", "h2"]));
    }

    #[test]
    fn mark_names_match_page_reports() {
        assert_eq!(Mark::Heading(2).name(), "h2");
        assert_eq!(Mark::Strike.name(), "strikeThrough");
        assert_eq!(Mark::Quote.name(), "blockquote");
    }
}
