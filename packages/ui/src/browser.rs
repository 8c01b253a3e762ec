//! Small browser capabilities reached through `document::eval`.
//!
//! Values travel over the eval channel (`dioxus.recv()` / `dioxus.send()`)
//! instead of being spliced into the script text.

use dioxus::prelude::*;

/// Write `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let mut eval = document::eval(
        r#"const text = await dioxus.recv();
        try {
            await navigator.clipboard.writeText(text);
            dioxus.send(null);
        } catch (e) {
            dioxus.send(String(e));
        }"#,
    );
    eval.send(text).map_err(|e| e.to_string())?;
    match eval.recv::<Option<String>>().await {
        Ok(None) => Ok(()),
        Ok(Some(err)) => Err(err),
        Err(e) => Err(e.to_string()),
    }
}

/// Open `url` in a new browser context.
pub fn open_window(url: &str) {
    let eval = document::eval(
        r#"const url = await dioxus.recv();
        window.open(url, '_blank', 'noopener,noreferrer');"#,
    );
    if let Err(e) = eval.send(url) {
        tracing::warn!("Failed to open {}: {}", url, e);
    }
}

/// `window.location.origin`, if the page has one.
pub async fn page_origin() -> Option<String> {
    let mut eval = document::eval("dioxus.send(window.location.origin);");
    eval.recv::<String>().await.ok()
}

/// Arm or disarm the generic "leave site?" prompt on page unload.
pub fn set_unload_guard(active: bool) {
    let js = if active {
        "window.onbeforeunload = function(e) { e.preventDefault(); e.returnValue = ''; return ''; };"
    } else {
        "window.onbeforeunload = null;"
    };
    document::eval(js);
}

/// Registry key for a `document` listener owned by `owner`.
pub fn listener_key(owner: &str, event: &str) -> String {
    format!("{owner}:{event}")
}

/// Detach a `document` listener that a bridge script registered under `key`.
///
/// Bridge scripts record their handlers in `window.__notesListeners[key]` as
/// `[eventType, handler]` so they can be removed when the owner unmounts.
pub fn remove_document_listener(key: &str) {
    let eval = document::eval(
        r#"const key = await dioxus.recv();
        const registry = window.__notesListeners || {};
        const entry = registry[key];
        if (entry) {
            document.removeEventListener(entry[0], entry[1]);
            delete registry[key];
        }"#,
    );
    if let Err(e) = eval.send(key) {
        tracing::warn!("Failed to remove listener {}: {}", key, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listener_keys_are_scoped_to_owner_and_event() {
        assert_eq!(listener_key("rich-text-3", "selectionchange"), "rich-text-3:selectionchange");
        assert_ne!(
            listener_key("rich-text-3", "selectionchange"),
            listener_key("rich-text-4", "selectionchange")
        );
        assert_ne!(listener_key("note-editor-1", "keydown"), listener_key("note-editor-1", "keyup"));
    }
}
