use api::NoteId;
use dioxus::prelude::*;

use crate::note_editor::NoteEditor;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// `/note/:id` and `/new`. Keyed on the id so switching notes starts a
/// fresh edit session.
#[component]
pub fn EditorView(note_id: Option<NoteId>) -> Element {
    let key = note_id.as_ref().map(|id| id.to_string()).unwrap_or_else(|| "new".to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page editor-page",
            NoteEditor { key: "{key}", note_id: note_id }
        }
    }
}
