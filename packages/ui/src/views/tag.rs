use api::Note;
use dioxus::prelude::*;
use store::with_tag;

use crate::notes_data::use_notes;
use crate::note_browser::NoteBrowser;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Active notes carrying `tag`, at `/tags/:tag`.
#[component]
pub fn TagView(tag: String) -> Element {
    let notes = use_notes(false);

    let mut tag_signal = use_signal(|| tag.clone());
    if *tag_signal.peek() != tag {
        tag_signal.set(tag.clone());
    }

    let visible = use_memo(move || {
        let tag = tag_signal();
        notes().map(|list| with_tag(&list, &tag).into_iter().cloned().collect::<Vec<Note>>())
    });

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            div {
                class: "view-header",
                h1 { class: "view-title", "#{tag}" }
            }
            NoteBrowser {
                notes: visible,
                empty_title: "No notes tagged \"{tag}\"",
                empty_message: "Add the tag to a note in the editor to see it here.",
            }
        }
    }
}
