//! Route components. Each one forwards to the shared view in `ui`.

use dioxus::prelude::*;
use store::{NavTarget, NoteId};
use ui::{AppLayout, Navigation, RequireAuth};

use crate::Route;

/// Layout around every route: provides navigation to the shared UI and
/// keeps signed-out clients on the sign-in screen.
#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();
    let go = use_callback(move |target: NavTarget| {
        nav.push(Route::from(target));
    });
    use_context_provider(|| Navigation::new(go));

    rsx! {
        RequireAuth {
            AppLayout {
                current_path: route.to_string(),
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
pub fn Notes() -> Element {
    rsx! { ui::views::NotesView {} }
}

#[component]
pub fn Archived() -> Element {
    rsx! { ui::views::ArchiveView {} }
}

#[component]
pub fn Search() -> Element {
    rsx! { ui::views::SearchView {} }
}

#[component]
pub fn Settings() -> Element {
    rsx! { ui::views::SettingsView {} }
}

#[component]
pub fn TagNotes(tag: String) -> Element {
    rsx! { ui::views::TagView { tag } }
}

#[component]
pub fn NoteDetail(note_id: String) -> Element {
    rsx! { ui::views::EditorView { note_id: Some(NoteId(note_id)) } }
}

#[component]
pub fn NewNote() -> Element {
    rsx! { ui::views::EditorView { note_id: None } }
}
