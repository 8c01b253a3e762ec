use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::Icon;

/// Search input bound to `term`.
#[component]
pub fn SearchBox(mut term: Signal<String>, #[props(default = "Search notes...".to_string())] placeholder: String) -> Element {
    rsx! {
        div {
            class: "search-box",
            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            input {
                class: "input",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{term}",
                oninput: move |evt: FormEvent| term.set(evt.value()),
            }
        }
    }
}
