use dioxus::prelude::*;
use store::shortcuts::is_active_path;
use store::NavTarget;

use crate::auth::{use_auth, SignOutButton};
use crate::icons::{FaBoxArchive, FaGear, FaMagnifyingGlass, FaNoteSticky, FaPlus, FaTag};
use crate::navigation::use_navigation;
use crate::notes_data::use_tags;
use crate::Icon;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

#[component]
pub fn AppSidebar(current_path: String) -> Element {
    let auth = use_auth();
    let nav = use_navigation();
    let tags = use_tags();

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        aside {
            class: "sidebar",

            div {
                class: "sidebar-header",
                span { class: "sidebar-brand", "Notes" }
                button {
                    class: "sidebar-new-note",
                    title: "New note (Ctrl/Cmd+M)",
                    onclick: move |_| nav.go(NavTarget::NewNote),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    span { "New Note" }
                }
            }

            nav {
                class: "sidebar-nav",
                NavLink {
                    target: NavTarget::AllNotes,
                    current_path: current_path.clone(),
                    label: "All Notes",
                    Icon { icon: FaNoteSticky, width: 14, height: 14 }
                }
                NavLink {
                    target: NavTarget::Archived,
                    current_path: current_path.clone(),
                    label: "Archive",
                    Icon { icon: FaBoxArchive, width: 14, height: 14 }
                }
                NavLink {
                    target: NavTarget::Search,
                    current_path: current_path.clone(),
                    label: "Search",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                }
                NavLink {
                    target: NavTarget::Settings,
                    current_path: current_path.clone(),
                    label: "Settings",
                    Icon { icon: FaGear, width: 14, height: 14 }
                }
            }

            div {
                class: "sidebar-tags",
                h4 { class: "sidebar-section-title", "Tags" }
                {match tags() {
                    None => rsx! { div { class: "sidebar-muted", "Loading..." } },
                    Some(list) if list.is_empty() => rsx! { div { class: "sidebar-muted", "No tags yet" } },
                    Some(list) => rsx! {
                        for tag in list {
                            NavLink {
                                key: "{tag}",
                                target: NavTarget::Tag(tag.clone()),
                                current_path: current_path.clone(),
                                label: tag.clone(),
                                Icon { icon: FaTag, width: 12, height: 12 }
                            }
                        }
                    },
                }}
            }

            div {
                class: "sidebar-bottom",
                if let Some(user) = auth().user {
                    div {
                        class: "sidebar-user",
                        span { class: "sidebar-user-name", "{user.display_name()}" }
                        span { class: "sidebar-user-email", "{user.email}" }
                    }
                }
                SignOutButton { class: "sidebar-bottom-item" }
            }
        }
    }
}

/// Navigation entry, highlighted when `current_path` is at or below its route.
#[component]
pub(crate) fn NavLink(target: NavTarget, current_path: String, label: String, children: Element) -> Element {
    let nav = use_navigation();
    let path = target.path();
    let active = is_active_path(&current_path, &path);

    rsx! {
        button {
            class: if active { "nav-link active" } else { "nav-link" },
            onclick: move |_| nav.go(target.clone()),
            {children}
            span { "{label}" }
        }
    }
}
