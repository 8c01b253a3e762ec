use dioxus::prelude::*;
use store::NavTarget;

use crate::icons::{FaBoxArchive, FaGear, FaMagnifyingGlass, FaNoteSticky, FaPlus};
use crate::sidebar::NavLink;
use crate::Icon;

/// Bottom navigation bar shown instead of the sidebar on narrow viewports.
#[component]
pub fn MobileNav(current_path: String) -> Element {
    rsx! {
        nav {
            class: "mobile-nav",
            NavLink {
                target: NavTarget::AllNotes,
                current_path: current_path.clone(),
                label: "Notes",
                Icon { icon: FaNoteSticky, width: 16, height: 16 }
            }
            NavLink {
                target: NavTarget::Archived,
                current_path: current_path.clone(),
                label: "Archive",
                Icon { icon: FaBoxArchive, width: 16, height: 16 }
            }
            NavLink {
                target: NavTarget::NewNote,
                current_path: current_path.clone(),
                label: "New",
                Icon { icon: FaPlus, width: 16, height: 16 }
            }
            NavLink {
                target: NavTarget::Search,
                current_path: current_path.clone(),
                label: "Search",
                Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
            }
            NavLink {
                target: NavTarget::Settings,
                current_path: current_path.clone(),
                label: "Settings",
                Icon { icon: FaGear, width: 16, height: 16 }
            }
        }
    }
}
