//! Shared UI for the notes application.
//!
//! The platform crate mounts the providers in this order and renders its
//! routes inside [`AppLayout`]:
//!
//! ```text
//! NotificationHost > ConfigProvider > AuthProvider > ThemeProvider > (Navigation context) > RequireAuth > AppLayout
//! ```

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

mod timer;

mod browser;

mod app_config;
pub use app_config::{use_app_config, ConfigProvider};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, RequireAuth, SignInButton, SignOutButton};

mod theme;
pub use theme::{use_theme, ThemeContext, ThemeProvider};

pub mod notifications;
pub use notifications::{notify, notify_error, use_notifications, Level, NotificationHost};

mod navigation;
pub use navigation::{use_navigation, Navigation};

mod notes_data;
pub use notes_data::{use_note_search, use_notes, use_notes_version, use_tags, NotesVersion};

mod layout;
pub use layout::{use_viewport, AppLayout};

mod sidebar;
pub use sidebar::AppSidebar;

mod mobile_nav;
pub use mobile_nav::MobileNav;

mod notes_list;
pub use notes_list::NotesList;

mod note_preview;
pub use note_preview::NotePreview;

mod note_browser;
pub use note_browser::NoteBrowser;

mod share_dialog;
pub use share_dialog::ShareDialog;

pub mod rich_text;
pub use rich_text::{EditorHandle, FormattingToolbar, RichTextEditor};

mod note_editor;
pub use note_editor::NoteEditor;
