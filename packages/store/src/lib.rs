//! Client-side state for the notes application.
//!
//! Everything here is platform independent: the web, server and test builds
//! all share the same note model, filtering rules and editor state machine.
//! Persistence lives behind [`NoteBackend`]; [`MemoryBackend`] is the
//! in-process implementation used by the server functions and the tests.

pub mod autosave;
pub mod backend;
pub mod clock;
pub mod config;
pub mod editor;
pub mod filter;
pub mod format;
pub mod models;
pub mod selection;
pub mod share;
pub mod shortcuts;
pub mod tags;
pub mod theme;

mod memory;
pub use memory::MemoryBackend;

pub use autosave::{Debouncer, Ticket};
pub use backend::{BackendError, NoteBackend};
pub use config::AppConfig;
pub use editor::{EditMode, EditSession, EditState, LeaveGuard, SaveRequest, SaveTrigger, ValidationError};
pub use filter::{filter_notes, matches, with_tag, SearchStats};
pub use models::{Note, NoteDraft, NoteId, UserId, UserIdentity};
pub use selection::{NoteListView, SelectAction, Viewport};
pub use shortcuts::{EditorCommand, HelpPanel, KeyChord, NavTarget, Shortcut, ShortcutAction};
pub use theme::{AppearanceMode, ColorTheme, FontTheme, ThemePatch, ThemePreferences};
