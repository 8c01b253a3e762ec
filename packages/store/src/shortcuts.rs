//! # Keyboard dispatch and navigation targets
//!
//! Global shortcuts are a static table looked up by key. A chord only
//! dispatches when Ctrl (or Cmd on macOS) is held; anything unmatched is
//! ignored and must be left to the browser. The editor has its own, smaller
//! table for save and cancel.
//!
//! | Chord | Action |
//! |-------|--------|
//! | Ctrl/Cmd+1 | All notes (`/`) |
//! | Ctrl/Cmd+2 | Archive (`/archived`) |
//! | Ctrl/Cmd+3 | Search (`/search`) |
//! | Ctrl/Cmd+4 | Settings (`/settings`) |
//! | Ctrl/Cmd+M | New note (`/new`) |
//! | Ctrl/Cmd+K | Toggle the shortcut help panel |

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::NoteId;

/// A client-side route.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavTarget {
    AllNotes,
    Archived,
    Search,
    Settings,
    NewNote,
    Note(NoteId),
    Tag(String),
}

impl NavTarget {
    pub fn path(&self) -> String {
        match self {
            NavTarget::AllNotes => "/".to_string(),
            NavTarget::Archived => "/archived".to_string(),
            NavTarget::Search => "/search".to_string(),
            NavTarget::Settings => "/settings".to_string(),
            NavTarget::NewNote => "/new".to_string(),
            NavTarget::Note(id) => format!("/note/{}", urlencoding::encode(id.as_str())),
            NavTarget::Tag(tag) => format!("/tags/{}", urlencoding::encode(tag)),
        }
    }
}

/// Whether a navigation item pointing at `item_path` is active on `current_path`.
///
/// The root is only active on an exact match; every other item also covers
/// the paths below it, split on whole segments.
pub fn is_active_path(current_path: &str, item_path: &str) -> bool {
    if item_path == "/" {
        return current_path == "/";
    }
    match current_path.strip_prefix(item_path) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// A key press with its modifier state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyChord {
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub meta: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>, ctrl: bool, meta: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
            meta,
        }
    }

    /// Ctrl on Linux/Windows, Cmd on macOS.
    pub fn ctrl_or_cmd(key: impl Into<String>) -> Self {
        Self::new(key, true, false)
    }

    pub fn has_command_modifier(&self) -> bool {
        self.ctrl || self.meta
    }

    fn key_is(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShortcutAction {
    Navigate(NavTarget),
    ToggleHelp,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shortcut {
    pub key: &'static str,
    pub label: &'static str,
    pub action: ShortcutAction,
}

/// Global shortcut table, in the order the help panel lists it.
pub fn global_shortcuts() -> &'static [Shortcut] {
    use std::sync::LazyLock;
    static TABLE: LazyLock<Vec<Shortcut>> = LazyLock::new(|| {
        vec![
            Shortcut {
                key: "1",
                label: "All Notes",
                action: ShortcutAction::Navigate(NavTarget::AllNotes),
            },
            Shortcut {
                key: "2",
                label: "Archive",
                action: ShortcutAction::Navigate(NavTarget::Archived),
            },
            Shortcut {
                key: "3",
                label: "Search",
                action: ShortcutAction::Navigate(NavTarget::Search),
            },
            Shortcut {
                key: "4",
                label: "Settings",
                action: ShortcutAction::Navigate(NavTarget::Settings),
            },
            Shortcut {
                key: "m",
                label: "New Note",
                action: ShortcutAction::Navigate(NavTarget::NewNote),
            },
            Shortcut {
                key: "k",
                label: "Shortcut Help",
                action: ShortcutAction::ToggleHelp,
            },
        ]
    });
    &TABLE
}

/// Look up a global shortcut. A match means the browser default must be suppressed.
pub fn dispatch_global(chord: &KeyChord) -> Option<&'static Shortcut> {
    if !chord.has_command_modifier() {
        return None;
    }
    global_shortcuts().iter().find(|s| chord.key_is(s.key))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    Save,
    Cancel,
}

/// Keys the editor reacts to; pages pre-filter key events with this list.
pub const EDITOR_KEYS: [&str; 3] = ["s", "Enter", "Escape"];

/// Editor-local shortcuts: Ctrl/Cmd+S or Ctrl/Cmd+Enter save, Escape cancels.
pub fn dispatch_editor(chord: &KeyChord) -> Option<EditorCommand> {
    if chord.key_is("Escape") {
        return Some(EditorCommand::Cancel);
    }
    if !chord.has_command_modifier() {
        return None;
    }
    if chord.key_is("s") || chord.key_is("Enter") {
        Some(EditorCommand::Save)
    } else {
        None
    }
}

/// Default lifetime of the help panel once shown.
pub const HELP_PANEL_DURATION: Duration = Duration::from_millis(3000);

/// Transient shortcut help panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HelpPanel {
    duration: Duration,
    visible_until: Option<i64>,
}

impl HelpPanel {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            visible_until: None,
        }
    }

    pub fn show(&mut self, now: i64) {
        self.visible_until = Some(now + self.duration.as_millis() as i64);
    }

    pub fn hide(&mut self) {
        self.visible_until = None;
    }

    pub fn toggle(&mut self, now: i64) {
        if self.is_visible(now) {
            self.hide();
        } else {
            self.show(now);
        }
    }

    pub fn is_visible(&self, now: i64) -> bool {
        self.visible_until.is_some_and(|until| now < until)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for HelpPanel {
    fn default() -> Self {
        Self::new(HELP_PANEL_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_shortcuts_navigate() {
        let expected = [
            ("1", "/"),
            ("2", "/archived"),
            ("3", "/search"),
            ("4", "/settings"),
            ("m", "/new"),
        ];
        for (key, path) in expected {
            let shortcut = dispatch_global(&KeyChord::ctrl_or_cmd(key)).unwrap();
            match &shortcut.action {
                ShortcutAction::Navigate(target) => assert_eq!(target.path(), path),
                other => panic!("{key} dispatched {other:?}"),
            }
        }
    }

    #[test]
    fn cmd_works_like_ctrl_and_case_is_ignored() {
        let chord = KeyChord::new("M", false, true);
        assert_eq!(
            dispatch_global(&chord).map(|s| &s.action),
            Some(&ShortcutAction::Navigate(NavTarget::NewNote))
        );
        assert_eq!(
            dispatch_global(&KeyChord::ctrl_or_cmd("k")).map(|s| &s.action),
            Some(&ShortcutAction::ToggleHelp)
        );
    }

    #[test]
    fn unmatched_or_unmodified_keys_are_ignored() {
        assert!(dispatch_global(&KeyChord::new("1", false, false)).is_none());
        assert!(dispatch_global(&KeyChord::ctrl_or_cmd("5")).is_none());
        assert!(dispatch_global(&KeyChord::ctrl_or_cmd("s")).is_none());
    }

    #[test]
    fn editor_table() {
        assert_eq!(dispatch_editor(&KeyChord::ctrl_or_cmd("s")), Some(EditorCommand::Save));
        assert_eq!(dispatch_editor(&KeyChord::new("Enter", false, true)), Some(EditorCommand::Save));
        assert_eq!(dispatch_editor(&KeyChord::new("Escape", false, false)), Some(EditorCommand::Cancel));
        assert_eq!(dispatch_editor(&KeyChord::ctrl_or_cmd("Escape")), Some(EditorCommand::Cancel));
        assert_eq!(dispatch_editor(&KeyChord::new("s", false, false)), None);
        assert_eq!(dispatch_editor(&KeyChord::new("Enter", false, false)), None);
    }

    #[test]
    fn editor_keys_cover_the_editor_table() {
        for key in EDITOR_KEYS {
            assert!(dispatch_editor(&KeyChord::ctrl_or_cmd(key)).is_some(), "{key}");
            assert!(dispatch_editor(&KeyChord::new(key, false, true)).is_some(), "{key}");
        }
        for key in ["a", "k", "1", "Tab"] {
            assert!(!EDITOR_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key)));
            assert_eq!(dispatch_editor(&KeyChord::ctrl_or_cmd(key)), None);
        }
    }

    #[test]
    fn help_panel_expires_after_window() {
        let mut panel = HelpPanel::default();
        assert!(!panel.is_visible(0));
        panel.show(1000);
        assert!(panel.is_visible(1000));
        assert!(panel.is_visible(3999));
        assert!(!panel.is_visible(4000));
    }

    #[test]
    fn help_panel_toggles() {
        let mut panel = HelpPanel::default();
        panel.toggle(0);
        assert!(panel.is_visible(10));
        panel.toggle(10);
        assert!(!panel.is_visible(11));
    }

    #[test]
    fn paths_and_active_matching() {
        assert_eq!(NavTarget::Note(NoteId::new("n1")).path(), "/note/n1");
        assert_eq!(NavTarget::Tag("q3 plan".into()).path(), "/tags/q3%20plan");
        assert!(is_active_path("/", "/"));
        assert!(!is_active_path("/archived", "/"));
        assert!(is_active_path("/tags/work", "/tags"));
        assert!(!is_active_path("/search", "/settings"));
    }

    #[test]
    fn tag_links_match_whole_segments() {
        let work = NavTarget::Tag("work".into()).path();
        assert!(is_active_path("/tags/work", &work));
        assert!(!is_active_path("/tags/workshop", &work));
        assert!(!is_active_path("/archivedx", "/archived"));
        assert!(is_active_path("/note/n1", "/note"));
    }
}
