mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod search_box;
use search_box::SearchBox;

mod notes;
pub use notes::NotesView;

mod archive;
pub use archive::ArchiveView;

mod search;
pub use search::SearchView;

mod tag;
pub use tag::TagView;

mod editor;
pub use editor::EditorView;

mod settings;
pub use settings::SettingsView;
