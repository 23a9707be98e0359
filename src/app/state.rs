//! Application State — zentrale Datenhaltung.

mod app_state;
mod editor;
mod playback;
mod ui;
mod view;

pub use app_state::AppState;
pub use editor::{EditorTool, EditorToolState};
pub use playback::PlaybackState;
pub use ui::UiState;
pub use view::ViewState;
