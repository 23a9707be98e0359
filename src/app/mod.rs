//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod frame_loop;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod manipulation;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Dokument, View, Werkzeug).
pub mod state;
pub mod use_cases;

pub use crate::core::Camera2D;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use frame_loop::{FrameOutput, InteractionLoop, QueuedEvent};
pub use history::{EditHistory, EditRecord};
pub use manipulation::{GestureState, ManipulationController, ViewportMapping};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, EditorTool, EditorToolState, PlaybackState, UiState, ViewState};
