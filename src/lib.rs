//! Spline Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod document;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState, FrameOutput,
    InteractionLoop, UiState, ViewState,
};
pub use core::{
    Camera2D, ControlPoint, ControlPointId, CurveType, SplineError, SplineModel, Tessellation,
    TessellationQuality,
};
pub use document::{parse_spline_document, write_spline_document};
pub use render::{DrawPrimitive, GraphicsDevice, Renderer};
pub use shared::{EditorOptions, Playhead, RenderScene};
