//! UI-Komponenten: Menü, Toolbar, Properties-Panel, Statuszeile, Input, Dialoge.
//!
//! Der UI-Layer erzeugt ausschließlich `AppIntent`s; Zustand ändert er nie
//! direkt.

pub mod dialogs;
pub mod input;
mod keyboard;
pub mod menu;
pub mod painter_device;
pub mod properties;
pub mod status;
pub mod toolbar;

pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use menu::render_menu;
pub use painter_device::EguiPainterDevice;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
