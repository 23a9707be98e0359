//! Use-Case-Funktionen für Kontrollpunkt-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `add_point` — Punkt anhängen bzw. hinter der Selektion einfügen
//! - `delete_point` — Selektierten Punkt löschen
//! - `properties` — Kurventyp und Punkt-Sperre
//! - `document` — Dokument leeren

mod add_point;
mod delete_point;
mod document;
mod properties;

pub use add_point::{append_point, insert_after_selected};
pub use delete_point::delete_selected;
pub use document::new_document;
pub use properties::{set_curve_type, toggle_lock_selected};
