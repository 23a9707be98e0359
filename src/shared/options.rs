//! Zentrale Konfiguration für den Spline-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{TessellationQuality, TessellationSettings};
use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.05;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 200.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;
/// Rand beim Einpassen der Ansicht (Anteil der Bounding Box).
pub const FIT_VIEW_MARGIN: f32 = 0.15;

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln.
pub const SELECTION_PICK_RADIUS_PX: f32 = 8.0;
/// Vergrößerung von Pick-Radius und Marker des selektierten Punkts.
pub const SELECTION_SIZE_FACTOR: f32 = 1.5;

// ── Tessellierung ───────────────────────────────────────────────────

/// Maximaler Sehnenfehler in Modell-Einheiten.
pub const TESSELLATION_TOLERANCE: f32 = 0.05;
/// Maximale Rekursionstiefe der adaptiven Unterteilung.
pub const TESSELLATION_MAX_DEPTH: u32 = crate::core::tessellation::DEFAULT_MAX_DEPTH;
/// Grobe Intervalle pro Segment vor der Unterteilung.
pub const TESSELLATION_COARSE_SAMPLES: usize =
    crate::core::tessellation::DEFAULT_COARSE_SAMPLES_PER_SEGMENT;

// ── Historie ────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 200;

// ── Punkt-Rendering ─────────────────────────────────────────────────

/// Marker-Durchmesser in Screen-Pixeln.
pub const POINT_MARKER_SIZE_PX: f32 = 8.0;
/// Farbe normaler Kontrollpunkte (RGBA: Cyan).
pub const POINT_COLOR_DEFAULT: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe des Hover-Kandidaten (RGBA: Weiß).
pub const POINT_COLOR_HOVERED: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe des selektierten Punkts (RGBA: Magenta).
pub const POINT_COLOR_SELECTED: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Farbe gesperrter Punkte (RGBA: Grau).
pub const POINT_COLOR_LOCKED: [f32; 4] = [0.55, 0.55, 0.55, 1.0];

// ── Kurven-Rendering ────────────────────────────────────────────────

/// Linienstärke der Kurve in Screen-Pixeln.
pub const CURVE_WIDTH_PX: f32 = 2.0;
/// Farbe der Kurve (RGBA: Grün).
pub const CURVE_COLOR: [f32; 4] = [0.2, 0.9, 0.2, 1.0];
/// Linienstärke des Kontrollpolygons.
pub const CONTROL_POLYGON_WIDTH_PX: f32 = 1.0;
/// Farbe des Kontrollpolygons (RGBA: halbtransparentes Grau).
pub const CONTROL_POLYGON_COLOR: [f32; 4] = [0.6, 0.6, 0.6, 0.6];

// ── Wiedergabe ──────────────────────────────────────────────────────

/// Parameter-Geschwindigkeit der Wiedergabe (Segmente pro Sekunde).
pub const PLAYBACK_SPEED: f32 = 0.5;
/// Farbe des Wiedergabe-Markers (RGBA: Orange).
pub const PLAYHEAD_COLOR: [f32; 4] = [1.0, 0.6, 0.0, 1.0];
/// Farbe der Tangente am Wiedergabe-Marker (RGBA: Gelb).
pub const TANGENT_COLOR: [f32; 4] = [1.0, 0.9, 0.2, 1.0];
/// Länge der gezeichneten Tangente in Screen-Pixeln.
pub const TANGENT_LENGTH_PX: f32 = 40.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `spline_editor.toml` neben der Binary gespeichert.
///
/// Fehlende Felder in älteren Dateien fallen auf die Standardwerte zurück.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Punkte ──────────────────────────────────────────────────
    /// Marker-Durchmesser in Screen-Pixeln
    pub point_marker_size_px: f32,
    /// Farbe normaler Kontrollpunkte
    pub point_color_default: [f32; 4],
    /// Farbe des Hover-Kandidaten
    pub point_color_hovered: [f32; 4],
    /// Farbe des selektierten Punkts
    pub point_color_selected: [f32; 4],
    /// Farbe gesperrter Punkte
    pub point_color_locked: [f32; 4],

    // ── Selektion ───────────────────────────────────────────────
    /// Vergrößerungsfaktor für den selektierten Punkt (Hitbox und Darstellung)
    pub selection_size_factor: f32,
    /// Pick-Radius in Screen-Pixeln
    pub pick_radius_px: f32,

    // ── Kurve ───────────────────────────────────────────────────
    /// Linienstärke der Kurve
    pub curve_width_px: f32,
    /// Farbe der Kurve
    pub curve_color: [f32; 4],
    /// Kontrollpolygon zeichnen
    pub show_control_polygon: bool,
    /// Linienstärke des Kontrollpolygons
    pub control_polygon_width_px: f32,
    /// Farbe des Kontrollpolygons
    pub control_polygon_color: [f32; 4],

    // ── Tessellierung ───────────────────────────────────────────
    /// Maximaler Sehnenfehler in Modell-Einheiten
    pub tessellation_tolerance: f32,
    /// Maximale Rekursionstiefe
    pub tessellation_max_depth: u32,
    /// Grobe Intervalle pro Segment
    pub tessellation_coarse_samples: usize,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,
    /// Rand beim Einpassen der Ansicht
    pub fit_view_margin: f32,

    // ── Historie ────────────────────────────────────────────────
    /// Maximale Anzahl Undo-Schritte
    pub history_depth: usize,

    // ── Wiedergabe ──────────────────────────────────────────────
    /// Parameter-Geschwindigkeit (Segmente pro Sekunde)
    pub playback_speed: f32,
    /// Farbe des Wiedergabe-Markers
    pub playhead_color: [f32; 4],
    /// Farbe der Tangente
    pub tangent_color: [f32; 4],
    /// Länge der Tangente in Screen-Pixeln
    pub tangent_length_px: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_marker_size_px: POINT_MARKER_SIZE_PX,
            point_color_default: POINT_COLOR_DEFAULT,
            point_color_hovered: POINT_COLOR_HOVERED,
            point_color_selected: POINT_COLOR_SELECTED,
            point_color_locked: POINT_COLOR_LOCKED,

            selection_size_factor: SELECTION_SIZE_FACTOR,
            pick_radius_px: SELECTION_PICK_RADIUS_PX,

            curve_width_px: CURVE_WIDTH_PX,
            curve_color: CURVE_COLOR,
            show_control_polygon: true,
            control_polygon_width_px: CONTROL_POLYGON_WIDTH_PX,
            control_polygon_color: CONTROL_POLYGON_COLOR,

            tessellation_tolerance: TESSELLATION_TOLERANCE,
            tessellation_max_depth: TESSELLATION_MAX_DEPTH,
            tessellation_coarse_samples: TESSELLATION_COARSE_SAMPLES,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            fit_view_margin: FIT_VIEW_MARGIN,

            history_depth: HISTORY_DEPTH,

            playback_speed: PLAYBACK_SPEED,
            playhead_color: PLAYHEAD_COLOR,
            tangent_color: TANGENT_COLOR,
            tangent_length_px: TANGENT_LENGTH_PX,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<EditorOptions>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spline-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("spline_editor.toml")
    }

    /// Korrigiert unsinnige Werte aus handeditierten Dateien.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.pick_radius_px.is_finite() && self.pick_radius_px > 0.0) {
            self.pick_radius_px = defaults.pick_radius_px;
        }
        if !(self.selection_size_factor.is_finite() && self.selection_size_factor >= 1.0) {
            self.selection_size_factor = defaults.selection_size_factor;
        }
        if !(self.tessellation_tolerance.is_finite() && self.tessellation_tolerance > 0.0) {
            self.tessellation_tolerance = defaults.tessellation_tolerance;
        }
        // 2^20 Teilintervalle je grobem Intervall sind mehr als genug
        self.tessellation_max_depth = self.tessellation_max_depth.min(20);
        self.tessellation_coarse_samples = self.tessellation_coarse_samples.max(1);
        if !(self.camera_zoom_min > 0.0 && self.camera_zoom_min <= self.camera_zoom_max) {
            self.camera_zoom_min = defaults.camera_zoom_min;
            self.camera_zoom_max = defaults.camera_zoom_max;
        }
        if !(self.camera_zoom_step.is_finite() && self.camera_zoom_step > 1.0) {
            self.camera_zoom_step = defaults.camera_zoom_step;
        }
        if !(self.camera_scroll_zoom_step.is_finite() && self.camera_scroll_zoom_step > 1.0) {
            self.camera_scroll_zoom_step = defaults.camera_scroll_zoom_step;
        }
        self.history_depth = self.history_depth.max(1);
        if !(self.playback_speed.is_finite() && self.playback_speed > 0.0) {
            self.playback_speed = defaults.playback_speed;
        }
        if !(self.tangent_length_px.is_finite() && self.tangent_length_px >= 0.0) {
            self.tangent_length_px = defaults.tangent_length_px;
        }
        self
    }

    /// Tessellierungs-Einstellungen für das Spline-Modell.
    pub fn tessellation_settings(&self) -> TessellationSettings {
        TessellationSettings {
            max_depth: self.tessellation_max_depth,
            coarse_samples_per_segment: self.tessellation_coarse_samples,
        }
    }

    /// Angefragte Tessellierungs-Qualität.
    pub fn tessellation_quality(&self) -> TessellationQuality {
        TessellationQuality::Tolerance(self.tessellation_tolerance)
    }
}
