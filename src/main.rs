//! Spline Editor.
//!
//! Interaktiver Editor für 2D-Splines auf Basis von egui/eframe.

use eframe::egui;
use spline_editor::{render, ui, AppState, EditorOptions, InteractionLoop};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Spline Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Spline Editor"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Spline Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    frame_loop: InteractionLoop,
    renderer: render::Renderer,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            frame_loop: InteractionLoop::new(),
            renderer: render::Renderer::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let timestamp = ctx.input(|i| i.time);
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    self.state.manipulation.selection().is_some(),
                    &self.state.options,
                ));

                for intent in events.drain(..) {
                    self.frame_loop.push(timestamp, intent);
                }
                let output = self.frame_loop.run_frame_at(&mut self.state, timestamp);

                let painter = ui.painter_at(rect);
                painter.rect_filled(rect, 0.0, egui::Color32::from_gray(24));
                let mut device = ui::EguiPainterDevice::new(&painter, rect);
                self.renderer.render_to(&output.scene, &mut device);

                if !output.scene.has_content() {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Keine Punkte. Werkzeug 2 wählen oder Datei → Öffnen",
                        egui::FontId::proportional(18.0),
                        egui::Color32::GRAY,
                    );
                }

                if output.needs_repaint {
                    ctx.request_repaint();
                }
            });

        // Dialog-Flags werden erst im nächsten Frame ausgewertet
        if self.state.ui.show_file_dialog || self.state.ui.show_save_file_dialog {
            ctx.request_repaint();
        }
    }
}
