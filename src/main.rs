//! Bézier Drag Demo.
//!
//! Quadratische Bézier-Kurve mit drei per Maus verschiebbaren
//! Kontrollpunkten, gerendert mit egui + wgpu.

use bezier_drag_demo::{render, ui, AppController, AppIntent, AppState, DemoOptions};
use eframe::egui;
use eframe::egui_wgpu;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

fn main() -> ExitCode {
    match AppRunner::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Bézier Drag Demo beendet mit Fehler: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Bézier Drag Demo v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let demo_options = DemoOptions::load_from_file(&DemoOptions::config_path());

        // Fehlender Shader ist fatal: ohne Shader gibt es nichts zu zeichnen
        let shader_source = render::load_shader_source(demo_options.shader_path.as_deref())?
            .into_owned();

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(demo_options.window_size)
                .with_title("Bézier Drag Demo"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: render::MSAA_SAMPLES as u16,
            ..Default::default()
        };

        eframe::run_native(
            "Bézier Drag Demo",
            native_options,
            Box::new(move |cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                Ok(Box::new(DemoApp::new(
                    render_state,
                    demo_options,
                    &shader_source,
                )))
            }),
        )
        .map_err(|e| anyhow::anyhow!("eframe: {e}"))
    }
}

/// Haupt-Anwendungsstruktur
struct DemoApp {
    state: AppState,
    controller: AppController,
    renderer: Arc<Mutex<render::Renderer>>,
    input: ui::InputState,
}

impl DemoApp {
    fn new(
        render_state: &egui_wgpu::RenderState,
        options: DemoOptions,
        shader_source: &str,
    ) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            renderer: Arc::new(Mutex::new(render::Renderer::new(
                render_state,
                shader_source,
            ))),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let has_meaningful_events = self.run_frame(ctx);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl DemoApp {
    /// Input sammeln → State aktualisieren → Szene zeichnen.
    ///
    /// Gibt zurück, ob der Frame mehr als ein Resize enthielt.
    fn run_frame(&mut self, ctx: &egui::Context) -> bool {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        let [r, g, b, a] = self.state.options.background_color;
        let background: egui::Color32 = egui::Rgba::from_rgba_unmultiplied(r, g, b, a).into();
        let mut has_meaningful_events = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(background))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(ui, &response, viewport_size));

                has_meaningful_events = events
                    .iter()
                    .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

                let scene = self.controller.process_frame(
                    &mut self.state,
                    std::mem::take(&mut events),
                    viewport_size,
                );

                let callback = egui_wgpu::Callback::new_paint_callback(
                    rect,
                    render::WgpuRenderCallback {
                        renderer: self.renderer.clone(),
                        scene,
                    },
                );

                ui.painter().add(callback);
            });

        has_meaningful_events
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || self.state.drag.is_active()
            || self.state.should_exit
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
