//! GPU-Rendering mit wgpu.

mod callback;
mod curve_renderer;
mod point_renderer;
mod shader;
mod types;

pub use crate::shared::RenderScene;
pub use callback::WgpuRenderCallback;
pub(crate) use curve_renderer::CurveRenderer;
pub(crate) use point_renderer::PointRenderer;
pub use shader::{load_shader_source, RenderError, BUILTIN_SHADER};
pub use types::MSAA_SAMPLES;

/// Haupt-Renderer der Demo.
///
/// Verwaltet GPU-Buffer und Pipelines der Sub-Renderer.
/// API: `new()` + `prepare()` (Upload) + `paint()` (Draw-Calls).
pub struct Renderer {
    curve_renderer: CurveRenderer,
    point_renderer: PointRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer aus dem WGSL-Quelltext.
    pub fn new(render_state: &egui_wgpu::RenderState, shader_source: &str) -> Self {
        let device = &render_state.device;

        // Ein ShaderModule für alle Sub-Renderer
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Bezier Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        Self {
            curve_renderer: CurveRenderer::new(render_state, &shader),
            point_renderer: PointRenderer::new(render_state, &shader),
        }
    }

    /// Lädt die Daten der Szene auf die GPU.
    pub fn prepare(&mut self, queue: &wgpu::Queue, scene: &RenderScene) {
        log::trace!(
            "Renderer.prepare(), viewport {:?}, grabbed {:?}",
            scene.viewport_size,
            scene.grabbed_point
        );
        self.curve_renderer.prepare(queue, scene);
        self.point_renderer.prepare(queue, scene);
    }

    /// Zeichnet Kurve und danach die Kontrollpunkte darüber.
    pub fn paint(&self, render_pass: &mut wgpu::RenderPass<'static>) {
        self.curve_renderer.paint(render_pass);
        self.point_renderer.paint(render_pass);
    }
}
