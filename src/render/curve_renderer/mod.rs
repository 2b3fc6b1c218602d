//! Curve-Renderer: die abgetastete Bézier-Kurve als dicke Linie.

mod mesh;

use super::types::{create_pipeline, create_uniform_binding, CurveVertex, Uniforms};
use crate::core::{Viewport, CURVE_SAMPLE_COUNT};
use crate::shared::RenderScene;

use mesh::build_curve_mesh;

/// Maximale Vertex-Anzahl: 6 pro Segment zwischen den Abtastpunkten.
const MAX_CURVE_VERTICES: usize = (CURVE_SAMPLE_COUNT - 1) * 6;

/// Renderer für die Kurven-Linie.
pub struct CurveRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    /// Wiederverwendbarer Scratch-Buffer für Vertex-Daten (vermeidet per-Frame-Allokation)
    vertex_scratch: Vec<CurveVertex>,
}

impl CurveRenderer {
    /// Erstellt einen neuen Curve-Renderer.
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        let device = &render_state.device;

        let (uniform_buffer, bind_group_layout, bind_group) =
            create_uniform_binding(device, "Curve");

        let pipeline = create_pipeline(
            device,
            render_state.target_format,
            shader,
            &bind_group_layout,
            "Curve",
            ("vs_curve", "fs_curve"),
            &[CurveVertex::desc()],
        );

        // Kapazität ist durch die feste Abtastrate bekannt
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Curve Vertex Buffer"),
            size: (MAX_CURVE_VERTICES * std::mem::size_of::<CurveVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            vertex_count: 0,
            vertex_scratch: Vec::with_capacity(MAX_CURVE_VERTICES),
        }
    }

    /// Baut die Linien-Geometrie und lädt Uniforms + Vertices hoch.
    pub fn prepare(&mut self, queue: &wgpu::Queue, scene: &RenderScene) {
        let viewport = Viewport::new(glam::Vec2::from(scene.viewport_size));
        build_curve_mesh(
            &mut self.vertex_scratch,
            &scene.curve_points,
            &viewport,
            scene.options.curve_width_px,
        );
        self.vertex_count = self.vertex_scratch.len() as u32;

        let uniforms = Uniforms::new(scene.options.curve_color, &viewport);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        if !self.vertex_scratch.is_empty() {
            queue.write_buffer(
                &self.vertex_buffer,
                0,
                bytemuck::cast_slice(&self.vertex_scratch),
            );
        }
    }

    /// Zeichnet die zuletzt vorbereitete Geometrie (ein Draw-Call).
    pub fn paint(&self, render_pass: &mut wgpu::RenderPass<'static>) {
        if self.vertex_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}
