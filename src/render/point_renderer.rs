//! Point-Renderer: Kontrollpunkte als instanzierte Quads.

use super::types::{create_pipeline, create_uniform_binding, PointInstance, Uniforms, Vertex};
use crate::core::{Viewport, CONTROL_POINT_COUNT};
use crate::shared::{DemoOptions, RenderScene};
use glam::Vec2;
use wgpu::util::DeviceExt;

/// Renderer für die drei Kontrollpunkte
pub struct PointRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,
}

impl PointRenderer {
    /// Erstellt einen neuen Point-Renderer
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        let device = &render_state.device;

        let (uniform_buffer, bind_group_layout, bind_group) =
            create_uniform_binding(device, "Point");

        let pipeline = create_pipeline(
            device,
            render_state.target_format,
            shader,
            &bind_group_layout,
            "Point",
            ("vs_point", "fs_point"),
            &[Vertex::desc(), PointInstance::desc()],
        );

        // Einheits-Quad (2 Dreiecke), skaliert im Shader
        let vertices = [
            Vertex {
                position: [-1.0, -1.0],
            },
            Vertex {
                position: [1.0, -1.0],
            },
            Vertex {
                position: [1.0, 1.0],
            },
            Vertex {
                position: [-1.0, -1.0],
            },
            Vertex {
                position: [1.0, 1.0],
            },
            Vertex {
                position: [-1.0, 1.0],
            },
        ];

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Quad Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Point Instance Buffer"),
            size: (CONTROL_POINT_COUNT * std::mem::size_of::<PointInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            vertex_buffer,
            uniform_buffer,
            bind_group,
            instance_buffer,
        }
    }

    /// Lädt Uniforms und Instanzdaten der Kontrollpunkte hoch.
    pub fn prepare(&mut self, queue: &wgpu::Queue, scene: &RenderScene) {
        let instances = build_point_instances(
            &scene.control_points,
            scene.grabbed_point,
            &scene.options,
        );

        let viewport = Viewport::new(Vec2::from(scene.viewport_size));
        let uniforms = Uniforms::new(scene.options.point_color, &viewport);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));
        queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
    }

    /// Zeichnet alle Kontrollpunkte (ein instanzierter Draw-Call).
    pub fn paint(&self, render_pass: &mut wgpu::RenderPass<'static>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        render_pass.draw(0..6, 0..CONTROL_POINT_COUNT as u32);
    }
}

/// Baut die Instanzdaten; der gegriffene Punkt erhält die Hervorhebungsfarbe.
fn build_point_instances(
    control_points: &[Vec2; CONTROL_POINT_COUNT],
    grabbed_point: Option<usize>,
    options: &DemoOptions,
) -> [PointInstance; CONTROL_POINT_COUNT] {
    std::array::from_fn(|index| {
        let color = if grabbed_point == Some(index) {
            options.point_color_grabbed
        } else {
            options.point_color
        };
        let point = control_points[index];
        PointInstance::new([point.x, point.y], color, options.point_size_px)
    })
}
