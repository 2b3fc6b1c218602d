//! Rendering-Typen: Vertex-Layouts und Uniforms.

use crate::core::Viewport;
use bytemuck::{Pod, Zeroable};

/// MSAA-Sampleanzahl der Pipelines (muss zu `NativeOptions::multisampling` passen).
pub const MSAA_SAMPLES: u32 = 4;

/// Vertex für ein Quad-Eck (Kontrollpunkt-Quad)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Eckposition im Einheits-Quad [-1, 1]
    pub position: [f32; 2],
}

impl Vertex {
    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Vertex der Kurven-Geometrie (bereits in NDC).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CurveVertex {
    /// Position in NDC
    pub position: [f32; 2],
}

impl CurveVertex {
    /// Erstellt einen neuen CurveVertex.
    pub fn new(position: [f32; 2]) -> Self {
        Self { position }
    }

    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CurveVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Instanz-Daten für einen Kontrollpunkt
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PointInstance {
    /// Mittelpunkt in NDC
    pub center: [f32; 2],
    /// Füllfarbe
    pub color: [f32; 4],
    /// Kantenlänge in Pixeln
    pub size_px: f32,
    _padding: [f32; 1],
}

impl PointInstance {
    /// Erstellt eine neue Punkt-Instanz.
    pub fn new(center: [f32; 2], color: [f32; 4], size_px: f32) -> Self {
        Self {
            center,
            color,
            size_px,
            _padding: [0.0; 1],
        }
    }

    /// Beschreibt das Instanz-Layout für wgpu.
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}

/// Uniform-Buffer pro Pass: Farbe + Pixel→NDC-Skalierung
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Uniforms {
    /// Pass-Farbe (Kurve) bzw. ungenutzt (Punkte tragen eigene Farbe)
    pub color: [f32; 4],
    /// NDC pro Pixel [x, y] = 2 / Viewport-Größe
    pub pixel_to_ndc: [f32; 2],
    _padding: [f32; 2],
}

impl Uniforms {
    /// Erstellt Uniforms für eine Farbe und den aktuellen Viewport.
    pub fn new(color: [f32; 4], viewport: &Viewport) -> Self {
        Self {
            color,
            pixel_to_ndc: viewport.pixels_to_ndc_extent(1.0).to_array(),
            _padding: [0.0; 2],
        }
    }
}

/// Erstellt Uniform-Buffer, Bind-Group-Layout und Bind-Group für einen Pass.
pub(crate) fn create_uniform_binding(
    device: &wgpu::Device,
    label: &str,
) -> (wgpu::Buffer, wgpu::BindGroupLayout, wgpu::BindGroup) {
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(&format!("{label} Uniform Buffer")),
        size: std::mem::size_of::<Uniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(&format!("{label} Bind Group Layout")),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(&format!("{label} Bind Group")),
        layout: &bind_group_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    (uniform_buffer, bind_group_layout, bind_group)
}

/// Erstellt eine Alpha-geblendete TriangleList-Pipeline für die Szene.
pub(crate) fn create_pipeline(
    device: &wgpu::Device,
    target_format: wgpu::TextureFormat,
    shader: &wgpu::ShaderModule,
    bind_group_layout: &wgpu::BindGroupLayout,
    label: &str,
    entry_points: (&str, &str),
    buffers: &[wgpu::VertexBufferLayout<'static>],
) -> wgpu::RenderPipeline {
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(&format!("{label} Pipeline Layout")),
        bind_group_layouts: &[bind_group_layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&format!("{label} Pipeline")),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(entry_points.0),
            buffers,
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(entry_points.1),
            targets: &[Some(wgpu::ColorTargetState {
                format: target_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: wgpu::PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState {
            count: MSAA_SAMPLES,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
        cache: None,
    })
}
