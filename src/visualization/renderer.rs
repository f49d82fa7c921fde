use crate::visualization::camera::OrbitCamera;
use anyhow::{ensure, Result};
use glam::Mat4;
use std::sync::Arc;
use wgpu::util::DeviceExt;

/// Upper bound on circle points per frame; the point buffer is allocated once at this size.
pub const MAX_POINTS: usize = 256;

const SHADERS_WGSL: &str = r#"
struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) color: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
};

@group(0) @binding(0)
var<uniform> mvp: mat4x4<f32>;

@vertex
fn vs_main(model: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = mvp * vec4<f32>(model.position, 1.0);
    out.color = model.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(in.color, 1.0);
}
"#;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColoredVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl ColoredVertex {
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }

    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColoredVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

pub struct CircleWgpuPrimitive {
    point_buffer: wgpu::Buffer,
    point_capacity: usize,
    line_buffer: wgpu::Buffer,
    num_line_vertices: u32,
    mvp_uniform_buffer: wgpu::Buffer,
    mvp_bind_group: wgpu::BindGroup,
    point_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
}

pub struct WgpuCircleRenderer {
    primitive: Option<Arc<CircleWgpuPrimitive>>,
    guide_lines: Vec<ColoredVertex>,
    pub camera: OrbitCamera,
}

impl WgpuCircleRenderer {
    pub fn new(guide_lines: Vec<ColoredVertex>) -> Self {
        Self {
            primitive: None,
            guide_lines,
            camera: OrbitCamera::default(),
        }
    }

    pub fn prepare(
        &mut self,
        device: &Arc<wgpu::Device>,
        target_format: wgpu::TextureFormat,
    ) -> Result<()> {
        if self.primitive.is_some() {
            return Ok(());
        }
        ensure!(
            !self.guide_lines.is_empty(),
            "no guide lines to upload for the grid and axes"
        );

        tracing::info!("Preparing WgpuCircleRenderer resources...");

        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Circle Shader"),
            source: wgpu::ShaderSource::Wgsl(SHADERS_WGSL.into()),
        });

        // Rewritten every frame from the current N / start theta.
        let point_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Circle Point Buffer"),
            size: (MAX_POINTS * std::mem::size_of::<ColoredVertex>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let line_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Guide Line Buffer"),
            contents: bytemuck::cast_slice(&self.guide_lines),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let num_line_vertices = self.guide_lines.len() as u32;

        let mvp_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Circle MVP Uniform Buffer"),
            contents: bytemuck::cast_slice(&[Mat4::IDENTITY]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let mvp_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Circle MVP Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let mvp_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Circle MVP Bind Group"),
            layout: &mvp_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: mvp_uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Circle Render Pipeline Layout"),
            bind_group_layouts: &[&mvp_bind_group_layout],
            push_constant_ranges: &[],
        });

        let create_pipeline = |label: &str, topology: wgpu::PrimitiveTopology| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader_module,
                    entry_point: "vs_main",
                    buffers: &[ColoredVertex::layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader_module,
                    entry_point: "fs_main",
                    targets: &[Some(wgpu::ColorTargetState {
                        format: target_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
            })
        };
        let point_pipeline =
            create_pipeline("Circle Point Pipeline", wgpu::PrimitiveTopology::PointList);
        let line_pipeline =
            create_pipeline("Guide Line Pipeline", wgpu::PrimitiveTopology::LineList);

        self.primitive = Some(Arc::new(CircleWgpuPrimitive {
            point_buffer,
            point_capacity: MAX_POINTS,
            line_buffer,
            num_line_vertices,
            mvp_uniform_buffer,
            mvp_bind_group,
            point_pipeline,
            line_pipeline,
        }));

        tracing::info!(
            line_vertices = num_line_vertices,
            point_capacity = MAX_POINTS,
            "WgpuCircleRenderer resources prepared successfully."
        );

        Ok(())
    }

    pub fn calculate_mvp(&self, aspect_ratio: f32) -> Mat4 {
        self.camera.view_projection(aspect_ratio)
    }

    pub fn get_primitive_arc(&self) -> Option<Arc<CircleWgpuPrimitive>> {
        self.primitive.clone()
    }

    pub fn paint_primitive<'rp>(
        primitive: &'rp CircleWgpuPrimitive,
        mvp_matrix: &Mat4,
        points: &[ColoredVertex],
        rpass: &mut wgpu::RenderPass<'rp>,
        queue: &wgpu::Queue,
    ) {
        queue.write_buffer(
            &primitive.mvp_uniform_buffer,
            0,
            bytemuck::cast_slice(&[*mvp_matrix]),
        );

        let visible = &points[..points.len().min(primitive.point_capacity)];
        if visible.len() < points.len() {
            tracing::warn!(
                requested = points.len(),
                capacity = primitive.point_capacity,
                "Too many circle points, truncating."
            );
        }
        if !visible.is_empty() {
            queue.write_buffer(&primitive.point_buffer, 0, bytemuck::cast_slice(visible));
        }

        rpass.set_bind_group(0, &primitive.mvp_bind_group, &[]);

        rpass.set_pipeline(&primitive.line_pipeline);
        rpass.set_vertex_buffer(0, primitive.line_buffer.slice(..));
        rpass.draw(0..primitive.num_line_vertices, 0..1);

        if !visible.is_empty() {
            rpass.set_pipeline(&primitive.point_pipeline);
            rpass.set_vertex_buffer(0, primitive.point_buffer.slice(..));
            rpass.draw(0..visible.len() as u32, 0..1);
        }
    }
}
