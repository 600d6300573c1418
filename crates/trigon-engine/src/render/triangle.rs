use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::{Fitting, ProjectionVolume, Viewport};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::Triangle;

/// Draws one per-vertex-colored triangle over a cleared surface.
///
/// The vertex data is uploaded once into a retained buffer and only rewritten if a
/// different triangle is passed in. The projection is written to a uniform buffer
/// every frame from the caller's [`Fitting`].
pub struct TriangleRenderer {
    clear: Color,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    projection_ubo: Option<wgpu::Buffer>,

    vertex_buffer: Option<wgpu::Buffer>,
    uploaded: Option<[TriangleVertex; 3]>,
}

impl TriangleRenderer {
    /// Creates a renderer that clears to `clear` before every draw.
    pub fn new(clear: Color) -> Self {
        Self {
            clear,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            projection_ubo: None,
            vertex_buffer: None,
            uploaded: None,
        }
    }

    /// Clears the target and draws `triangle` through `fitting`.
    ///
    /// An empty viewport (minimized window) still clears but skips the draw.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        triangle: &Triangle,
        fitting: &Fitting,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.upload_vertices(ctx, triangle);
        self.write_projection(ctx, &fitting.projection);

        let viewport = draw_viewport(fitting, ctx.surface_size);

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("trigon triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear.for_surface(ctx.surface_format)),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let Some(viewport) = viewport else { return };
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else { return };

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
        rpass.set_viewport(
            viewport.x as f32,
            viewport.y as f32,
            viewport.width as f32,
            viewport.height as f32,
            0.0,
            1.0,
        );
        rpass.draw(0..3, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("trigon triangle shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/triangle.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("trigon triangle bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(projection_ubo_min_binding_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("trigon triangle pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("trigon triangle pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[TriangleVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Winding of the scene data is not part of its contract.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("triangle pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.projection_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.projection_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let projection_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("trigon projection ubo"),
            size: std::mem::size_of::<ProjectionUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("trigon triangle bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: projection_ubo.as_entire_binding(),
            }],
        });

        self.projection_ubo = Some(projection_ubo);
        self.bind_group = Some(bind_group);
    }

    fn upload_vertices(&mut self, ctx: &RenderCtx<'_>, triangle: &Triangle) {
        let vertices = TriangleVertex::interleave(triangle);
        if self.uploaded == Some(vertices) && self.vertex_buffer.is_some() {
            return;
        }

        match self.vertex_buffer.as_ref() {
            Some(vbo) => ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&vertices)),
            None => {
                self.vertex_buffer =
                    Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("trigon triangle vbo"),
                        contents: bytemuck::cast_slice(&vertices),
                        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                    }));
            }
        }

        self.uploaded = Some(vertices);
    }

    fn write_projection(&self, ctx: &RenderCtx<'_>, projection: &ProjectionVolume) {
        let Some(ubo) = self.projection_ubo.as_ref() else { return };
        let u = ProjectionUniform::from_volume(projection);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }
}

/// Part of `fitting.viewport` that lies on the configured surface, or `None`
/// when nothing is left to draw into.
fn draw_viewport(fitting: &Fitting, surface_size: (u32, u32)) -> Option<Viewport> {
    let (width, height) = surface_size;
    let viewport = fitting.viewport.clamped(width, height);
    (!viewport.is_empty()).then_some(viewport)
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct TriangleVertex {
    position: [f32; 3],
    color: [f32; 3],
}

impl TriangleVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TriangleVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    fn interleave(triangle: &Triangle) -> [TriangleVertex; 3] {
        std::array::from_fn(|i| TriangleVertex {
            position: triangle.vertices[i],
            color: triangle.colors[i],
        })
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ProjectionUniform {
    matrix: [[f32; 4]; 4],
}

impl ProjectionUniform {
    fn from_volume(volume: &ProjectionVolume) -> Self {
        Self { matrix: volume.to_matrix() }
    }
}

/// `ProjectionUniform` is a fixed 64-byte block, so the size is never zero.
fn projection_ubo_min_binding_size() -> wgpu::BufferSize {
    wgpu::BufferSize::new(std::mem::size_of::<ProjectionUniform>() as u64)
        .expect("ProjectionUniform has non-zero size by construction")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::FitMode;
    use crate::scene::TRIANGLE;

    #[test]
    fn interleave_pairs_positions_with_colors() {
        let v = TriangleVertex::interleave(&TRIANGLE);
        for i in 0..3 {
            assert_eq!(v[i].position, TRIANGLE.vertices[i]);
            assert_eq!(v[i].color, TRIANGLE.colors[i]);
        }
    }

    #[test]
    fn interleave_leaves_scene_untouched() {
        let before = TRIANGLE;
        for _ in 0..4 {
            let _ = TriangleVertex::interleave(&TRIANGLE);
        }
        assert_eq!(before, TRIANGLE);
    }

    #[test]
    fn vertex_layout_matches_shader_inputs() {
        let layout = TriangleVertex::layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[1].shader_location, 1);
    }

    #[test]
    fn projection_uniform_is_one_mat4() {
        assert_eq!(std::mem::size_of::<ProjectionUniform>(), 64);
        assert_eq!(projection_ubo_min_binding_size().get(), 64);
    }

    #[test]
    fn projection_uniform_carries_volume_matrix() {
        let volume = ProjectionVolume::fit(800, 600);
        let u = ProjectionUniform::from_volume(&volume);
        assert_eq!(u.matrix, volume.to_matrix());
    }

    #[test]
    fn renderer_keeps_configured_clear_color() {
        let clear = Color::from_srgb_u8(27, 30, 43, 255);
        assert_eq!(TriangleRenderer::new(clear).clear, clear);
    }

    // ── draw viewport ─────────────────────────────────────────────────────

    #[test]
    fn fitted_surface_draws_full_viewport() {
        let fitting = Fitting::new(800, 600, FitMode::Extend);
        assert_eq!(draw_viewport(&fitting, (800, 600)), Some(Viewport::full(800, 600)));
    }

    #[test]
    fn zero_height_skips_draw() {
        let fitting = Fitting::new(800, 0, FitMode::Extend);
        assert_eq!(draw_viewport(&fitting, (800, 0)), None);
    }

    #[test]
    fn zero_width_skips_draw() {
        let fitting = Fitting::new(0, 600, FitMode::Square);
        assert_eq!(draw_viewport(&fitting, (0, 600)), None);
    }

    #[test]
    fn fitting_larger_than_surface_is_clamped() {
        let fitting = Fitting::new(1920, 1080, FitMode::Extend);
        assert_eq!(draw_viewport(&fitting, (800, 600)), Some(Viewport::full(800, 600)));
    }

    #[test]
    fn fitting_outside_surface_skips_draw() {
        let fitting = Fitting::new(1920, 1080, FitMode::Square);
        assert_eq!(draw_viewport(&fitting, (200, 200)), None);
    }
}
