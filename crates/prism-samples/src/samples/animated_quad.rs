use std::f32::consts::TAU;

use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::device::Gpu;
use prism_engine::math::Matrix4x4;
use prism_engine::render::{
    checkerboard_rgba8, create_gpu_buffer, upload_texture_rgba8, PositionTextureVertex,
    SamplerKind, StagingUpload, UniformBinding,
};
use winit::dpi::PhysicalSize;

use super::pipeline::{
    create_pipeline, texture_bind_group, texture_bind_group_layout, PipelineDesc, CLEAR_BLACK,
};

const VERTICES: [PositionTextureVertex; 4] = [
    PositionTextureVertex::new(-0.5, -0.5, 0.0, 0.0, 0.0),
    PositionTextureVertex::new(0.5, -0.5, 0.0, 1.0, 0.0),
    PositionTextureVertex::new(0.5, 0.5, 0.0, 1.0, 1.0),
    PositionTextureVertex::new(-0.5, 0.5, 0.0, 0.0, 1.0),
];

const INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

const TEXTURE_SIZE: u32 = 32;
const CHECKER_CELL: u32 = 4;

/// Per-draw uniform: transform plus a color multiplier.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadUniform {
    pub transform: Matrix4x4,
    pub tint: [f32; 4],
}

/// The four quads at time `t` (seconds) for a viewport of `aspect` width/height.
///
/// Rotation is applied before translation, so each quad spins in place about
/// its own center at a fixed offset; the top-right one spins the other way.
pub fn quad_uniforms(t: f32, aspect: f32) -> [QuadUniform; 4] {
    let proj = Matrix4x4::orthographic_off_center(-aspect, aspect, -1.0, 1.0, 0.0, 1.0);
    let quad = |angle: f32, x: f32, y: f32, green: f32| QuadUniform {
        transform: Matrix4x4::rotation_z(angle) * Matrix4x4::translation(x, y, 0.0) * proj,
        tint: [1.0, green, 1.0, 1.0],
    };

    [
        quad(t, -0.5, -0.5, 0.5 + t.sin() * 0.5),
        quad(TAU - t, 0.5, -0.5, 0.5 + t.cos() * 0.5),
        quad(t, -0.5, 0.5, 0.5 + t.sin() * 0.2),
        quad(t, 0.5, 0.5, 0.5 + t.cos()),
    ]
}

struct Resources {
    pipeline: wgpu::RenderPipeline,
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    texture_group: wgpu::BindGroup,
    quads: Vec<UniformBinding>,
    _texture: wgpu::Texture,
}

/// Four textured quads rotating under an orthographic projection.
#[derive(Default)]
pub struct AnimatedQuad {
    res: Option<Resources>,
    aspect: f32,
}

impl App for AnimatedQuad {
    fn on_init(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let device = gpu.device();
        self.aspect = gpu.aspect_ratio();

        let quads: Vec<UniformBinding> = (0..4)
            .map(|_| {
                UniformBinding::new::<QuadUniform>(
                    device,
                    "animated-quad uniform",
                    wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                )
            })
            .collect();

        let texture_layout = texture_bind_group_layout(device, "animated-quad texture bgl");
        let buffers = [PositionTextureVertex::layout()];
        let layouts = [&quads[0].layout, &texture_layout];
        let desc = PipelineDesc {
            buffers: &buffers,
            bind_group_layouts: &layouts,
            ..PipelineDesc::new(
                "animated-quad pipeline",
                include_str!("../shaders/animated_quad.wgsl"),
                gpu.surface_format(),
            )
        };
        let pipeline = create_pipeline(device, &desc);

        let pixels = checkerboard_rgba8(TEXTURE_SIZE, TEXTURE_SIZE, CHECKER_CELL);
        let (texture, view) = upload_texture_rgba8(
            device,
            gpu.queue(),
            "animated-quad checkerboard",
            TEXTURE_SIZE,
            TEXTURE_SIZE,
            &pixels,
        );
        let sampler = device.create_sampler(&SamplerKind::PointClamp.descriptor());
        let texture_group =
            texture_bind_group(device, "animated-quad texture", &texture_layout, &view, &sampler);

        let vertices = create_gpu_buffer::<PositionTextureVertex>(
            device,
            "animated-quad vertices",
            VERTICES.len(),
            wgpu::BufferUsages::VERTEX,
        );
        let indices = create_gpu_buffer::<u16>(
            device,
            "animated-quad indices",
            INDICES.len(),
            wgpu::BufferUsages::INDEX,
        );

        let mut upload = StagingUpload::new();
        upload.push(&vertices, &VERTICES).push(&indices, &INDICES);
        upload.submit(device, gpu.queue());

        self.res = Some(Resources {
            pipeline,
            vertices,
            indices,
            texture_group,
            quads,
            _texture: texture,
        });
        Ok(())
    }

    fn on_resize(&mut self, gpu: &Gpu<'_>, _size: PhysicalSize<u32>) {
        self.aspect = gpu.aspect_ratio();
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(res) = self.res.as_ref() else {
            return AppControl::Exit;
        };

        let uniforms = quad_uniforms(ctx.time.elapsed, self.aspect);
        for (binding, value) in res.quads.iter().zip(uniforms.iter()) {
            binding.write(ctx.gpu.queue(), value);
        }

        ctx.render(CLEAR_BLACK, |rpass| {
            rpass.set_pipeline(&res.pipeline);
            rpass.set_bind_group(1, &res.texture_group, &[]);
            rpass.set_vertex_buffer(0, res.vertices.slice(..));
            rpass.set_index_buffer(res.indices.slice(..), wgpu::IndexFormat::Uint16);
            for quad in &res.quads {
                rpass.set_bind_group(0, &quad.bind_group, &[]);
                rpass.draw_indexed(0..INDICES.len() as u32, 0, 0..1);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-5
    }

    #[test]
    fn uniform_matches_wgsl_struct_size() {
        assert_eq!(std::mem::size_of::<QuadUniform>(), 80);
    }

    #[test]
    fn at_rest_quads_sit_in_their_corners() {
        // Square viewport, t = 0: no rotation, so the quad center is its offset.
        let quads = quad_uniforms(0.0, 1.0);
        let expected = [(-0.5, -0.5), (0.5, -0.5), (-0.5, 0.5), (0.5, 0.5)];
        for (q, (x, y)) in quads.iter().zip(expected) {
            let c = q.transform.transform([0.0, 0.0, 0.0, 1.0]);
            assert!(close(c[0], x) && close(c[1], y), "{c:?}");
            assert!(close(c[3], 1.0));
        }
    }

    #[test]
    fn wide_viewport_squeezes_x() {
        let q = quad_uniforms(0.0, 2.0)[3];
        let c = q.transform.transform([0.0, 0.0, 0.0, 1.0]);
        assert!(close(c[0], 0.25));
        assert!(close(c[1], 0.5));
    }

    #[test]
    fn quarter_turn_rotates_offset() {
        // rotation applies before translation, so the quad spins in place.
        let t = std::f32::consts::FRAC_PI_2;
        let q = quad_uniforms(t, 1.0)[0];
        let corner = q.transform.transform([0.5, 0.0, 0.0, 1.0]);
        assert!(close(corner[0], -0.5));
        assert!(close(corner[1], 0.0));
    }

    #[test]
    fn depth_stays_in_clip_range() {
        for q in quad_uniforms(1.3, 4.0 / 3.0) {
            let c = q.transform.transform([0.5, 0.5, 0.0, 1.0]);
            assert!(c[2] >= 0.0 && c[2] <= 1.0);
        }
    }

    #[test]
    fn tints_follow_time() {
        let q = quad_uniforms(0.0, 1.0);
        assert!(close(q[0].tint[1], 0.5));
        assert!(close(q[1].tint[1], 1.0));
        assert!(close(q[2].tint[1], 0.5));
        assert!(close(q[3].tint[1], 1.5));
    }
}
