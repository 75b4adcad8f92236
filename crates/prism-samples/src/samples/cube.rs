use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::device::Gpu;
use prism_engine::math::{Matrix4x4, Vector3};
use prism_engine::render::{create_gpu_buffer, PositionColorVertex, StagingUpload, UniformBinding};
use prism_engine::time::FpsCounter;

use super::pipeline::{create_pipeline, PipelineDesc, CLEAR_BLACK};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth16Unorm;

const ORBIT_RADIUS: f32 = 30.0;
const ORBIT_HEIGHT: f32 = 30.0;
/// Radians per second.
const ORBIT_SPEED: f32 = 1.0;

const FIELD_OF_VIEW_DEG: f32 = 75.0;
const NEAR_PLANE: f32 = 20.0;
const FAR_PLANE: f32 = 60.0;

const RED: [u8; 4] = [255, 0, 0, 255];
const YELLOW: [u8; 4] = [255, 255, 0, 255];
const MAGENTA: [u8; 4] = [255, 0, 255, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];
const CYAN: [u8; 4] = [0, 255, 255, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

const fn v(x: f32, y: f32, z: f32, color: [u8; 4]) -> PositionColorVertex {
    PositionColorVertex::new(x, y, z, color)
}

/// Side-20 cube centered at the origin, four vertices per face so each face
/// gets a flat color.
pub const CUBE_VERTICES: [PositionColorVertex; 24] = [
    // -z
    v(-10.0, -10.0, -10.0, RED),
    v(10.0, -10.0, -10.0, RED),
    v(10.0, 10.0, -10.0, RED),
    v(-10.0, 10.0, -10.0, RED),
    // +z
    v(-10.0, -10.0, 10.0, YELLOW),
    v(10.0, -10.0, 10.0, YELLOW),
    v(10.0, 10.0, 10.0, YELLOW),
    v(-10.0, 10.0, 10.0, YELLOW),
    // -x
    v(-10.0, -10.0, -10.0, MAGENTA),
    v(-10.0, 10.0, -10.0, MAGENTA),
    v(-10.0, 10.0, 10.0, MAGENTA),
    v(-10.0, -10.0, 10.0, MAGENTA),
    // +x
    v(10.0, -10.0, -10.0, GREEN),
    v(10.0, 10.0, -10.0, GREEN),
    v(10.0, 10.0, 10.0, GREEN),
    v(10.0, -10.0, 10.0, GREEN),
    // -y
    v(-10.0, -10.0, -10.0, CYAN),
    v(-10.0, -10.0, 10.0, CYAN),
    v(10.0, -10.0, 10.0, CYAN),
    v(10.0, -10.0, -10.0, CYAN),
    // +y
    v(-10.0, 10.0, -10.0, BLUE),
    v(-10.0, 10.0, 10.0, BLUE),
    v(10.0, 10.0, 10.0, BLUE),
    v(10.0, 10.0, -10.0, BLUE),
];

pub const CUBE_INDICES: [u16; 36] = [
    0, 1, 2, 0, 2, 3, //
    4, 5, 6, 4, 6, 7, //
    8, 9, 10, 8, 10, 11, //
    12, 13, 14, 12, 14, 15, //
    16, 17, 18, 16, 18, 19, //
    20, 21, 22, 20, 22, 23,
];

/// Camera position on a horizontal circle of `radius` at `height`, `angle`
/// radians around the Y axis.
pub fn orbit_camera(angle: f32, radius: f32, height: f32) -> Vector3 {
    Vector3::new(angle.cos() * radius, height, angle.sin() * radius)
}

/// View-projection for a camera at `angle` looking at the origin.
pub fn view_projection(angle: f32, aspect: f32) -> Matrix4x4 {
    let camera = orbit_camera(angle, ORBIT_RADIUS, ORBIT_HEIGHT);
    let view = Matrix4x4::look_at(camera, Vector3::ZERO, Vector3::Y);
    let proj = Matrix4x4::perspective_fov(
        FIELD_OF_VIEW_DEG.to_radians(),
        aspect,
        NEAR_PLANE,
        FAR_PLANE,
    );
    view * proj
}

/// View-projection plus the clip planes the fragment stage shades by.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CubeUniform {
    pub viewproj: Matrix4x4,
    /// `[near, far, 0, 0]`
    pub clip: [f32; 4],
}

impl CubeUniform {
    pub fn new(viewproj: Matrix4x4) -> Self {
        Self {
            viewproj,
            clip: [NEAR_PLANE, FAR_PLANE, 0.0, 0.0],
        }
    }
}

/// View distance for a `[0, 1]` depth value; mirrors `linear_depth` in the shader.
pub fn linear_depth(z: f32, near: f32, far: f32) -> f32 {
    far * near / (far - z * (far - near))
}

struct Resources {
    pipeline: wgpu::RenderPipeline,
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    uniform: UniformBinding,
}

/// Depth-tested cube seen from a camera orbiting above it.
pub struct Cube {
    res: Option<Resources>,
    angle: f32,
    fps: FpsCounter,
}

impl Default for Cube {
    fn default() -> Self {
        Self {
            res: None,
            angle: 0.0,
            fps: FpsCounter::new(1.0),
        }
    }
}

impl App for Cube {
    fn on_init(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let device = gpu.device();
        let depth_format = gpu
            .depth_format()
            .ok_or_else(|| anyhow::anyhow!("cube sample needs a depth target"))?;

        let uniform = UniformBinding::new::<CubeUniform>(
            device,
            "cube uniform",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );

        let buffers = [PositionColorVertex::layout()];
        let layouts = [&uniform.layout];
        let desc = PipelineDesc {
            buffers: &buffers,
            bind_group_layouts: &layouts,
            depth_format: Some(depth_format),
            ..PipelineDesc::new(
                "cube pipeline",
                include_str!("../shaders/cube.wgsl"),
                gpu.surface_format(),
            )
        };
        let pipeline = create_pipeline(device, &desc);

        let vertices = create_gpu_buffer::<PositionColorVertex>(
            device,
            "cube vertices",
            CUBE_VERTICES.len(),
            wgpu::BufferUsages::VERTEX,
        );
        let indices = create_gpu_buffer::<u16>(
            device,
            "cube indices",
            CUBE_INDICES.len(),
            wgpu::BufferUsages::INDEX,
        );

        let mut upload = StagingUpload::new();
        upload
            .push(&vertices, &CUBE_VERTICES)
            .push(&indices, &CUBE_INDICES);
        upload.submit(device, gpu.queue());

        self.res = Some(Resources {
            pipeline,
            vertices,
            indices,
            uniform,
        });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if let Some(fps) = self.fps.record(ctx.time.dt) {
            log::info!("fps: {fps:.1}");
        }

        self.angle += ORBIT_SPEED * ctx.time.dt;

        let Some(res) = self.res.as_ref() else {
            return AppControl::Exit;
        };

        let viewproj = view_projection(self.angle, ctx.gpu.aspect_ratio());
        res.uniform.write(ctx.gpu.queue(), &CubeUniform::new(viewproj));

        ctx.render(CLEAR_BLACK, |rpass| {
            rpass.set_pipeline(&res.pipeline);
            rpass.set_bind_group(0, &res.uniform.bind_group, &[]);
            rpass.set_vertex_buffer(0, res.vertices.slice(..));
            rpass.set_index_buffer(res.indices.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..CUBE_INDICES.len() as u32, 0, 0..1);
        })
    }
}
