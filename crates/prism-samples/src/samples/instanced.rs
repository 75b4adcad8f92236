use anyhow::Result;
use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::device::Gpu;
use prism_engine::render::{create_gpu_buffer, PositionColorVertex, StagingUpload};

use super::pipeline::{create_pipeline, PipelineDesc, CLEAR_BLACK};

/// Three triangles of the same shape; only the middle one is drawn.
const VERTICES: [PositionColorVertex; 9] = [
    PositionColorVertex::new(-1.0, -1.0, 0.0, [255, 0, 0, 255]),
    PositionColorVertex::new(1.0, -1.0, 0.0, [0, 255, 0, 255]),
    PositionColorVertex::new(0.0, 1.0, 0.0, [0, 0, 255, 255]),
    PositionColorVertex::new(-1.0, -1.0, 0.0, [255, 165, 0, 255]),
    PositionColorVertex::new(1.0, -1.0, 0.0, [0, 128, 0, 255]),
    PositionColorVertex::new(0.0, 1.0, 0.0, [0, 255, 255, 255]),
    PositionColorVertex::new(-1.0, -1.0, 0.0, [255, 255, 255, 255]),
    PositionColorVertex::new(1.0, -1.0, 0.0, [255, 255, 255, 255]),
    PositionColorVertex::new(0.0, 1.0, 0.0, [255, 255, 255, 255]),
];

const INDICES: [u16; 6] = [0, 1, 2, 3, 4, 5];

const FIRST_INDEX: u32 = 3;
const INDEX_COUNT: u32 = 3;

/// Instances per row/column.
pub const GRID: u32 = 4;
pub const INSTANCE_COUNT: u32 = GRID * GRID;

/// CPU mirror of the vertex shader placement for instance `instance`.
pub fn instance_position(position: [f32; 3], instance: u32) -> [f32; 3] {
    let mut p = [
        position[0] * 0.25 - 0.75,
        position[1] * 0.25 - 0.75,
        position[2] * 0.25,
    ];
    p[0] += (instance % GRID) as f32 * 0.5;
    p[1] += (instance / GRID) as f32 * 0.5;
    p
}

struct Resources {
    pipeline: wgpu::RenderPipeline,
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
}

/// A 4x4 grid of triangles from one instanced indexed draw.
#[derive(Default)]
pub struct Instanced {
    res: Option<Resources>,
}

impl App for Instanced {
    fn on_init(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let device = gpu.device();

        let buffers = [PositionColorVertex::layout()];
        let desc = PipelineDesc {
            buffers: &buffers,
            ..PipelineDesc::new(
                "instanced pipeline",
                include_str!("../shaders/instanced.wgsl"),
                gpu.surface_format(),
            )
        };
        let pipeline = create_pipeline(device, &desc);

        let vertices = create_gpu_buffer::<PositionColorVertex>(
            device,
            "instanced vertices",
            VERTICES.len(),
            wgpu::BufferUsages::VERTEX,
        );
        let indices =
            create_gpu_buffer::<u16>(device, "instanced indices", INDICES.len(), wgpu::BufferUsages::INDEX);

        let mut upload = StagingUpload::new();
        upload.push(&vertices, &VERTICES).push(&indices, &INDICES);
        log::debug!("instanced: staging {} bytes", upload.staged_len());
        upload.submit(device, gpu.queue());

        self.res = Some(Resources {
            pipeline,
            vertices,
            indices,
        });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(res) = self.res.as_ref() else {
            return AppControl::Exit;
        };

        ctx.render(CLEAR_BLACK, |rpass| {
            rpass.set_pipeline(&res.pipeline);
            rpass.set_vertex_buffer(0, res.vertices.slice(..));
            rpass.set_index_buffer(res.indices.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(FIRST_INDEX..FIRST_INDEX + INDEX_COUNT, 0, 0..INSTANCE_COUNT);
        })
    }
}
