use anyhow::Result;
use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::device::Gpu;
use prism_engine::render::{create_gpu_buffer, PositionColorVertex, StagingUpload};
use rand::Rng;

use super::pipeline::{create_pipeline, PipelineDesc, CLEAR_BLACK};

const CORNERS: [[f32; 3]; 3] = [[-1.0, -1.0, 0.0], [1.0, -1.0, 0.0], [0.0, 1.0, 0.0]];

/// The triangle corners, each with an opaque random color.
pub fn random_vertices<R: Rng + ?Sized>(rng: &mut R) -> [PositionColorVertex; 3] {
    CORNERS.map(|[x, y, z]| {
        let color = [rng.random(), rng.random(), rng.random(), 255];
        PositionColorVertex::new(x, y, z, color)
    })
}

struct Resources {
    pipeline: wgpu::RenderPipeline,
    vertices: wgpu::Buffer,
}

/// One triangle read from a GPU-only vertex buffer, colored at random per run.
#[derive(Default)]
pub struct VertexBuffer {
    res: Option<Resources>,
}

impl App for VertexBuffer {
    fn on_init(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let buffers = [PositionColorVertex::layout()];
        let desc = PipelineDesc {
            buffers: &buffers,
            ..PipelineDesc::new(
                "vertex-buffer pipeline",
                include_str!("../shaders/position_color.wgsl"),
                gpu.surface_format(),
            )
        };
        let pipeline = create_pipeline(gpu.device(), &desc);

        let data = random_vertices(&mut rand::rng());
        log::debug!("vertex colors: {:?}", data.map(|v| v.color));

        let vertices = create_gpu_buffer::<PositionColorVertex>(
            gpu.device(),
            "vertex-buffer vertices",
            data.len(),
            wgpu::BufferUsages::VERTEX,
        );

        let mut upload = StagingUpload::new();
        upload.push(&vertices, &data);
        upload.submit(gpu.device(), gpu.queue());

        self.res = Some(Resources { pipeline, vertices });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(res) = self.res.as_ref() else {
            return AppControl::Exit;
        };

        ctx.render(CLEAR_BLACK, |rpass| {
            rpass.set_pipeline(&res.pipeline);
            rpass.set_vertex_buffer(0, res.vertices.slice(..));
            rpass.draw(0..CORNERS.len() as u32, 0..1);
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn corners_are_fixed_and_opaque() {
        let mut rng = StdRng::seed_from_u64(7);
        let verts = random_vertices(&mut rng);
        for (v, corner) in verts.iter().zip(CORNERS) {
            assert_eq!(v.position, corner);
            assert_eq!(v.color[3], 255);
        }
    }

    #[test]
    fn same_seed_gives_same_colors() {
        let a = random_vertices(&mut StdRng::seed_from_u64(42));
        let b = random_vertices(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn colors_vary_between_runs() {
        let mut rng = StdRng::seed_from_u64(1);
        let first = random_vertices(&mut rng);
        let differs = (0..16).any(|_| random_vertices(&mut rng) != first);
        assert!(differs);
    }
}
