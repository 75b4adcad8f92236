use anyhow::Result;
use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::device::Gpu;

use super::pipeline::{create_pipeline, PipelineDesc, CLEAR_BLACK};

/// One triangle generated entirely in the vertex shader.
#[derive(Default)]
pub struct Triangle {
    pipeline: Option<wgpu::RenderPipeline>,
}

impl App for Triangle {
    fn on_init(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let desc = PipelineDesc::new(
            "triangle pipeline",
            include_str!("../shaders/triangle.wgsl"),
            gpu.surface_format(),
        );
        self.pipeline = Some(create_pipeline(gpu.device(), &desc));
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(pipeline) = self.pipeline.as_ref() else {
            return AppControl::Exit;
        };

        ctx.render(CLEAR_BLACK, |rpass| {
            rpass.set_pipeline(pipeline);
            rpass.draw(0..3, 0..1);
        })
    }
}
