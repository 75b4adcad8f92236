use anyhow::Result;
use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::device::Gpu;
use prism_engine::input::Key;
use winit::dpi::PhysicalSize;

use super::pipeline::{create_pipeline, PipelineDesc, CLEAR_BLACK};

pub const RESOLUTIONS: [(u32, u32); 7] = [
    (640, 480),
    (1280, 720),
    (1024, 1024),
    (1600, 900),
    (1920, 1080),
    (3200, 1800),
    (3840, 2160),
];

/// Position in [`RESOLUTIONS`]; stepping past either end wraps around.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ResolutionCycle {
    index: usize,
}

impl ResolutionCycle {
    pub fn current(self) -> (u32, u32) {
        RESOLUTIONS[self.index]
    }

    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % RESOLUTIONS.len(),
        }
    }

    pub fn prev(self) -> Self {
        Self {
            index: (self.index + RESOLUTIONS.len() - 1) % RESOLUTIONS.len(),
        }
    }
}

/// Draws a triangle; Left/Right step the window through fixed resolutions.
#[derive(Default)]
pub struct Resize {
    pipeline: Option<wgpu::RenderPipeline>,
    cycle: ResolutionCycle,
}

impl App for Resize {
    fn on_init(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let desc = PipelineDesc::new(
            "resize pipeline",
            include_str!("../shaders/triangle.wgsl"),
            gpu.surface_format(),
        );
        self.pipeline = Some(create_pipeline(gpu.device(), &desc));

        log::info!("press Left/Right to cycle through {} resolutions", RESOLUTIONS.len());
        Ok(())
    }

    fn on_resize(&mut self, _gpu: &Gpu<'_>, size: PhysicalSize<u32>) {
        log::debug!("surface now {}x{}", size.width, size.height);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let mut cycle = self.cycle;
        if ctx.input.pressed(Key::ArrowLeft) {
            cycle = cycle.prev();
        }
        if ctx.input.pressed(Key::ArrowRight) {
            cycle = cycle.next();
        }
        if cycle != self.cycle {
            self.cycle = cycle;
            let (w, h) = cycle.current();
            log::info!("setting resolution to {w}x{h}");
            ctx.resize_window(w, h);
        }

        let Some(pipeline) = self.pipeline.as_ref() else {
            return AppControl::Exit;
        };

        ctx.render(CLEAR_BLACK, |rpass| {
            rpass.set_pipeline(pipeline);
            rpass.draw(0..3, 0..1);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_initial_window_size() {
        assert_eq!(ResolutionCycle::default().current(), (640, 480));
    }

    #[test]
    fn next_walks_the_table() {
        let c = ResolutionCycle::default().next().next();
        assert_eq!(c.current(), (1024, 1024));
    }

    #[test]
    fn prev_wraps_to_largest() {
        assert_eq!(ResolutionCycle::default().prev().current(), (3840, 2160));
    }

    #[test]
    fn next_wraps_to_smallest() {
        let mut c = ResolutionCycle::default();
        for _ in 0..RESOLUTIONS.len() {
            c = c.next();
        }
        assert_eq!(c, ResolutionCycle::default());
    }

    #[test]
    fn prev_undoes_next() {
        let c = ResolutionCycle::default().next().next().next();
        assert_eq!(c.next().prev(), c);
    }
}
