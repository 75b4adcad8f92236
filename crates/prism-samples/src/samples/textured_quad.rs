use anyhow::Result;
use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::device::Gpu;
use prism_engine::input::Key;
use prism_engine::render::{
    checkerboard_rgba8, create_gpu_buffer, upload_texture_rgba8, PositionTextureVertex,
    SamplerKind, StagingUpload,
};

use super::pipeline::{
    create_pipeline, texture_bind_group, texture_bind_group_layout, PipelineDesc, CLEAR_BLACK,
};

/// Full-viewport quad; uv runs 0..4 so wrapping samplers repeat the texture.
const VERTICES: [PositionTextureVertex; 4] = [
    PositionTextureVertex::new(-1.0, 1.0, 0.0, 0.0, 0.0),
    PositionTextureVertex::new(1.0, 1.0, 0.0, 4.0, 0.0),
    PositionTextureVertex::new(1.0, -1.0, 0.0, 4.0, 4.0),
    PositionTextureVertex::new(-1.0, -1.0, 0.0, 0.0, 4.0),
];

const INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

const TEXTURE_SIZE: u32 = 64;
const CHECKER_CELL: u32 = 8;

struct Resources {
    pipeline: wgpu::RenderPipeline,
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    /// One bind group per entry of `SamplerKind::ALL`.
    bind_groups: Vec<wgpu::BindGroup>,
    _texture: wgpu::Texture,
}

/// A repeating textured quad; Left/Right switch between sampler presets.
#[derive(Default)]
pub struct TexturedQuad {
    res: Option<Resources>,
    sampler: Option<SamplerKind>,
}

impl TexturedQuad {
    fn current(&self) -> SamplerKind {
        self.sampler.unwrap_or(SamplerKind::ALL[0])
    }
}

impl App for TexturedQuad {
    fn on_init(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let device = gpu.device();

        let texture_layout = texture_bind_group_layout(device, "textured-quad texture bgl");
        let buffers = [PositionTextureVertex::layout()];
        let layouts = [&texture_layout];
        let desc = PipelineDesc {
            buffers: &buffers,
            bind_group_layouts: &layouts,
            ..PipelineDesc::new(
                "textured-quad pipeline",
                include_str!("../shaders/textured_quad.wgsl"),
                gpu.surface_format(),
            )
        };
        let pipeline = create_pipeline(device, &desc);

        let pixels = checkerboard_rgba8(TEXTURE_SIZE, TEXTURE_SIZE, CHECKER_CELL);
        let (texture, view) = upload_texture_rgba8(
            device,
            gpu.queue(),
            "textured-quad checkerboard",
            TEXTURE_SIZE,
            TEXTURE_SIZE,
            &pixels,
        );

        let bind_groups = SamplerKind::ALL
            .iter()
            .map(|kind| {
                let sampler = device.create_sampler(&kind.descriptor());
                texture_bind_group(device, kind.name(), &texture_layout, &view, &sampler)
            })
            .collect();

        let vertices = create_gpu_buffer::<PositionTextureVertex>(
            device,
            "textured-quad vertices",
            VERTICES.len(),
            wgpu::BufferUsages::VERTEX,
        );
        let indices = create_gpu_buffer::<u16>(
            device,
            "textured-quad indices",
            INDICES.len(),
            wgpu::BufferUsages::INDEX,
        );

        let mut upload = StagingUpload::new();
        upload.push(&vertices, &VERTICES).push(&indices, &INDICES);
        upload.submit(device, gpu.queue());

        log::info!("press Left/Right to switch between sampler states");
        log::info!("sampler state: {}", self.current().name());

        self.res = Some(Resources {
            pipeline,
            vertices,
            indices,
            bind_groups,
            _texture: texture,
        });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input.pressed(Key::ArrowLeft) {
            self.sampler = Some(self.current().prev());
            log::info!("sampler state: {}", self.current().name());
        }
        if ctx.input.pressed(Key::ArrowRight) {
            self.sampler = Some(self.current().next());
            log::info!("sampler state: {}", self.current().name());
        }

        let index = sampler_index(self.current());
        let Some(res) = self.res.as_ref() else {
            return AppControl::Exit;
        };

        ctx.render(CLEAR_BLACK, |rpass| {
            rpass.set_pipeline(&res.pipeline);
            rpass.set_bind_group(0, &res.bind_groups[index], &[]);
            rpass.set_vertex_buffer(0, res.vertices.slice(..));
            rpass.set_index_buffer(res.indices.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..INDICES.len() as u32, 0, 0..1);
        })
    }
}

fn sampler_index(kind: SamplerKind) -> usize {
    SamplerKind::ALL.iter().position(|k| *k == kind).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampler_indices_cover_all_presets() {
        let indices: Vec<usize> = SamplerKind::ALL.iter().map(|k| sampler_index(*k)).collect();
        assert_eq!(indices, (0..SamplerKind::ALL.len()).collect::<Vec<_>>());
    }

    #[test]
    fn quad_uv_spans_four_repeats() {
        let max_u = VERTICES.iter().map(|v| v.uv[0]).fold(0.0, f32::max);
        let max_v = VERTICES.iter().map(|v| v.uv[1]).fold(0.0, f32::max);
        assert_eq!((max_u, max_v), (4.0, 4.0));
    }

    #[test]
    fn starts_on_first_preset() {
        assert_eq!(TexturedQuad::default().current(), SamplerKind::PointClamp);
    }
}
