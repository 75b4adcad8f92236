//! The sample programs.
//!
//! Each sample is an independent [`App`](prism_engine::core::App) with its own
//! pipeline and buffers; nothing is shared between them beyond the helpers in
//! `pipeline`.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use prism_engine::device::GpuInit;
use prism_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::PhysicalSize;

mod animated_quad;
mod cube;
mod instanced;
mod pipeline;
mod resize;
mod textured_quad;
mod triangle;
mod vertex_buffer;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SampleKind {
    Triangle,
    VertexBuffer,
    Instanced,
    TexturedQuad,
    AnimatedQuad,
    Cube,
    Resize,
}

impl SampleKind {
    pub const ALL: [SampleKind; 7] = [
        SampleKind::Triangle,
        SampleKind::VertexBuffer,
        SampleKind::Instanced,
        SampleKind::TexturedQuad,
        SampleKind::AnimatedQuad,
        SampleKind::Cube,
        SampleKind::Resize,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SampleKind::Triangle => "triangle",
            SampleKind::VertexBuffer => "vertex-buffer",
            SampleKind::Instanced => "instanced",
            SampleKind::TexturedQuad => "textured-quad",
            SampleKind::AnimatedQuad => "animated-quad",
            SampleKind::Cube => "cube",
            SampleKind::Resize => "resize",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SampleKind::Triangle => "triangle generated in the vertex shader",
            SampleKind::VertexBuffer => "triangle read from an uploaded vertex buffer",
            SampleKind::Instanced => "16 instanced triangles from one indexed draw",
            SampleKind::TexturedQuad => "textured quad; Left/Right cycle samplers",
            SampleKind::AnimatedQuad => "four rotating quads under an orthographic projection",
            SampleKind::Cube => "depth-tested cube seen from an orbiting camera",
            SampleKind::Resize => "Left/Right cycle the window resolution",
        }
    }

    fn window_title(self) -> &'static str {
        match self {
            SampleKind::Triangle => "Hello Triangle",
            SampleKind::VertexBuffer => "Basic Vertex Buffer",
            SampleKind::Instanced => "Instanced Triangles",
            SampleKind::TexturedQuad => "Textured Quad",
            SampleKind::AnimatedQuad => "Animated Quad",
            SampleKind::Cube => "Cube",
            SampleKind::Resize => "Resize",
        }
    }
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized sample name.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownSample(pub String);

impl fmt::Display for UnknownSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = SampleKind::ALL.iter().map(|s| s.name()).collect();
        write!(f, "unknown sample `{}` (expected one of: {})", self.0, names.join(", "))
    }
}

impl std::error::Error for UnknownSample {}

impl FromStr for SampleKind {
    type Err = UnknownSample;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SampleKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSample(s.to_string()))
    }
}

/// Opens a window for `sample` and runs it until closed.
pub fn run(sample: SampleKind) -> Result<()> {
    let config = RuntimeConfig {
        title: sample.window_title().to_string(),
        initial_size: PhysicalSize::new(640, 480),
        resizable: false,
    };

    match sample {
        SampleKind::Triangle => Runtime::run(config, GpuInit::default(), triangle::Triangle::default()),
        SampleKind::VertexBuffer => {
            Runtime::run(config, GpuInit::default(), vertex_buffer::VertexBuffer::default())
        }
        SampleKind::Instanced => Runtime::run(config, GpuInit::default(), instanced::Instanced::default()),
        SampleKind::TexturedQuad => {
            Runtime::run(config, GpuInit::default(), textured_quad::TexturedQuad::default())
        }
        SampleKind::AnimatedQuad => {
            Runtime::run(config, GpuInit::default(), animated_quad::AnimatedQuad::default())
        }
        SampleKind::Cube => Runtime::run(
            config,
            GpuInit::with_depth(cube::DEPTH_FORMAT),
            cube::Cube::default(),
        ),
        SampleKind::Resize => Runtime::run(config, GpuInit::default(), resize::Resize::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for kind in SampleKind::ALL {
            assert_eq!(kind.name().parse::<SampleKind>(), Ok(kind));
        }
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!("CUBE".parse::<SampleKind>(), Ok(SampleKind::Cube));
    }

    #[test]
    fn unknown_name_lists_choices() {
        let err = "teapot".parse::<SampleKind>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("teapot"));
        assert!(msg.contains("textured-quad"));
    }
}
