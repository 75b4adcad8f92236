/// The sampler presets cycled through by the textured samples.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SamplerKind {
    PointClamp,
    PointWrap,
    LinearClamp,
    LinearWrap,
    AnisotropicClamp,
    AnisotropicWrap,
}

impl SamplerKind {
    pub const ALL: [SamplerKind; 6] = [
        SamplerKind::PointClamp,
        SamplerKind::PointWrap,
        SamplerKind::LinearClamp,
        SamplerKind::LinearWrap,
        SamplerKind::AnisotropicClamp,
        SamplerKind::AnisotropicWrap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SamplerKind::PointClamp => "PointClamp",
            SamplerKind::PointWrap => "PointWrap",
            SamplerKind::LinearClamp => "LinearClamp",
            SamplerKind::LinearWrap => "LinearWrap",
            SamplerKind::AnisotropicClamp => "AnisotropicClamp",
            SamplerKind::AnisotropicWrap => "AnisotropicWrap",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }

    /// Next preset, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous preset, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn descriptor(self) -> wgpu::SamplerDescriptor<'static> {
        let address_mode = match self {
            SamplerKind::PointClamp | SamplerKind::LinearClamp | SamplerKind::AnisotropicClamp => {
                wgpu::AddressMode::ClampToEdge
            }
            SamplerKind::PointWrap | SamplerKind::LinearWrap | SamplerKind::AnisotropicWrap => {
                wgpu::AddressMode::Repeat
            }
        };

        let (filter, mipmap_filter) = match self {
            SamplerKind::PointClamp | SamplerKind::PointWrap => {
                (wgpu::FilterMode::Nearest, wgpu::MipmapFilterMode::Nearest)
            }
            _ => (wgpu::FilterMode::Linear, wgpu::MipmapFilterMode::Linear),
        };

        // Anisotropic filtering requires linear filtering on every axis.
        let anisotropy_clamp = match self {
            SamplerKind::AnisotropicClamp | SamplerKind::AnisotropicWrap => 4,
            _ => 1,
        };

        wgpu::SamplerDescriptor {
            label: Some(self.name()),
            address_mode_u: address_mode,
            address_mode_v: address_mode,
            address_mode_w: address_mode,
            mag_filter: filter,
            min_filter: filter,
            mipmap_filter,
            anisotropy_clamp,
            ..Default::default()
        }
    }
}
