/// Generates an RGBA8 checkerboard of `cell`-pixel squares.
///
/// Stands in for an image asset so the textured samples need nothing on disk.
pub fn checkerboard_rgba8(width: u32, height: u32, cell: u32) -> Vec<u8> {
    const LIGHT: [u8; 4] = [232, 196, 120, 255];
    const DARK: [u8; 4] = [96, 52, 28, 255];

    let cell = cell.max(1);
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let light = ((x / cell) + (y / cell)) % 2 == 0;
            pixels.extend_from_slice(if light { &LIGHT } else { &DARK });
        }
    }
    pixels
}

/// Creates a sampled 2D RGBA8 texture and uploads `pixels` into it.
///
/// Returns the texture and a default view.
pub fn upload_texture_rgba8(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    width: u32,
    height: u32,
    pixels: &[u8],
) -> (wgpu::Texture, wgpu::TextureView) {
    debug_assert_eq!(pixels.len(), (width * height * 4) as usize);

    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(p: &[u8], w: u32, x: u32, y: u32) -> &[u8] {
        let i = ((y * w + x) * 4) as usize;
        &p[i..i + 4]
    }

    #[test]
    fn size_is_four_bytes_per_pixel() {
        assert_eq!(checkerboard_rgba8(8, 4, 2).len(), 8 * 4 * 4);
    }

    #[test]
    fn cells_alternate() {
        let p = checkerboard_rgba8(4, 4, 2);
        assert_eq!(pixel(&p, 4, 0, 0), pixel(&p, 4, 1, 1));
        assert_ne!(pixel(&p, 4, 0, 0), pixel(&p, 4, 2, 0));
        assert_ne!(pixel(&p, 4, 0, 0), pixel(&p, 4, 0, 2));
        assert_eq!(pixel(&p, 4, 0, 0), pixel(&p, 4, 2, 2));
    }

    #[test]
    fn zero_cell_does_not_divide_by_zero() {
        let p = checkerboard_rgba8(2, 1, 0);
        assert_ne!(pixel(&p, 2, 0, 0), pixel(&p, 2, 1, 0));
    }
}
