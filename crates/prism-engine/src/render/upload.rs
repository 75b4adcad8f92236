use bytemuck::Pod;
use wgpu::util::DeviceExt;

/// Rounds `n` up to the buffer copy alignment.
#[inline]
fn align_copy(n: u64) -> u64 {
    n.next_multiple_of(wgpu::COPY_BUFFER_ALIGNMENT)
}

/// Creates an uninitialized GPU-only buffer large enough for `len` elements of `T`.
///
/// The size is padded to the copy alignment and `COPY_DST` is always added,
/// so the buffer can be the target of a [`StagingUpload`].
pub fn create_gpu_buffer<T: Pod>(
    device: &wgpu::Device,
    label: &str,
    len: usize,
    usage: wgpu::BufferUsages,
) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: align_copy((len * std::mem::size_of::<T>()) as u64),
        usage: usage | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Appends `raw` to `bytes`, zero-padded to the copy alignment.
/// Returns the offset and padded size of the appended region.
fn pack(bytes: &mut Vec<u8>, raw: &[u8]) -> (u64, u64) {
    let offset = bytes.len() as u64;
    let size = align_copy(raw.len() as u64);
    bytes.extend_from_slice(raw);
    bytes.resize((offset + size) as usize, 0);
    (offset, size)
}

struct Region<'a> {
    dst: &'a wgpu::Buffer,
    src_offset: u64,
    size: u64,
}

/// Batches several buffer uploads through a single staging buffer.
///
/// Data is packed back to back (each region aligned to the copy alignment),
/// written once, then copied into the destinations in one copy pass.
#[derive(Default)]
pub struct StagingUpload<'a> {
    bytes: Vec<u8>,
    regions: Vec<Region<'a>>,
}

impl<'a> StagingUpload<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `data` to be copied to the start of `dst`.
    pub fn push<T: Pod>(&mut self, dst: &'a wgpu::Buffer, data: &[T]) -> &mut Self {
        let (src_offset, size) = pack(&mut self.bytes, bytemuck::cast_slice(data));
        self.regions.push(Region { dst, src_offset, size });
        self
    }

    /// Total staging size in bytes.
    pub fn staged_len(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Records the copies and submits them. The staging buffer is released
    /// once the GPU is done with it.
    pub fn submit(self, device: &wgpu::Device, queue: &wgpu::Queue) {
        if self.regions.is_empty() {
            return;
        }

        let staging = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("prism staging buffer"),
            contents: &self.bytes,
            usage: wgpu::BufferUsages::COPY_SRC,
        });

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("prism upload encoder"),
        });
        for r in &self.regions {
            encoder.copy_buffer_to_buffer(&staging, r.src_offset, r.dst, 0, r.size);
        }
        queue.submit(std::iter::once(encoder.finish()));

        log::debug!(
            "uploaded {} bytes into {} buffer(s)",
            self.bytes.len(),
            self.regions.len()
        );
    }
}
