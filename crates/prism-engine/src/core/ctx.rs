use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::window::{Window, WindowId};

use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::InputFrame;
use crate::time::FrameTime;

use super::app::AppControl;

/// Window handle and metadata for the current frame.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

/// Moves `window` to the center of its current monitor.
pub(crate) fn center_window(window: &Window) {
    let Some(monitor) = window.current_monitor() else {
        return;
    };
    let (pos, screen) = (monitor.position(), monitor.size());
    let outer = window.outer_size();

    let x = pos.x + (screen.width as i32 - outer.width as i32) / 2;
    let y = pos.y + (screen.height as i32 - outer.height as i32) / 2;
    window.set_outer_position(PhysicalPosition::new(x, y));
}

/// Window changes requested during a frame.
///
/// The runtime carries them out after `App::on_frame` returns, through the
/// same path as a platform `Resized` event, so `App::on_resize` always runs.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub(crate) struct WindowRequests {
    applied_size: Option<PhysicalSize<u32>>,
    center: bool,
}

impl WindowRequests {
    /// Records a size request. `applied` is the size the platform applied
    /// synchronously, if any; otherwise a `Resized` event follows later.
    pub(crate) fn record_resize(&mut self, applied: Option<PhysicalSize<u32>>) {
        self.applied_size = applied;
        self.center = true;
    }

    /// Size applied without a `Resized` event, to be handled once.
    pub(crate) fn take_applied_size(&mut self) -> Option<PhysicalSize<u32>> {
        self.applied_size.take()
    }

    /// True once after a resize request. Checked only when the new size is
    /// in effect, so centering uses the new outer size.
    pub(crate) fn take_center(&mut self) -> bool {
        std::mem::take(&mut self.center)
    }
}

/// Per-frame context passed to `App::on_frame`.
///
/// `'a` is the callback duration; `'w` is the window borrow carried by `Gpu<'w>`.
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub input: &'a InputFrame,
    pub time: FrameTime,
    pub(crate) requests: &'a mut WindowRequests,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Requests a new inner size (physical pixels) and centers the window
    /// once that size is in effect.
    ///
    /// The surface is reconfigured and `App::on_resize` runs after this frame,
    /// whether the platform applies the size immediately or later through a
    /// `Resized` event.
    pub fn resize_window(&mut self, width: u32, height: u32) {
        let applied = self
            .window
            .window
            .request_inner_size(PhysicalSize::new(width, height));
        self.requests.record_resize(applied);
    }

    /// Acquires a frame, opens one render pass that clears color (and depth,
    /// when the GPU owns a depth target), runs `draw`, then presents.
    pub fn render<F>(&mut self, clear: wgpu::Color, draw: F) -> AppControl
    where
        F: FnOnce(&mut wgpu::RenderPass<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    _ => AppControl::Continue,
                };
            }
        };

        {
            let depth_stencil_attachment =
                self.gpu
                    .depth_view()
                    .map(|view| wgpu::RenderPassDepthStencilAttachment {
                        view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    });

            let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("prism main pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            draw(&mut rpass);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}
