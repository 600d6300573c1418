use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// All callbacks run synchronously on the event-loop thread; a resize callback
/// always returns before the next `on_frame` for that window starts.
pub trait App {
    /// Called for window events, before the runtime handles them.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called with the framebuffer size in physical pixels: once right after the
    /// window and GPU context are created, then after every resize.
    ///
    /// Either dimension may be zero (minimized window).
    fn on_resize(&mut self, window_id: WindowId, width: u32, height: u32);

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
