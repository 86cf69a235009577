use raw_window_handle::{
    HasRawDisplayHandle, HasRawWindowHandle, RawDisplayHandle, RawWindowHandle,
};

/// Handle pair for the host surface the renderer draws to.
///
/// Carried by [`Input::SurfaceCreated`][crate::input::Input::SurfaceCreated]
/// and handed to [`RenderBridge::init`][crate::bridge::RenderBridge::init]
/// unchanged.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceHandle(pub RawDisplayHandle, pub RawWindowHandle);

impl SurfaceHandle {
    pub fn new(display: RawDisplayHandle, window: RawWindowHandle) -> Self {
        Self(display, window)
    }
}

unsafe impl HasRawDisplayHandle for SurfaceHandle {
    fn raw_display_handle(&self) -> RawDisplayHandle {
        self.0
    }
}

unsafe impl HasRawWindowHandle for SurfaceHandle {
    fn raw_window_handle(&self) -> RawWindowHandle {
        self.1
    }
}
