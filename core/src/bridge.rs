use crate::contact::ContactPhase;
use crate::raw_handle::SurfaceHandle;
use crate::types::{Point, Pos};

/// The call surface of the external rendering engine.
///
/// Consumed but never implemented by this crate; whoever owns the renderer
/// provides the implementation. `init` must complete before any other call,
/// and nothing may be called after `cleanup` until the next `init` — the
/// [`Pipeline`][crate::pipeline::Pipeline] upholds that bracket.
pub trait RenderBridge {
    /// Bind the renderer's resources to the lifetime of `surface`.
    fn init(&mut self, surface: SurfaceHandle);

    /// Release everything acquired since `init`.
    fn cleanup(&mut self);

    /// Accumulate an incremental rotation of `radius` around `axis`.
    fn apply_rotation(&mut self, radius: f32, axis: Pos);

    /// Upsert or remove the visual state of one contact.
    fn update_pointer(&mut self, id: i32, position: Point, size: f32, phase: ContactPhase);

    /// Produce one frame reflecting every mutation since the previous
    /// request. Requested once per host event batch, never per contact.
    fn request_redraw(&mut self);
}
