//! Interpretation policies: how raw touch batches become Bridge calls.

mod drag;
mod multi_touch;

pub use drag::DragInterpreter;
pub use multi_touch::MultiTouchInterpreter;

use crate::bridge::RenderBridge;
use crate::error::InputError;
use crate::input::TouchEvent;
use crate::surface::SurfaceExtent;

/// An input interpretation policy, chosen when the
/// [`Pipeline`][crate::pipeline::Pipeline] is composed.
pub trait Interpreter: Default {
    /// Consume one touch event batch, forwarding semantic calls to `bridge`.
    ///
    /// An `Err` drops the batch whole: no Bridge call was made for it and
    /// tracked state is left as it was.
    fn handle_touch<B: RenderBridge>(
        &mut self,
        event: &TouchEvent,
        extent: &SurfaceExtent,
        bridge: &mut B,
    ) -> Result<(), InputError>;

    /// Discard per-contact state, on surface teardown.
    fn reset(&mut self);
}
