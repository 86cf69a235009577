//! Types for the raw input events a platform backend delivers.

use crate::error::InputError;
use crate::raw_handle::SurfaceHandle;
use crate::types::Point;

/// One contact's sample within a [`TouchEvent`] batch.
///
/// Positions are in device pixels; normalization happens downstream, against
/// the extent current when the batch is interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Host-assigned contact id, valid for the life of the contact.
    pub id: i32,
    pub position: Point,
    /// Major-axis magnitude of the contact area, in device pixels.
    pub size: f32,
}

/// The action a [`TouchEvent`] batch reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    /// The first contact touched the surface.
    Down,
    /// An additional contact touched while others are held.
    PointerDown,
    /// One or more held contacts moved.
    Moved,
    /// The last held contact left the surface.
    Up,
    /// A contact left the surface while others remain held.
    PointerUp,
    /// The host aborted the gesture.
    Cancel,
}

/// One raw host input event: an action plus the full set of pressed contacts.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    /// Index into `pointers` of the contact the action refers to.
    pub action_index: usize,
    /// Every currently pressed contact, in host-reported order.
    pub pointers: Vec<PointerSample>,
}

impl TouchEvent {
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// The sample the batch's action refers to.
    pub(crate) fn action_sample(&self) -> Result<&PointerSample, InputError> {
        self.pointers
            .get(self.action_index)
            .ok_or(InputError::MalformedEventBatch {
                index: self.action_index,
                len: self.pointers.len(),
            })
    }
}

/// Inputs delivered by a platform backend, one call per host event.
#[derive(Debug)]
pub enum Input {
    /// The host surface exists and the renderer may initialize against it.
    SurfaceCreated { handle: SurfaceHandle },
    /// The surface extent changed. Zero dimensions are ignored.
    Resize { width: u32, height: u32 },
    /// The surface is going away; renderer resources must be released.
    SurfaceDestroyed,
    Touch(TouchEvent),
}
