use tracing::trace;

use crate::bridge::RenderBridge;
use crate::contact::{ContactPhase, ContactTracker};
use crate::error::InputError;
use crate::input::{TouchAction, TouchEvent};
use crate::interpreter::Interpreter;
use crate::surface::SurfaceExtent;

/// Tracks every concurrent contact and forwards one lifecycle record per
/// contact touched by the batch, then asks for a single redraw.
#[derive(Debug, Default)]
pub struct MultiTouchInterpreter {
    tracker: ContactTracker,
}

impl MultiTouchInterpreter {
    pub fn tracker(&self) -> &ContactTracker {
        &self.tracker
    }
}

impl Interpreter for MultiTouchInterpreter {
    fn handle_touch<B: RenderBridge>(
        &mut self,
        event: &TouchEvent,
        extent: &SurfaceExtent,
        bridge: &mut B,
    ) -> Result<(), InputError> {
        match event.action {
            TouchAction::Down | TouchAction::PointerDown => {
                let sample = event.action_sample()?;
                let position = extent.normalize(sample.position)?;
                self.tracker.begin(sample.id, position, sample.size)?;
                bridge.update_pointer(sample.id, position, sample.size, ContactPhase::Began);
            }
            TouchAction::Moved => {
                // Validate the whole batch before the first forward; a bad
                // batch must not leave partial updates behind.
                let mut updates = Vec::with_capacity(event.pointers.len());
                for sample in &event.pointers {
                    let position = extent.normalize(sample.position)?;
                    if !self.tracker.contains(sample.id) {
                        return Err(InputError::UnknownContactReference { id: sample.id });
                    }
                    updates.push((sample.id, position, sample.size));
                }
                for (id, position, size) in updates {
                    self.tracker.update(id, position, size)?;
                    bridge.update_pointer(id, position, size, ContactPhase::Moved);
                }
            }
            TouchAction::Up | TouchAction::PointerUp => {
                let sample = event.action_sample()?;
                let position = extent.normalize(sample.position)?;
                self.tracker.end(sample.id)?;
                bridge.update_pointer(sample.id, position, sample.size, ContactPhase::Ended);
            }
            other => {
                trace!(action = ?other, "unhandled touch action");
            }
        }
        // Batches are the redraw unit, however many records went through.
        bridge.request_redraw();
        Ok(())
    }

    fn reset(&mut self) {
        self.tracker.clear();
    }
}
