use tracing::trace;

use crate::bridge::RenderBridge;
use crate::error::InputError;
use crate::input::{TouchAction, TouchEvent};
use crate::interpreter::Interpreter;
use crate::surface::SurfaceExtent;
use crate::types::{Point, Pos};

/// Motion below this magnitude on both axes is a dead frame.
const MOTION_EPSILON: f32 = 1e-6;

/// Converts a single-contact drag into incremental rotation requests.
///
/// The rotation axis is built from the swapped delta components, `(vy, vx,
/// 0)`, with the drag distance as magnitude. That argument order is the
/// contract with the renderer.
#[derive(Debug, Default)]
pub struct DragInterpreter {
    previous: Option<Point>,
}

impl Interpreter for DragInterpreter {
    fn handle_touch<B: RenderBridge>(
        &mut self,
        event: &TouchEvent,
        extent: &SurfaceExtent,
        bridge: &mut B,
    ) -> Result<(), InputError> {
        let Some(sample) = event.pointers.first() else {
            trace!("empty touch batch");
            return Ok(());
        };
        match event.action {
            TouchAction::Down => {
                self.previous = Some(extent.normalize(sample.position)?);
            }
            TouchAction::Moved => {
                let Some(previous) = self.previous else {
                    trace!("move without an active drag");
                    return Ok(());
                };
                let position = extent.normalize(sample.position)?;
                let delta = position - previous;
                // Advance across dead frames too, so velocity cannot pool up
                // and release in one jump once motion resumes.
                self.previous = Some(position);
                if delta.x.abs() < MOTION_EPSILON && delta.y.abs() < MOTION_EPSILON {
                    return Ok(());
                }
                let distance = (delta.x * delta.x + delta.y * delta.y).sqrt();
                bridge.apply_rotation(distance, Pos::new(delta.y, delta.x, 0.0));
                bridge.request_redraw();
            }
            TouchAction::Up => {
                self.previous = None;
            }
            // Single-contact policy: secondary contacts and cancels are noise.
            _ => {}
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.previous = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::testing::{BridgeCall, RecordingBridge};
    use crate::input::PointerSample;
    use crate::types::Point;

    fn extent() -> SurfaceExtent {
        let mut e = SurfaceExtent::new();
        e.resize(1000, 500);
        e
    }

    fn batch(action: TouchAction, x: f32, y: f32) -> TouchEvent {
        TouchEvent {
            action,
            action_index: 0,
            pointers: vec![PointerSample {
                id: 0,
                position: Point::new(x, y),
                size: 0.0,
            }],
        }
    }

    #[test]
    fn test_down_forwards_nothing() {
        let mut drag = DragInterpreter::default();
        let mut bridge = RecordingBridge::default();
        drag.handle_touch(&batch(TouchAction::Down, 500.0, 250.0), &extent(), &mut bridge)
            .unwrap();
        assert!(bridge.calls.is_empty());
    }

    #[test]
    fn test_move_rotates_around_swapped_axis() {
        let mut drag = DragInterpreter::default();
        let mut bridge = RecordingBridge::default();
        let e = extent();
        drag.handle_touch(&batch(TouchAction::Down, 500.0, 250.0), &e, &mut bridge)
            .unwrap();
        drag.handle_touch(&batch(TouchAction::Moved, 750.0, 250.0), &e, &mut bridge)
            .unwrap();
        assert_eq!(
            bridge.calls,
            vec![
                BridgeCall::ApplyRotation {
                    radius: 0.5,
                    axis: Pos::new(0.0, 0.5, 0.0),
                },
                BridgeCall::RequestRedraw,
            ]
        );
    }

    #[test]
    fn test_dead_frame_advances_previous_silently() {
        let mut drag = DragInterpreter::default();
        let mut bridge = RecordingBridge::default();
        let e = extent();
        drag.handle_touch(&batch(TouchAction::Down, 500.0, 250.0), &e, &mut bridge)
            .unwrap();
        // Same position: below the motion threshold on both axes.
        drag.handle_touch(&batch(TouchAction::Moved, 500.0, 250.0), &e, &mut bridge)
            .unwrap();
        assert!(bridge.calls.is_empty());
        // The next real move is measured from the dead frame, not before it.
        drag.handle_touch(&batch(TouchAction::Moved, 750.0, 250.0), &e, &mut bridge)
            .unwrap();
        assert_eq!(bridge.rotations(), vec![(0.5, Pos::new(0.0, 0.5, 0.0))]);
    }

    #[test]
    fn test_up_discards_drag_state() {
        let mut drag = DragInterpreter::default();
        let mut bridge = RecordingBridge::default();
        let e = extent();
        drag.handle_touch(&batch(TouchAction::Down, 500.0, 250.0), &e, &mut bridge)
            .unwrap();
        drag.handle_touch(&batch(TouchAction::Up, 500.0, 250.0), &e, &mut bridge)
            .unwrap();
        // Moves after release have nothing to diff against.
        drag.handle_touch(&batch(TouchAction::Moved, 750.0, 250.0), &e, &mut bridge)
            .unwrap();
        assert!(bridge.calls.is_empty());
    }

    #[test]
    fn test_invalid_extent_rejects_begin() {
        let mut drag = DragInterpreter::default();
        let mut bridge = RecordingBridge::default();
        assert_eq!(
            drag.handle_touch(
                &batch(TouchAction::Down, 500.0, 250.0),
                &SurfaceExtent::new(),
                &mut bridge,
            ),
            Err(InputError::InvalidSurfaceExtent)
        );
        assert!(bridge.calls.is_empty());
    }
}
