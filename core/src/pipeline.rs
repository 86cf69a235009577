use tracing::{debug, trace};

use crate::bridge::RenderBridge;
use crate::error::InputError;
use crate::input::Input;
use crate::interpreter::Interpreter;
use crate::surface::SurfaceExtent;

/// Owns the interpretation policy, the surface extent, and the Render
/// Bridge. A platform backend feeds it [`Input`]s, one call per host event,
/// all on one thread.
///
/// The policy is fixed when the pipeline is composed; see
/// [`DragInterpreter`][crate::interpreter::DragInterpreter] and
/// [`MultiTouchInterpreter`][crate::interpreter::MultiTouchInterpreter].
pub struct Pipeline<I: Interpreter, B: RenderBridge> {
    extent: SurfaceExtent,
    interpreter: I,
    bridge: B,
    initialized: bool,
}

impl<I: Interpreter, B: RenderBridge> Pipeline<I, B> {
    pub fn new(bridge: B) -> Self {
        Self {
            extent: SurfaceExtent::new(),
            interpreter: I::default(),
            bridge,
            initialized: false,
        }
    }

    /// Handle one [`Input`] from the platform backend.
    ///
    /// An `Err` means the event was dropped whole: no Bridge call was made
    /// for it and tracked state is unchanged. Callers log and carry on; the
    /// error never poisons later events.
    pub fn handle_input(&mut self, input: &Input) -> Result<(), InputError> {
        match input {
            Input::SurfaceCreated { handle } => {
                debug!("surface created");
                self.bridge.init(*handle);
                self.initialized = true;
                self.bridge.request_redraw();
            }
            Input::Resize { width, height } => {
                debug!(width, height, "surface resized");
                self.extent.resize(*width, *height);
            }
            Input::SurfaceDestroyed => {
                debug!("surface destroyed");
                self.extent.invalidate();
                self.interpreter.reset();
                if self.initialized {
                    self.initialized = false;
                    self.bridge.cleanup();
                }
            }
            Input::Touch(event) => {
                trace!(?event, "touch");
                if !self.initialized {
                    return Err(InputError::InvalidSurfaceExtent);
                }
                self.interpreter
                    .handle_touch(event, &self.extent, &mut self.bridge)?;
            }
        }
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn extent(&self) -> &SurfaceExtent {
        &self.extent
    }

    pub fn interpreter(&self) -> &I {
        &self.interpreter
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut B {
        &mut self.bridge
    }
}
