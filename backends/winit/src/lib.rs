use anyhow::Context;
use raw_window_handle::{HasRawDisplayHandle, HasRawWindowHandle};
use touchbridge_core::bridge::RenderBridge;
use touchbridge_core::input::{Input, PointerSample, TouchAction, TouchEvent};
use touchbridge_core::interpreter::Interpreter;
use touchbridge_core::pipeline::Pipeline;
use touchbridge_core::raw_handle::SurfaceHandle;
use touchbridge_core::types::Point;
use tracing::warn;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, MouseButton, Touch, TouchPhase, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

/// Contact id synthesized for the mouse cursor, outside the id range hosts
/// assign to real touch contacts.
const MOUSE_CONTACT_ID: i32 = -1;

pub struct Window;

impl Window {
    /// Open a window and run its event loop, feeding every surface and
    /// pointer event through a [`Pipeline`] composed from the interpreter
    /// `I` and the given Render Bridge.
    ///
    /// winit reports one contact per event; the loop mirrors the pressed
    /// set and hands the core full batches. The mouse is mapped onto a
    /// synthetic contact so drag policies work without a touchscreen.
    pub fn open_blocking<I, B>(
        title: &str,
        width: u32,
        height: u32,
        bridge: B,
    ) -> anyhow::Result<()>
    where
        I: 'static + Interpreter,
        B: 'static + RenderBridge,
    {
        let event_loop = EventLoop::new();
        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(width as f64, height as f64))
            .build(&event_loop)
            .context("failed to create window")?;

        let mut pipeline: Pipeline<I, B> = Pipeline::new(bridge);
        let handle = SurfaceHandle::new(window.raw_display_handle(), window.raw_window_handle());
        dispatch(&mut pipeline, Input::SurfaceCreated { handle });
        let size = window.inner_size();
        dispatch(
            &mut pipeline,
            Input::Resize {
                width: size.width,
                height: size.height,
            },
        );

        let mut contacts = ContactSet::default();
        let mut cursor = Point::default();

        event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Wait;

            let Event::WindowEvent { window_id, event } = event else {
                return;
            };
            if window_id != window.id() {
                return;
            }
            match event {
                WindowEvent::CloseRequested => {
                    dispatch(&mut pipeline, Input::SurfaceDestroyed);
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    dispatch(
                        &mut pipeline,
                        Input::Resize {
                            width: size.width,
                            height: size.height,
                        },
                    );
                }
                WindowEvent::Touch(Touch {
                    id,
                    phase,
                    location,
                    force,
                    ..
                }) => {
                    let position = Point::new(location.x as f32, location.y as f32);
                    let size = force.map(|f| f.normalized() as f32).unwrap_or(0.0);
                    let batch = match phase {
                        TouchPhase::Started => contacts.press(id as i32, position, size),
                        TouchPhase::Moved => contacts.motion(id as i32, position, size),
                        TouchPhase::Ended => contacts.release(id as i32, position, size),
                        TouchPhase::Cancelled => contacts.cancel(id as i32, position, size),
                    };
                    if let Some(batch) = batch {
                        dispatch(&mut pipeline, Input::Touch(batch));
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Point::new(position.x as f32, position.y as f32);
                    // Only drags; a hovering cursor is not a contact.
                    if let Some(batch) = contacts.motion(MOUSE_CONTACT_ID, cursor, 0.0) {
                        dispatch(&mut pipeline, Input::Touch(batch));
                    }
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => {
                    if let Some(batch) = contacts.press(MOUSE_CONTACT_ID, cursor, 0.0) {
                        dispatch(&mut pipeline, Input::Touch(batch));
                    }
                }
                WindowEvent::MouseInput {
                    state: ElementState::Released,
                    button: MouseButton::Left,
                    ..
                } => {
                    if let Some(batch) = contacts.release(MOUSE_CONTACT_ID, cursor, 0.0) {
                        dispatch(&mut pipeline, Input::Touch(batch));
                    }
                }
                _ => (),
            }
        })
    }
}

fn dispatch<I: Interpreter, B: RenderBridge>(pipeline: &mut Pipeline<I, B>, input: Input) {
    if let Err(err) = pipeline.handle_input(&input) {
        warn!(%err, "dropped input event");
    }
}

/// Pressed-contact set mirrored on the adapter side, in press order. The
/// core consumes full batches carrying every held contact, so each winit
/// event is expanded against this set.
#[derive(Debug, Default)]
struct ContactSet {
    pressed: Vec<PointerSample>,
}

impl ContactSet {
    fn press(&mut self, id: i32, position: Point, size: f32) -> Option<TouchEvent> {
        if self.pressed.iter().any(|p| p.id == id) {
            // The host repeated a down for a held contact; drop it here.
            return None;
        }
        self.pressed.push(PointerSample { id, position, size });
        let action = if self.pressed.len() == 1 {
            TouchAction::Down
        } else {
            TouchAction::PointerDown
        };
        Some(TouchEvent {
            action,
            action_index: self.pressed.len() - 1,
            pointers: self.pressed.clone(),
        })
    }

    fn motion(&mut self, id: i32, position: Point, size: f32) -> Option<TouchEvent> {
        let index = self.pressed.iter().position(|p| p.id == id)?;
        self.pressed[index] = PointerSample { id, position, size };
        Some(TouchEvent {
            action: TouchAction::Moved,
            action_index: index,
            pointers: self.pressed.clone(),
        })
    }

    fn release(&mut self, id: i32, position: Point, size: f32) -> Option<TouchEvent> {
        self.lift(id, position, size, |remaining| {
            if remaining == 0 {
                TouchAction::Up
            } else {
                TouchAction::PointerUp
            }
        })
    }

    fn cancel(&mut self, id: i32, position: Point, size: f32) -> Option<TouchEvent> {
        self.lift(id, position, size, |_| TouchAction::Cancel)
    }

    // The lifted contact stays in the reported batch, then leaves the set.
    fn lift(
        &mut self,
        id: i32,
        position: Point,
        size: f32,
        action: impl Fn(usize) -> TouchAction,
    ) -> Option<TouchEvent> {
        let index = self.pressed.iter().position(|p| p.id == id)?;
        self.pressed[index] = PointerSample { id, position, size };
        let event = TouchEvent {
            action: action(self.pressed.len() - 1),
            action_index: index,
            pointers: self.pressed.clone(),
        };
        self.pressed.remove(index);
        Some(event)
    }
}
