//! Touch gesture recognition for the displayed model.
//!
//! One finger rotates (pitch from vertical drag, yaw from horizontal drag),
//! two fingers pinch to scale. The recognizers are selected purely by the
//! number of active pointers, so they never run at the same time.

use crate::constants::{MIN_SCALE, ROTATION_SENSITIVITY};
use crate::error::ViewerError;
use crate::state::ViewerState;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub pointer_id: i32,
    pub x: f32,
    pub y: f32,
}

impl GestureSample {
    pub fn new(pointer_id: i32, x: f32, y: f32) -> Self {
        Self { pointer_id, x, y }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    /// Also used for cancellation.
    End,
}

/// One input event with the pointers still active after it.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchInput {
    pub phase: TouchPhase,
    pub pointers: Vec<GestureSample>,
}

impl TouchInput {
    pub fn new(phase: TouchPhase, pointers: Vec<GestureSample>) -> Self {
        Self { phase, pointers }
    }

    pub fn start(pointers: &[GestureSample]) -> Self {
        Self::new(TouchPhase::Start, pointers.to_vec())
    }

    pub fn moved(pointers: &[GestureSample]) -> Self {
        Self::new(TouchPhase::Move, pointers.to_vec())
    }

    pub fn end(pointers: &[GestureSample]) -> Self {
        Self::new(TouchPhase::End, pointers.to_vec())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    OneFinger {
        last: Vec2,
    },
    TwoFinger {
        initial_distance: f32,
        initial_scale: f32,
    },
}

#[derive(Clone, Debug, Default)]
pub struct GestureInterpreter {
    state: GestureState,
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Feed one event. Returns `Ok(true)` when the viewer transform changed.
    pub fn handle(
        &mut self,
        input: &TouchInput,
        viewer: &mut ViewerState,
    ) -> Result<bool, ViewerError> {
        match input.phase {
            TouchPhase::Start | TouchPhase::End => {
                self.seed(&input.pointers, viewer);
                Ok(false)
            }
            TouchPhase::Move => self.on_move(&input.pointers, viewer),
        }
    }

    /// Drop any reference values and go idle.
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }

    // Enter the state matching the pointer count, taking fresh reference values.
    fn seed(&mut self, pointers: &[GestureSample], viewer: &ViewerState) {
        self.state = match pointers {
            [p] => GestureState::OneFinger { last: p.pos() },
            [a, b] => GestureState::TwoFinger {
                initial_distance: a.pos().distance(b.pos()),
                initial_scale: viewer.scale,
            },
            _ => GestureState::Idle,
        };
        log::debug!("[gesture] {:?}", self.state);
    }

    fn on_move(
        &mut self,
        pointers: &[GestureSample],
        viewer: &mut ViewerState,
    ) -> Result<bool, ViewerError> {
        match (self.state, pointers) {
            (GestureState::OneFinger { last }, [p]) => {
                let delta = p.pos() - last;
                viewer.rotation.x -= delta.y * ROTATION_SENSITIVITY;
                viewer.rotation.y += delta.x * ROTATION_SENSITIVITY;
                self.state = GestureState::OneFinger { last: p.pos() };
                Ok(true)
            }
            (
                GestureState::TwoFinger {
                    initial_distance,
                    initial_scale,
                },
                [a, b],
            ) => {
                let current_distance = a.pos().distance(b.pos());
                if initial_distance <= 0.0 || current_distance <= 0.0 {
                    log::debug!("[gesture] degenerate pinch skipped");
                    return Err(ViewerError::DegenerateGesture);
                }
                let scaled = (current_distance / initial_distance) * initial_scale;
                viewer.scale = if scaled.is_finite() {
                    scaled.max(MIN_SCALE)
                } else {
                    viewer.scale
                };
                Ok(true)
            }
            _ => {
                // pointer count changed without a start/end we saw
                self.seed(pointers, viewer);
                Ok(false)
            }
        }
    }
}
