use crate::constants::{DEFAULT_SCALE, NO_ROTATION, ORIGIN};
use glam::Vec3;

/// Mutable view of the currently displayed model.
///
/// Only the selector and the gesture interpreter write to it. `scale` is a
/// uniform user multiplier on top of the entry's declared scale and is always
/// strictly positive.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerState {
    pub selected_key: Option<String>,
    pub scale: f32,
    pub rotation: Vec3,
    pub position: Vec3,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            selected_key: None,
            scale: DEFAULT_SCALE,
            rotation: NO_ROTATION,
            position: ORIGIN,
        }
    }
}

impl ViewerState {
    pub fn reset_transform(&mut self, position: Vec3) {
        self.position = position;
        self.rotation = NO_ROTATION;
        self.scale = DEFAULT_SCALE;
    }
}
