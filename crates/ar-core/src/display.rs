//! Boundary between the viewer logic and whatever renders the scene.
//!
//! The core never touches the DOM directly. It pushes typed values through
//! [`SceneDisplay`]; implementations convert them to their own encoding (for
//! the A-Frame scene that is the `"x y z"` attribute form from [`vec3_attr`]).

use glam::Vec3;

/// Transform applied to the displayed model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in degrees: pitch, yaw, roll.
    pub rotation: Vec3,
    pub scale: Vec3,
}

pub trait SceneDisplay {
    fn set_asset_path(&mut self, path: &str);
    fn set_transform(&mut self, transform: &Transform);
    fn set_metadata_text(&mut self, name: &str, description: &str, price: &str);
    fn set_info_visible(&mut self, visible: bool);
}

/// Encode a vector the way declarative scene attributes expect it.
#[inline]
pub fn vec3_attr(v: Vec3) -> String {
    format!("{} {} {}", v.x, v.y, v.z)
}
