use glam::Vec3;

// Shared viewer tuning constants used by the web frontend and tests.

// Gestures
pub const ROTATION_SENSITIVITY: f32 = 0.5; // degrees of rotation per pixel of one-finger drag
pub const MIN_SCALE: f32 = 0.01; // floor applied to pinch results so scale stays positive

// Transform defaults
pub const DEFAULT_SCALE: f32 = 1.0;
pub const ORIGIN: Vec3 = Vec3::ZERO;
pub const NO_ROTATION: Vec3 = Vec3::ZERO;
