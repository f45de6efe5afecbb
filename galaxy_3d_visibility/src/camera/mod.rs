//! Camera module: pose capability, view frustum and inspection presets.
//!
//! The host engine owns the live camera. This module only describes the
//! narrow surface the culling core reads from it (`CameraView`) and the
//! surface preset commands write to (`CameraControl`).

mod camera;
mod frustum;
mod preset;

pub use camera::{Camera, CameraControl, CameraView, Pose};
pub use frustum::{
    Frustum, FrustumParams,
    PLANE_NEAR, PLANE_FAR, PLANE_LEFT, PLANE_RIGHT, PLANE_TOP, PLANE_BOTTOM,
    PLANE_COUNT,
};
pub use preset::CameraPreset;
