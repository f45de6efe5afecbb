/// Camera: pose capability and a low-level passive pose container.
///
/// The culling core never drives a camera. It reads the pose through
/// `CameraView` once per tick; inspection presets write it through
/// `CameraControl`. `Camera` is a minimal implementation of both for
/// hosts (and tests) that do not have their own camera type.

use glam::Vec3;
use crate::error::{Error, Result};

/// Below this squared length `look × normal` counts as parallel.
const PARALLEL_EPSILON: f32 = 1e-8;

/// Position plus look and normal (up) directions.
///
/// Directions need not be unit length or exactly orthogonal; `basis()`
/// normalizes and orthogonalizes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub look: Vec3,
    pub normal: Vec3,
}

impl Pose {
    pub fn new(position: Vec3, look: Vec3, normal: Vec3) -> Self {
        Self { position, look, normal }
    }

    /// Same pose with both directions normalized.
    ///
    /// # Errors
    ///
    /// `Error::InvalidFrustum` if either direction has zero length
    /// or they are parallel.
    pub fn normalized(&self) -> Result<Pose> {
        let (look, _, _) = self.basis()?;
        Ok(Pose {
            position: self.position,
            look,
            normal: self.normal.normalize(),
        })
    }

    /// Orthonormal (look, right, up) frame, with `right = look × normal`
    /// and `up = right × look`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidFrustum` if either direction has zero length, is
    /// not finite, or the two are parallel.
    pub fn basis(&self) -> Result<(Vec3, Vec3, Vec3)> {
        // Not logged here: the per-tick camera refresh reports its own WARN
        let look = self.look.try_normalize().ok_or_else(|| Error::InvalidFrustum(
            format!("Look direction {} cannot be normalized", self.look)
        ))?;
        let normal = self.normal.try_normalize().ok_or_else(|| Error::InvalidFrustum(
            format!("Normal direction {} cannot be normalized", self.normal)
        ))?;
        let right = look.cross(normal);
        if right.length_squared() < PARALLEL_EPSILON {
            return Err(Error::InvalidFrustum(format!(
                "Look direction {} is parallel to normal direction {}", self.look, self.normal
            )));
        }
        let right = right.normalize();
        let up = right.cross(look);
        Ok((look, right, up))
    }
}

impl Default for Pose {
    /// Origin, looking down +X with +Z up.
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            look: Vec3::X,
            normal: Vec3::Z,
        }
    }
}

/// Read access to the live camera pose.
pub trait CameraView {
    fn position(&self) -> Vec3;
    fn look_direction(&self) -> Vec3;
    fn normal_direction(&self) -> Vec3;

    /// Snapshot of the three values above.
    fn pose(&self) -> Pose {
        Pose::new(self.position(), self.look_direction(), self.normal_direction())
    }
}

/// Write access used by camera preset commands.
pub trait CameraControl: CameraView {
    fn set_position(&mut self, position: Vec3);
    fn set_look_direction(&mut self, look: Vec3);
    fn set_normal_direction(&mut self, normal: Vec3);
}

/// Low-level camera. A passive data container: computes nothing.
#[derive(Debug, Clone, Default)]
pub struct Camera {
    pose: Pose,
}

impl Camera {
    pub fn new(pose: Pose) -> Self {
        Self { pose }
    }

    /// Camera at `position` with the default orientation (+X look, +Z up).
    pub fn at(position: Vec3) -> Self {
        Self::new(Pose { position, ..Pose::default() })
    }
}

impl CameraView for Camera {
    fn position(&self) -> Vec3 {
        self.pose.position
    }

    fn look_direction(&self) -> Vec3 {
        self.pose.look
    }

    fn normal_direction(&self) -> Vec3 {
        self.pose.normal
    }

    fn pose(&self) -> Pose {
        self.pose
    }
}

impl CameraControl for Camera {
    fn set_position(&mut self, position: Vec3) {
        self.pose.position = position;
    }

    fn set_look_direction(&mut self, look: Vec3) {
        self.pose.look = look;
    }

    fn set_normal_direction(&mut self, normal: Vec3) {
        self.pose.normal = normal;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
