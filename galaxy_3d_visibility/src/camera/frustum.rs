/// Frustum: six bounding planes of a pyramidal view volume.
///
/// Built from near/far distances, horizontal/vertical half-angles and a
/// pose (apex position, look direction, normal direction). Plane order is
/// fixed: near, far, left, right, top, bottom (see the `PLANE_*` indices).
///
/// Each plane follows the `Plane` convention: a point is inside that
/// plane's half-space when `dot(normal, p) < coefficient`, so normals
/// point out of the volume.
///
/// Invariant: `planes` always matches the stored pose. `update_pose()`
/// computes the new planes before touching any field, so a rejected pose
/// leaves the frustum exactly as it was.

use std::f32::consts::FRAC_PI_2;
use glam::Vec3;
use crate::error::{Error, Result};
use crate::math::Plane;
use super::camera::Pose;

/// Frustum plane indices
pub const PLANE_NEAR: usize = 0;
pub const PLANE_FAR: usize = 1;
pub const PLANE_LEFT: usize = 2;
pub const PLANE_RIGHT: usize = 3;
pub const PLANE_TOP: usize = 4;
pub const PLANE_BOTTOM: usize = 5;
pub const PLANE_COUNT: usize = 6;

/// Shape parameters, fixed for the lifetime of a frustum.
///
/// Angles are half-angles in radians, measured from the look axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumParams {
    pub near: f32,
    pub far: f32,
    pub half_fov_h: f32,
    pub half_fov_v: f32,
}

impl FrustumParams {
    pub fn new(near: f32, far: f32, half_fov_h: f32, half_fov_v: f32) -> Self {
        Self { near, far, half_fov_h, half_fov_v }
    }

    /// Same as `new()` with half-angles given in degrees.
    pub fn from_degrees(near: f32, far: f32, half_fov_h_deg: f32, half_fov_v_deg: f32) -> Self {
        Self::new(near, far, half_fov_h_deg.to_radians(), half_fov_v_deg.to_radians())
    }

    /// Reject degenerate shapes.
    ///
    /// # Errors
    ///
    /// `Error::InvalidFrustum` when a value is not finite, `near <= 0`,
    /// `near >= far`, or a half-angle is outside (0°, 90°).
    pub fn validate(&self) -> Result<()> {
        let values = [self.near, self.far, self.half_fov_h, self.half_fov_v];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidFrustum(format!("Non-finite parameter in {:?}", self)));
        }
        if self.near <= 0.0 {
            return Err(Error::InvalidFrustum(format!("Near distance {} must be positive", self.near)));
        }
        if self.near >= self.far {
            return Err(Error::InvalidFrustum(format!(
                "Near distance {} must be smaller than far distance {}", self.near, self.far
            )));
        }
        for (name, angle) in [("horizontal", self.half_fov_h), ("vertical", self.half_fov_v)] {
            if angle <= 0.0 || angle >= FRAC_PI_2 {
                return Err(Error::InvalidFrustum(format!(
                    "{} half-angle {}° must be within (0°, 90°)", name, angle.to_degrees()
                )));
            }
        }
        Ok(())
    }
}

impl Default for FrustumParams {
    /// 60° field of view (30° half-angles) with aspect 1, near 0.1, far 60.
    fn default() -> Self {
        Self::from_degrees(0.1, 60.0, 30.0, 30.0)
    }
}

/// Six frustum planes plus the pose they were built from.
#[derive(Debug, Clone)]
pub struct Frustum {
    params: FrustumParams,
    /// Normalized pose matching `planes`
    pose: Pose,
    /// Planes: near, far, left, right, top, bottom
    planes: [Plane; PLANE_COUNT],
    /// Bumped every time the planes are regenerated by `update_pose()`
    pose_version: u64,
}

impl Frustum {
    /// Build a frustum.
    ///
    /// # Errors
    ///
    /// `Error::InvalidFrustum` for invalid parameters (see
    /// `FrustumParams::validate`) or a pose whose directions are zero
    /// or parallel.
    pub fn new(params: FrustumParams, pose: Pose) -> Result<Self> {
        params.validate()?;
        let pose = pose.normalized()?;
        let planes = build_planes(&params, &pose)?;
        Ok(Self {
            params,
            pose,
            planes,
            pose_version: 0,
        })
    }

    /// Move the frustum and regenerate all six planes.
    ///
    /// Returns `Ok(false)` without touching the planes when the normalized
    /// pose equals the current one.
    ///
    /// # Errors
    ///
    /// `Error::InvalidFrustum` if the pose directions are zero or parallel;
    /// the frustum is left unchanged.
    pub fn update_pose(&mut self, pose: Pose) -> Result<bool> {
        let normalized = pose.normalized()?;
        if normalized == self.pose {
            return Ok(false);
        }
        let planes = build_planes(&self.params, &normalized)?;
        self.pose = normalized;
        self.planes = planes;
        self.pose_version += 1;
        Ok(true)
    }

    // ===== GETTERS =====

    pub fn params(&self) -> &FrustumParams {
        &self.params
    }

    /// Normalized pose the planes were built from.
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Apex.
    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    pub fn look_direction(&self) -> Vec3 {
        self.pose.look
    }

    pub fn normal_direction(&self) -> Vec3 {
        self.pose.normal
    }

    /// Planes in index order (see `PLANE_*`).
    pub fn planes(&self) -> &[Plane; PLANE_COUNT] {
        &self.planes
    }

    pub fn plane(&self, index: usize) -> Option<&Plane> {
        self.planes.get(index)
    }

    /// Number of plane regenerations since construction.
    pub fn pose_version(&self) -> u64 {
        self.pose_version
    }

    /// Test a single point against all six planes.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|plane| plane.contains(point))
    }
}

/// Compute the six planes for `pose`.
///
/// Side planes pass through the apex. For a half-angle `a`, the right
/// plane's outward normal is `right·cos(a) − look·sin(a)`, which is
/// perpendicular to the edge direction `look·cos(a) + right·sin(a)`.
fn build_planes(params: &FrustumParams, pose: &Pose) -> Result<[Plane; PLANE_COUNT]> {
    let (look, right, up) = pose.basis()?;
    let apex = pose.position;
    let (sin_h, cos_h) = params.half_fov_h.sin_cos();
    let (sin_v, cos_v) = params.half_fov_v.sin_cos();

    let mut planes = [Plane::from_normal_and_point(Vec3::ZERO, Vec3::ZERO); PLANE_COUNT];
    planes[PLANE_NEAR] = Plane::from_normal_and_point(-look, apex + look * params.near);
    planes[PLANE_FAR] = Plane::from_normal_and_point(look, apex + look * params.far);
    planes[PLANE_LEFT] = Plane::from_normal_and_point(-right * cos_h - look * sin_h, apex);
    planes[PLANE_RIGHT] = Plane::from_normal_and_point(right * cos_h - look * sin_h, apex);
    planes[PLANE_TOP] = Plane::from_normal_and_point(up * cos_v - look * sin_v, apex);
    planes[PLANE_BOTTOM] = Plane::from_normal_and_point(-up * cos_v - look * sin_v, apex);

    Ok(planes)
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
