/// Plane: a half-space boundary for frustum culling.
///
/// Stored as a unit normal N and offset D with the convention that a point
/// P is on the kept ("inside") side when `dot(N, P) < D`. The normal
/// therefore points AWAY from the kept half-space.

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vec3,
    d: f32,
}

impl Plane {
    /// Build a plane through `point` with the given (outward) normal.
    ///
    /// The normal is normalized; a zero normal yields a plane that
    /// contains nothing.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self {
            normal,
            d: normal.dot(point),
        }
    }

    /// Unit normal, pointing out of the kept half-space.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Offset D such that points with `dot(normal, p) < D` are inside.
    pub fn coefficient(&self) -> f32 {
        self.d
    }

    /// Signed distance of `point` to the plane. Negative = inside.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.d
    }

    /// Strict inside test: `dot(normal, point) < d`.
    pub fn contains(&self, point: Vec3) -> bool {
        self.normal.dot(point) < self.d
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
