/// BoundingVolume: an object's box proxy in world space.
///
/// Half-extents are expressed in the object's local frame. The world
/// transform (orientation + scale, no translation) is applied to each
/// local corner before the position is added, so the 8 corners describe
/// an oriented box.

use glam::{Mat3, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingVolume {
    half_extents: Vec3,
    transform: Mat3,
    position: Vec3,
}

impl BoundingVolume {
    pub fn new(half_extents: Vec3, transform: Mat3, position: Vec3) -> Self {
        Self { half_extents, transform, position }
    }

    /// Build from full box sizes (lx, ly, lz).
    pub fn from_extents(extents: Vec3, transform: Mat3, position: Vec3) -> Self {
        Self::new(extents * 0.5, transform, position)
    }

    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    pub fn transform(&self) -> &Mat3 {
        &self.transform
    }

    /// Box center in world space.
    pub fn center(&self) -> Vec3 {
        self.position
    }

    /// World-space corners, every sign combination of (x, y, z), with z
    /// varying fastest: (-,-,-), (-,-,+), (-,+,-), ... (+,+,+).
    pub fn corners(&self) -> [Vec3; 8] {
        let mut corners = [Vec3::ZERO; 8];
        let mut i = 0;
        for x in [-1.0, 1.0] {
            for y in [-1.0, 1.0] {
                for z in [-1.0, 1.0] {
                    let local = Vec3::new(x, y, z) * self.half_extents;
                    corners[i] = self.transform * local + self.position;
                    i += 1;
                }
            }
        }
        corners
    }

    /// Distance from the center to the farthest corner.
    pub fn bounding_radius(&self) -> f32 {
        self.corners()
            .iter()
            .map(|corner| corner.distance(self.position))
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
#[path = "bounding_volume_tests.rs"]
mod tests;
