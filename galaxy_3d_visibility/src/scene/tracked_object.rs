/// Tracked objects: the per-object state the visibility pipeline mutates.
///
/// An object patrols one lane (axis) for its whole life. Position and the
/// VISIBLE flag change every tick; everything else is fixed at creation.

use bitflags::bitflags;
use glam::{Mat3, Vec3};
use slotmap::new_key_type;
use crate::error::{Error, Result};
use super::bounding_volume::BoundingVolume;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a TrackedObject within an ObjectStore.
    pub struct TrackedObjectKey;
}

// ===== LANE =====

/// Axis an object patrols. Lane N moves along world axis N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::X, Lane::Y, Lane::Z];

    /// Lane index in {0, 1, 2}, also the world axis index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lane from an index.
    ///
    /// # Errors
    ///
    /// `Error::InvalidLane` for anything outside {0, 1, 2}.
    pub fn from_index(index: u8) -> Result<Lane> {
        match index {
            0 => Ok(Lane::X),
            1 => Ok(Lane::Y),
            2 => Ok(Lane::Z),
            other => Err(Error::InvalidLane(other)),
        }
    }
}

impl TryFrom<u8> for Lane {
    type Error = Error;

    fn try_from(index: u8) -> Result<Lane> {
        Lane::from_index(index)
    }
}

// ===== FLAGS =====

bitflags! {
    /// Per-object state bits read by the host renderer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ObjectFlags: u32 {
        /// Inside at least one frustum on the last tick
        const VISIBLE = 1 << 0;
    }
}

// ===== TRACKED OBJECT =====

#[derive(Debug, Clone)]
pub struct TrackedObject {
    /// Host-side label, only used for logs
    label: String,
    /// World position (box center)
    position: Vec3,
    /// Orientation + scale, applied before translation
    transform: Mat3,
    /// Bounding box half-extents in local space
    half_extents: Vec3,
    lane: Lane,
    flags: ObjectFlags,
}

impl TrackedObject {
    /// New object with an identity transform, initially not visible.
    pub fn new(label: impl Into<String>, position: Vec3, half_extents: Vec3, lane: Lane) -> Self {
        Self {
            label: label.into(),
            position,
            transform: Mat3::IDENTITY,
            half_extents,
            lane,
            flags: ObjectFlags::empty(),
        }
    }

    /// Replace the orientation/scale transform.
    pub fn with_transform(mut self, transform: Mat3) -> Self {
        self.transform = transform;
        self
    }

    // ===== GETTERS =====

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn transform(&self) -> &Mat3 {
        &self.transform
    }

    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    pub fn lane(&self) -> Lane {
        self.lane
    }

    pub fn flags(&self) -> ObjectFlags {
        self.flags
    }

    pub fn is_visible(&self) -> bool {
        self.flags.contains(ObjectFlags::VISIBLE)
    }

    /// World-space box for the current position.
    pub fn bounding_volume(&self) -> BoundingVolume {
        BoundingVolume::new(self.half_extents, self.transform, self.position)
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(ObjectFlags::VISIBLE, visible);
    }
}

#[cfg(test)]
#[path = "tracked_object_tests.rs"]
mod tests;
