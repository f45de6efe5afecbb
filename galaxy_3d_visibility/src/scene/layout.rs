/// SceneLayout: the default population of tracked objects.
///
/// Fifteen objects spread over the three lanes (object `i` patrols lane
/// `i % 3`): spheres on lane X, rockets (stood upright, rotated 90° about
/// X) on lane Y, frogs on lane Z. Odd and even indices fan out on
/// opposite sides of each lane's base point.
///
/// Model loading is the host's business, so the box sizes per kind are
/// supplied by the caller.

use std::f32::consts::FRAC_PI_2;
use glam::{Mat3, Vec3};
use super::object_store::ObjectStore;
use super::tracked_object::{Lane, TrackedObject, TrackedObjectKey};

pub const DEFAULT_OBJECT_COUNT: usize = 15;

/// Kind of model placed on each lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Sphere,
    Rocket,
    Frog,
}

impl ObjectKind {
    pub fn for_lane(lane: Lane) -> ObjectKind {
        match lane {
            Lane::X => ObjectKind::Sphere,
            Lane::Y => ObjectKind::Rocket,
            Lane::Z => ObjectKind::Frog,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ObjectKind::Sphere => "sphere",
            ObjectKind::Rocket => "rocket",
            ObjectKind::Frog => "frog",
        }
    }

    /// Orientation applied to the model before translation.
    pub fn transform(self) -> Mat3 {
        match self {
            ObjectKind::Rocket => Mat3::from_rotation_x(FRAC_PI_2),
            _ => Mat3::IDENTITY,
        }
    }
}

/// Full bounding box sizes (lx, ly, lz) per kind, in model space.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub sphere_extents: Vec3,
    pub rocket_extents: Vec3,
    pub frog_extents: Vec3,
    pub object_count: usize,
}

impl Default for SceneLayout {
    /// Unit boxes until the host supplies real model bounds.
    fn default() -> Self {
        Self {
            sphere_extents: Vec3::ONE,
            rocket_extents: Vec3::ONE,
            frog_extents: Vec3::ONE,
            object_count: DEFAULT_OBJECT_COUNT,
        }
    }
}

impl SceneLayout {
    /// Lane of object `index`.
    pub fn lane(index: usize) -> Lane {
        Lane::ALL[index % 3]
    }

    /// Spawn position of object `index`.
    pub fn spawn_position(index: usize) -> Vec3 {
        let i = index as f32;
        // +1 for even indices, -1 for odd ones
        let s: f32 = if index % 2 == 0 { 1.0 } else { -1.0 };
        match Self::lane(index) {
            Lane::X => Vec3::new(25.0 + s * 3.0 * i, 50.0 + 3.0 * i, 50.0 + s * 3.0 * i),
            Lane::Y => Vec3::new(-5.0 + s * 3.0 * i, 250.0 + s * 3.0 * i, 50.0 + s * 3.0 * i),
            Lane::Z => Vec3::new(-5.0 + s * 2.0 * i, 75.0 + s * 3.0 * i, 110.0 + s * 3.0 * i),
        }
    }

    pub fn extents(&self, kind: ObjectKind) -> Vec3 {
        match kind {
            ObjectKind::Sphere => self.sphere_extents,
            ObjectKind::Rocket => self.rocket_extents,
            ObjectKind::Frog => self.frog_extents,
        }
    }

    /// Object `index` of the layout, not yet visible.
    pub fn object(&self, index: usize) -> TrackedObject {
        let lane = Self::lane(index);
        let kind = ObjectKind::for_lane(lane);
        TrackedObject::new(
            format!("{}_{}", kind.label(), index),
            Self::spawn_position(index),
            self.extents(kind) * 0.5,
            lane,
        )
        .with_transform(kind.transform())
    }

    /// Insert every object of the layout; keys are returned in index order.
    pub fn populate(&self, store: &mut ObjectStore) -> Vec<TrackedObjectKey> {
        (0..self.object_count)
            .map(|index| store.insert(self.object(index)))
            .collect()
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
