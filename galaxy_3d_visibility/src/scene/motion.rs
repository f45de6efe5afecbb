/// MotionSimulator: periodic lane motion for tracked objects.
///
/// Each tick an object moves by `-move_speed` along its lane's axis. When
/// the coordinate is already below the lane's `wrap_below` bound it jumps to
/// `reset_to` instead of moving. The other two coordinates never change.
///
/// The speed is shared by every object and adjustable at runtime without
/// bounds. Zero halts motion; a negative speed moves objects toward +axis
/// and, since only a lower bound exists, they never wrap in that direction.
/// Replaying a sequence with the opposite speed therefore retraces the
/// positions but not the wrap jumps.

use glam::Vec3;
use super::tracked_object::{Lane, TrackedObject};

/// Lower wrap bound and restart value for one lane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneBounds {
    /// Coordinate below which the object restarts
    pub wrap_below: f32,
    /// Coordinate the object restarts at
    pub reset_to: f32,
}

impl LaneBounds {
    pub const fn new(wrap_below: f32, reset_to: f32) -> Self {
        Self { wrap_below, reset_to }
    }
}

/// Lane 0 (x), lane 1 (y), lane 2 (z).
pub const DEFAULT_LANE_BOUNDS: [LaneBounds; 3] = [
    LaneBounds::new(-55.0, 40.0),
    LaneBounds::new(-30.0, 250.0),
    LaneBounds::new(-10.0, 120.0),
];

#[derive(Debug, Clone)]
pub struct MotionSimulator {
    move_speed: f32,
    speed_step: f32,
    lanes: [LaneBounds; 3],
}

impl MotionSimulator {
    pub fn new(move_speed: f32, speed_step: f32, lanes: [LaneBounds; 3]) -> Self {
        Self { move_speed, speed_step, lanes }
    }

    /// Next position for an object at `position` on `lane`.
    pub fn advance(&self, position: Vec3, lane: Lane) -> Vec3 {
        let axis = lane.index();
        let bounds = self.lanes[axis];
        let mut next = position;
        if position[axis] < bounds.wrap_below {
            next[axis] = bounds.reset_to;
        } else {
            next[axis] = position[axis] - self.move_speed;
        }
        next
    }

    /// Advance `object` in place and return its new position.
    pub fn advance_object(&self, object: &mut TrackedObject) -> Vec3 {
        let next = self.advance(object.position(), object.lane());
        object.set_position(next);
        next
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn set_move_speed(&mut self, move_speed: f32) {
        self.move_speed = move_speed;
    }

    pub fn speed_step(&self) -> f32 {
        self.speed_step
    }

    /// Add one step to the speed; returns the new speed.
    pub fn increase_speed(&mut self) -> f32 {
        self.move_speed += self.speed_step;
        self.move_speed
    }

    /// Remove one step from the speed; returns the new speed.
    pub fn decrease_speed(&mut self) -> f32 {
        self.move_speed -= self.speed_step;
        self.move_speed
    }

    pub fn lane_bounds(&self, lane: Lane) -> LaneBounds {
        self.lanes[lane.index()]
    }
}

impl Default for MotionSimulator {
    /// Speed 0.5 per tick, step 0.5, default lane bounds.
    fn default() -> Self {
        Self::new(0.5, 0.5, DEFAULT_LANE_BOUNDS)
    }
}

#[cfg(test)]
#[path = "motion_tests.rs"]
mod tests;
