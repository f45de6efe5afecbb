//! Configuration for the visibility orchestrator.

use glam::Vec3;
use crate::error::Result;
use crate::camera::{FrustumParams, Pose};
use crate::scene::{LaneBounds, DEFAULT_LANE_BOUNDS};

const SOURCE: &str = "galaxy3d::visibility::Config";

/// Orchestrator configuration
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityConfig {
    /// Shape of the world-fixed frustum
    pub stationary_params: FrustumParams,
    /// Shape of the camera-attached frustum
    pub camera_params: FrustumParams,
    /// Where the world-fixed frustum sits and looks
    pub stationary_pose: Pose,
    /// Shared per-tick move speed at startup
    pub initial_move_speed: f32,
    /// Amount added/removed by the speed commands
    pub speed_step: f32,
    /// Wrap bounds for lanes 0, 1, 2
    pub lanes: [LaneBounds; 3],
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            stationary_params: FrustumParams::default(),
            camera_params: FrustumParams::default(),
            stationary_pose: Pose::new(Vec3::new(-50.0, 75.0, 50.0), Vec3::X, Vec3::Z),
            initial_move_speed: 0.5,
            speed_step: 0.5,
            lanes: DEFAULT_LANE_BOUNDS,
        }
    }
}

impl VisibilityConfig {
    /// Reject configurations the orchestrator cannot run with.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidFrustum` for bad frustum parameters or stationary pose
    /// - `Error::InvalidConfig` for a non-finite speed, a non-positive speed
    ///   step, or non-finite lane bounds
    pub fn validate(&self) -> Result<()> {
        if let Err(err) = self.stationary_params.validate()
            .and_then(|_| self.camera_params.validate())
            .and_then(|_| self.stationary_pose.basis().map(|_| ()))
        {
            crate::engine_error!(SOURCE, "{}", err);
            return Err(err);
        }
        if !self.initial_move_speed.is_finite() {
            crate::engine_bail!(SOURCE, InvalidConfig,
                "Initial move speed {} is not finite", self.initial_move_speed);
        }
        if !self.speed_step.is_finite() || self.speed_step <= 0.0 {
            crate::engine_bail!(SOURCE, InvalidConfig,
                "Speed step {} must be finite and positive", self.speed_step);
        }
        for (index, bounds) in self.lanes.iter().enumerate() {
            if !bounds.wrap_below.is_finite() || !bounds.reset_to.is_finite() {
                crate::engine_bail!(SOURCE, InvalidConfig,
                    "Lane {} bounds {:?} are not finite", index, bounds);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
