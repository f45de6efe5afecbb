/// VisibilityOrchestrator: per-tick visibility pipeline.
///
/// Owns two frustums: one fixed in world space, one following the live
/// camera. Each tick:
/// 1. refresh the camera-attached frustum from the camera pose
/// 2. for every tracked object, advance it along its lane, then set its
///    VISIBLE flag to "inside either frustum"
///
/// Only object positions, VISIBLE flags and the camera-attached frustum
/// are mutated.

use crate::camera::{CameraControl, CameraPreset, CameraView, Frustum};
use crate::config::VisibilityConfig;
use crate::error::Result;
use super::culler::any_intersects;
use super::motion::MotionSimulator;
use super::object_store::ObjectStore;

const SOURCE: &str = "galaxy3d::visibility::Orchestrator";

/// Runtime control messages, produced by the host's input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Add one speed step to the shared move speed
    IncreaseSpeed,
    /// Remove one speed step from the shared move speed
    DecreaseSpeed,
    /// Move the camera to an inspection pose
    ApplyCameraPreset(CameraPreset),
    /// Log the current camera position and look direction
    ReportCameraPose,
}

/// Summary of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Objects advanced and tested
    pub processed: usize,
    /// Objects left with the VISIBLE flag set
    pub visible: usize,
    /// Whether the camera-attached frustum planes were regenerated
    pub camera_frustum_refreshed: bool,
}

pub struct VisibilityOrchestrator {
    stationary_frustum: Frustum,
    camera_frustum: Frustum,
    motion: MotionSimulator,
    /// False while the live camera pose cannot form a frustum
    camera_pose_valid: bool,
    tick_count: u64,
}

impl VisibilityOrchestrator {
    /// Build both frustums from `config`, posing the camera-attached one
    /// at the camera's current pose.
    ///
    /// # Errors
    ///
    /// Anything `VisibilityConfig::validate()` rejects, or
    /// `Error::InvalidFrustum` if the camera pose is degenerate.
    pub fn new(config: &VisibilityConfig, camera: &dyn CameraView) -> Result<Self> {
        config.validate()?;
        let stationary_frustum = Frustum::new(config.stationary_params, config.stationary_pose)?;
        let camera_frustum = match Frustum::new(config.camera_params, camera.pose()) {
            Ok(frustum) => frustum,
            Err(err) => {
                crate::engine_error!(SOURCE, "Camera pose cannot form a frustum: {}", err);
                return Err(err);
            }
        };

        crate::engine_info!(SOURCE,
            "Created with stationary frustum at {} and move speed {}",
            stationary_frustum.position(), config.initial_move_speed);

        Ok(Self {
            stationary_frustum,
            camera_frustum,
            motion: MotionSimulator::new(config.initial_move_speed, config.speed_step, config.lanes),
            camera_pose_valid: true,
            tick_count: 0,
        })
    }

    /// Run one simulation tick over every object in `objects`.
    pub fn tick(&mut self, camera: &dyn CameraView, objects: &mut ObjectStore) -> TickReport {
        let camera_frustum_refreshed = self.refresh_camera_frustum(camera);

        let frustums = [&self.stationary_frustum, &self.camera_frustum];
        let mut report = TickReport {
            camera_frustum_refreshed,
            ..TickReport::default()
        };
        for (_, object) in objects.iter_mut() {
            self.motion.advance_object(object);
            let visible = any_intersects(&object.bounding_volume(), frustums);
            object.set_visible(visible);

            report.processed += 1;
            if visible {
                report.visible += 1;
            }
        }

        self.tick_count += 1;
        crate::engine_trace!(SOURCE, "Tick {}: {}/{} visible",
            self.tick_count, report.visible, report.processed);
        report
    }

    /// Apply a runtime command. Camera presets write into `camera`.
    pub fn handle_command(&mut self, command: Command, camera: &mut dyn CameraControl) {
        match command {
            Command::IncreaseSpeed => {
                let speed = self.motion.increase_speed();
                crate::engine_info!(SOURCE, "Move speed increased to {}", speed);
            }
            Command::DecreaseSpeed => {
                let speed = self.motion.decrease_speed();
                crate::engine_info!(SOURCE, "Move speed decreased to {}", speed);
            }
            Command::ApplyCameraPreset(preset) => {
                preset.apply(camera);
                crate::engine_info!(SOURCE, "Camera preset {:?} applied: position {} look {}",
                    preset, camera.position(), camera.look_direction());
            }
            Command::ReportCameraPose => {
                crate::engine_info!(SOURCE, "Camera position {} look {}",
                    camera.position(), camera.look_direction());
            }
        }
    }

    /// Keeps the last valid pose when the camera's pose is degenerate.
    /// Warns once on entering that state, logs once on leaving it.
    fn refresh_camera_frustum(&mut self, camera: &dyn CameraView) -> bool {
        match self.camera_frustum.update_pose(camera.pose()) {
            Ok(changed) => {
                if !self.camera_pose_valid {
                    self.camera_pose_valid = true;
                    crate::engine_info!(SOURCE, "Camera pose valid again at {}", camera.position());
                }
                changed
            }
            Err(err) => {
                if self.camera_pose_valid {
                    self.camera_pose_valid = false;
                    crate::engine_warn!(SOURCE, "Keeping previous camera frustum: {}", err);
                } else {
                    crate::engine_trace!(SOURCE, "Camera pose still invalid: {}", err);
                }
                false
            }
        }
    }

    // ===== GETTERS =====

    pub fn stationary_frustum(&self) -> &Frustum {
        &self.stationary_frustum
    }

    pub fn camera_frustum(&self) -> &Frustum {
        &self.camera_frustum
    }

    pub fn motion(&self) -> &MotionSimulator {
        &self.motion
    }

    /// Whether the last camera pose seen by `tick` formed a frustum.
    pub fn camera_pose_valid(&self) -> bool {
        self.camera_pose_valid
    }

    pub fn move_speed(&self) -> f32 {
        self.motion.move_speed()
    }

    /// Ticks run since creation.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
