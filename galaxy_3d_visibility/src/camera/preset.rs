/// Camera presets: fixed poses for manual inspection of the culling scene.

use glam::Vec3;
use super::camera::CameraControl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraPreset {
    /// High view looking back along -X over the whole scene
    Overview,
    /// Low view looking down the +Y corridor
    Corridor,
    /// Above the frog lane, looking down
    Overhead,
    /// Keep position, look +X with +Z up
    AxisAligned,
}

impl CameraPreset {
    pub const ALL: [CameraPreset; 4] = [
        CameraPreset::Overview,
        CameraPreset::Corridor,
        CameraPreset::Overhead,
        CameraPreset::AxisAligned,
    ];

    /// Position to jump to, `None` when the preset keeps the current one.
    pub fn position(self) -> Option<Vec3> {
        match self {
            CameraPreset::Overview => Some(Vec3::new(52.5, 131.8, 39.1)),
            CameraPreset::Corridor => Some(Vec3::new(29.4, 25.2, 39.7)),
            CameraPreset::Overhead => Some(Vec3::new(-15.7, 87.7, 127.9)),
            CameraPreset::AxisAligned => None,
        }
    }

    /// Unit look direction.
    pub fn look_direction(self) -> Vec3 {
        let raw = match self {
            CameraPreset::Overview => Vec3::new(-0.993, 0.075, 0.088),
            CameraPreset::Corridor => Vec3::new(0.090, 0.995, 0.042),
            CameraPreset::Overhead => Vec3::new(-0.012, -0.231, -0.773),
            CameraPreset::AxisAligned => Vec3::X,
        };
        raw.normalize()
    }

    /// Normal direction to force, `None` when the camera keeps its own.
    pub fn normal_direction(self) -> Option<Vec3> {
        match self {
            CameraPreset::AxisAligned => Some(Vec3::Z),
            _ => None,
        }
    }

    /// Write this preset into a camera.
    pub fn apply(self, camera: &mut dyn CameraControl) {
        if let Some(position) = self.position() {
            camera.set_position(position);
        }
        camera.set_look_direction(self.look_direction());
        if let Some(normal) = self.normal_direction() {
            camera.set_normal_direction(normal);
        }
    }
}

#[cfg(test)]
#[path = "preset_tests.rs"]
mod tests;
