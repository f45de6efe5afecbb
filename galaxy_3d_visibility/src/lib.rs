/*!
# Galaxy 3D Visibility

Frustum visibility culling for the Galaxy3D engine.

This crate decides, once per simulation tick, whether each tracked object's
bounding box lies inside at least one of two view frustums (one fixed in the
world, one riding on the active camera) and writes the answer to the object's
visibility flag. The host engine owns rendering, input and the window; it hands
the core a camera pose and an object store and reads the flags back.

## Architecture

- **Plane**: half-space primitive (normal + offset)
- **Frustum**: six planes built from FOV/near/far and a pose
- **BoundingVolume**: oriented box corners in world space
- **intersects**: box-vs-frustum corner-sampling test
- **MotionSimulator**: periodic lane motion driving the objects
- **VisibilityOrchestrator**: per-tick driver tying it all together
*/

// Internal modules
mod error;
mod engine;
mod config;
pub mod log;
pub mod math;
pub mod camera;
pub mod scene;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::engine::Engine;

    // Orchestrator configuration
    pub use crate::config::VisibilityConfig;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Math sub-module
    pub mod math {
        pub use crate::math::*;
    }

    // Camera sub-module (frustum, pose, presets)
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module (objects, culling, motion, orchestration)
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
