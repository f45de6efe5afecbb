//! Scene module
//!
//! Tracked objects, their bounding volumes, the per-tick motion law and
//! the visibility pipeline (culling test + orchestrator).

mod bounding_volume;
mod tracked_object;
mod object_store;
mod culler;
mod motion;
mod orchestrator;
mod layout;

pub use bounding_volume::BoundingVolume;
pub use tracked_object::{TrackedObject, TrackedObjectKey, Lane, ObjectFlags};
pub use object_store::ObjectStore;
pub use culler::{intersects, any_intersects};
pub use motion::{MotionSimulator, LaneBounds, DEFAULT_LANE_BOUNDS};
pub use orchestrator::{VisibilityOrchestrator, Command, TickReport};
pub use layout::{SceneLayout, ObjectKind, DEFAULT_OBJECT_COUNT};
