//! Math module: geometric primitives used by culling.

mod plane;

pub use plane::Plane;
