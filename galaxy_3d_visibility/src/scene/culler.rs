/// Box-vs-frustum visibility tests.
///
/// The core test is a conservative corner-sampling check: a plane passes
/// when at least one of the box's 8 world corners is strictly inside it,
/// and the box is visible when all 6 planes pass. A box fully inside is
/// never rejected; a large box straddling two oblique planes near an edge
/// of the frustum may be accepted without any point actually inside.

use crate::camera::Frustum;
use super::bounding_volume::BoundingVolume;

/// Corner-sampling test of one box against one frustum.
pub fn intersects(volume: &BoundingVolume, frustum: &Frustum) -> bool {
    let corners = volume.corners();
    frustum
        .planes()
        .iter()
        .all(|plane| corners.iter().any(|corner| plane.contains(*corner)))
}

/// Union over frustums; stops at the first frustum reporting visible.
pub fn any_intersects<'a, I>(volume: &BoundingVolume, frustums: I) -> bool
where
    I: IntoIterator<Item = &'a Frustum>,
{
    frustums.into_iter().any(|frustum| intersects(volume, frustum))
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
