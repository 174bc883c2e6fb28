//! Resolving hit-test results to stickers.
//!
//! Ray casting is left to the renderer. Given the cubelet that was hit and
//! the world-space normal of the face that was hit, this module works out
//! which sticker that is.

use cgmath::{Vector3, Zero};

use crate::{CubeEngine, CubeletId, Face, Sticker};

/// Sticker under the cursor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct StickerHit {
    /// Cubelet that was hit.
    pub cubelet: CubeletId,
    /// Face of the cubelet, in its own coordinates, that was hit.
    pub local_face: Face,
    /// Face of the cube, ignoring the orientation of the whole cube, that the
    /// sticker is on.
    pub facing: Face,
    /// Sticker that was hit.
    pub sticker: Sticker,
}

impl CubeEngine {
    /// Resolves a hit on a cubelet face with the given world-space normal.
    /// Returns `None` if the cubelet does not exist or the normal is not
    /// close to any face, such as partway through a twist.
    pub fn resolve_hit(&self, id: CubeletId, world_normal: Vector3<f32>) -> Option<StickerHit> {
        if world_normal.is_zero() {
            return None;
        }
        let cubelet = self.cubelet(id)?;
        let cube_normal = self.assembly_orientation().conjugate() * world_normal;
        let facing = Face::nearest_to(cube_normal)?;
        let rest_normal = self.pivot_orientation(id).conjugate() * cube_normal;
        let local_face = cubelet.local_face_toward(rest_normal)?;
        Some(StickerHit {
            cubelet: id,
            local_face,
            facing,
            sticker: cubelet.sticker(local_face),
        })
    }
}
