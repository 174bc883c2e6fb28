//! Selecting the cubelets affected by a move.

use cgmath::{Rad, Vector3};

use crate::{CubeGeometry, CubeletId, Cubelets, EngineError, LAYER_COUNT, Move, MoveScope};

/// Number of cubelets in one face layer.
pub const CUBELETS_PER_LAYER: usize = LAYER_COUNT * LAYER_COUNT;

/// Cubelets affected by a move, along with the rotation to apply to them.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSelection {
    /// Affected cubelets, in order of ID.
    pub cubelets: Vec<CubeletId>,
    /// Signed axis of rotation.
    pub axis: Vector3<f32>,
    /// Angle of rotation about `axis`.
    pub angle: Rad<f32>,
}

/// Selects the cubelets that `mv` rotates.
///
/// For a face move this is every cubelet whose coordinate along the face's
/// axis is within `tolerance` of the outer layer. Anything other than
/// [`CUBELETS_PER_LAYER`] cubelets means the stored coordinates are corrupt,
/// and is reported as [`EngineError::LayerSize`]. Whole-cube moves select all
/// cubelets.
pub fn select_layer(
    cubelets: &Cubelets,
    geometry: &CubeGeometry,
    mv: Move,
    tolerance: f32,
) -> Result<LayerSelection, EngineError> {
    let selected = match mv.scope() {
        MoveScope::WholeCube(_) => cubelets.ids().collect(),
        MoveScope::Layer(face) => {
            let selected: Vec<CubeletId> = cubelets
                .on_face(geometry, face, tolerance)
                .map(|c| c.id())
                .collect();
            if selected.len() != CUBELETS_PER_LAYER {
                log::error!(
                    "layer {face} selected {} cubelets {selected:?}; cube state is corrupt",
                    selected.len(),
                );
                return Err(EngineError::LayerSize {
                    face,
                    expected: CUBELETS_PER_LAYER,
                    found: selected.len(),
                });
            }
            selected
        }
    };

    Ok(LayerSelection {
        cubelets: selected,
        axis: mv.axis(),
        angle: mv.angle(),
    })
}

#[cfg(test)]
mod tests {
    use cgmath::{One, Quaternion};
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::Face;

    const TOLERANCE: f32 = 0.1;

    #[test]
    fn test_select_solved_layers() {
        let g = CubeGeometry::default();
        let cubelets = Cubelets::new(&g);

        for mv in Move::iter() {
            let selection = select_layer(&cubelets, &g, mv, TOLERANCE).unwrap();
            assert_eq!(selection.axis, mv.axis());
            match mv.face() {
                None => assert_eq!(selection.cubelets.len(), 27),
                Some(face) => {
                    assert_eq!(selection.cubelets.len(), CUBELETS_PER_LAYER);
                    let axis = face.axis().int();
                    let index = match face.sign() {
                        crate::Sign::Pos => LAYER_COUNT - 1,
                        crate::Sign::Neg => 0,
                    };
                    for id in &selection.cubelets {
                        assert_eq!(cubelets[*id].home()[axis], index);
                    }
                }
            }
        }
    }

    #[test]
    fn test_right_layer_has_max_x() {
        let g = CubeGeometry::default();
        let cubelets = Cubelets::new(&g);
        let selection = select_layer(&cubelets, &g, Move::R, TOLERANCE).unwrap();
        let expected: Vec<CubeletId> = (18..27).map(CubeletId).collect();
        assert_eq!(selection.cubelets, expected);
    }

    #[test]
    fn test_select_tolerates_drift() {
        let g = CubeGeometry::default();
        let mut cubelets = Cubelets::new(&g);
        let c = cubelets.get_mut(CubeletId(26)).unwrap();
        let drifted = c.position() + Vector3::new(0.0, 0.05, 0.0);
        c.set_transform(drifted, Quaternion::one());
        assert_eq!(
            select_layer(&cubelets, &g, Move::U, TOLERANCE)
                .unwrap()
                .cubelets
                .len(),
            9,
        );
    }

    #[test]
    fn test_corrupt_layer_is_an_error() {
        let g = CubeGeometry::default();
        let mut cubelets = Cubelets::new(&g);
        let c = cubelets.get_mut(CubeletId(26)).unwrap();
        let sunk = c.position() - Vector3::new(0.0, 0.5, 0.0);
        c.set_transform(sunk, Quaternion::one());

        assert_eq!(
            select_layer(&cubelets, &g, Move::U, TOLERANCE),
            Err(EngineError::LayerSize {
                face: Face::U,
                expected: 9,
                found: 8,
            }),
        );
        // Whole-cube moves do not filter.
        assert!(select_layer(&cubelets, &g, Move::Y, TOLERANCE).is_ok());
    }
}
