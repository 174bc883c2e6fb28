//! Lattice geometry of the cube.

use cgmath::Vector3;
use serde::{Deserialize, Serialize};

use crate::Sign;

/// Number of layers along each axis.
pub const LAYER_COUNT: usize = 3;

/// Size and spacing of the cubelets.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct CubeGeometry {
    /// Edge length of a single cubelet.
    pub cubelet_size: f32,
    /// Gap between neighboring cubelets.
    pub spacing: f32,
}
impl Default for CubeGeometry {
    fn default() -> Self {
        Self {
            cubelet_size: 1.0,
            spacing: 0.05,
        }
    }
}
impl CubeGeometry {
    /// Returns the distance between the centers of neighboring cubelets.
    pub fn pitch(&self) -> f32 {
        self.cubelet_size + self.spacing
    }
    /// Returns the coordinate of the outermost layer on the positive side.
    pub fn offset(&self) -> f32 {
        (LAYER_COUNT - 1) as f32 / 2.0 * self.pitch()
    }

    /// Returns the coordinate of the layer with the given grid index, from 0
    /// to `LAYER_COUNT - 1`.
    pub fn lattice_coordinate(&self, index: usize) -> f32 {
        index as f32 * self.pitch() - self.offset()
    }
    /// Returns the center of the cubelet with the given grid indices.
    pub fn lattice_point(&self, [x, y, z]: [usize; 3]) -> Vector3<f32> {
        Vector3::new(
            self.lattice_coordinate(x),
            self.lattice_coordinate(y),
            self.lattice_coordinate(z),
        )
    }
    /// Returns the signed coordinate of an outer layer.
    pub fn outer_coordinate(&self, sign: Sign) -> f32 {
        self.offset() * sign.float()
    }

    /// Returns the grid index of the layer nearest to `coordinate`.
    pub fn nearest_index(&self, coordinate: f32) -> usize {
        let i = ((coordinate + self.offset()) / self.pitch()).round();
        if i.is_nan() || i < 0.0 {
            0
        } else {
            (i as usize).min(LAYER_COUNT - 1)
        }
    }
    /// Returns the grid indices nearest to `position`.
    pub fn nearest_indices(&self, position: Vector3<f32>) -> [usize; 3] {
        [
            self.nearest_index(position.x),
            self.nearest_index(position.y),
            self.nearest_index(position.z),
        ]
    }
    /// Returns the lattice point nearest to `position`.
    pub fn snap(&self, position: Vector3<f32>) -> Vector3<f32> {
        self.lattice_point(self.nearest_indices(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx_cmp::approx_eq;

    #[test]
    fn test_lattice_is_centered() {
        let g = CubeGeometry::default();
        assert!(approx_eq(g.pitch(), 1.05));
        assert!(approx_eq(g.lattice_coordinate(0), -1.05));
        assert!(approx_eq(g.lattice_coordinate(1), 0.0));
        assert!(approx_eq(g.lattice_coordinate(2), 1.05));
        assert_eq!(g.outer_coordinate(Sign::Pos), g.lattice_coordinate(2));
        assert_eq!(g.outer_coordinate(Sign::Neg), g.lattice_coordinate(0));
    }

    #[test]
    fn test_snap() {
        let g = CubeGeometry::default();
        assert_eq!(g.nearest_index(1.04), 2);
        assert_eq!(g.nearest_index(-0.01), 1);
        assert_eq!(g.nearest_index(-7.0), 0);
        assert_eq!(g.nearest_index(f32::NAN), 0);
        let p = g.snap(Vector3::new(1.0499, -0.0001, -1.0502));
        assert_eq!(p, g.lattice_point([2, 1, 0]));
    }
}
