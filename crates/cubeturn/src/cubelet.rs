//! Cubelets and the registry that holds all 27 of them.

use std::fmt;
use std::ops::Index;

use cgmath::{InnerSpace, Matrix4, One, Quaternion, Vector3};
use itertools::iproduct;
use strum::IntoEnumIterator;

use crate::approx_cmp::vectors_approx_eq;
use crate::{CubeGeometry, EngineError, Face, LAYER_COUNT, Sticker};

/// Stable identity of a cubelet. Cubelet `i` was created at grid indices
/// `[i / 9, i / 3 % 3, i % 3]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CubeletId(pub u8);
impl fmt::Display for CubeletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One of the small cubes that make up the puzzle.
#[derive(Debug, Clone, PartialEq)]
pub struct Cubelet {
    id: CubeletId,
    /// Grid indices where the cubelet was created.
    home: [usize; 3],
    /// Center of the cubelet, relative to the center of the cube.
    position: Vector3<f32>,
    /// Rotation of the cubelet from its initial orientation.
    orientation: Quaternion<f32>,
    /// Stickers on each local face, indexed by [`Face::idx()`].
    stickers: [Sticker; Face::COUNT],
}
impl Cubelet {
    fn new(id: CubeletId, home: [usize; 3], geometry: &CubeGeometry) -> Self {
        let [x, y, z] = home;
        let max = LAYER_COUNT - 1;
        let sticker_if = |condition: bool, face| match condition {
            true => Sticker::Colored(face),
            false => Sticker::Interior,
        };
        Self {
            id,
            home,
            position: geometry.lattice_point(home),
            orientation: Quaternion::one(),
            stickers: [
                sticker_if(x == max, Face::R),
                sticker_if(x == 0, Face::L),
                sticker_if(y == max, Face::U),
                sticker_if(y == 0, Face::D),
                sticker_if(z == max, Face::F),
                sticker_if(z == 0, Face::B),
            ],
        }
    }

    /// Returns the identity of the cubelet.
    pub fn id(&self) -> CubeletId {
        self.id
    }
    /// Returns the grid indices where the cubelet was created.
    pub fn home(&self) -> [usize; 3] {
        self.home
    }
    /// Returns the center of the cubelet.
    pub fn position(&self) -> Vector3<f32> {
        self.position
    }
    /// Returns the rotation of the cubelet from its initial orientation.
    pub fn orientation(&self) -> Quaternion<f32> {
        self.orientation
    }
    /// Returns the sticker on one of the cubelet's own faces, regardless of
    /// where that face is pointing now.
    pub fn sticker(&self, local_face: Face) -> Sticker {
        self.stickers[local_face.idx()]
    }
    /// Returns all six stickers, indexed by [`Face::idx()`].
    pub fn stickers(&self) -> [Sticker; Face::COUNT] {
        self.stickers
    }

    /// Returns the direction that one of the cubelet's own faces is pointing,
    /// relative to the cube.
    pub fn facing(&self, local_face: Face) -> Vector3<f32> {
        self.orientation * local_face.vector()
    }
    /// Returns which of the cubelet's own faces points towards `direction`.
    pub fn local_face_toward(&self, direction: Vector3<f32>) -> Option<Face> {
        Face::nearest_to(self.orientation.conjugate() * direction)
    }
    /// Returns the sticker that is pointing towards `face` of the cube.
    pub fn sticker_toward(&self, face: Face) -> Sticker {
        self.local_face_toward(face.vector())
            .map_or(Sticker::Interior, |local| self.sticker(local))
    }

    /// Returns the model matrix of the cubelet relative to the cube.
    pub fn transform(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position) * Matrix4::from(self.orientation)
    }

    pub(crate) fn set_transform(&mut self, position: Vector3<f32>, orientation: Quaternion<f32>) {
        self.position = position;
        self.orientation = orientation.normalize();
    }
}

/// Registry of all cubelets in the cube.
#[derive(Debug, Clone, PartialEq)]
pub struct Cubelets(Vec<Cubelet>);
impl Cubelets {
    /// Constructs the cubelets of a solved cube, laid out on the lattice
    /// centered at the origin.
    pub fn new(geometry: &CubeGeometry) -> Self {
        let n = LAYER_COUNT;
        Self(
            iproduct!(0..n, 0..n, 0..n)
                .enumerate()
                .map(|(i, (x, y, z))| Cubelet::new(CubeletId(i as u8), [x, y, z], geometry))
                .collect(),
        )
    }

    /// Returns the number of cubelets.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Returns whether there are no cubelets.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Returns an iterator over all cubelets, in order of ID.
    pub fn iter(&self) -> std::slice::Iter<'_, Cubelet> {
        self.0.iter()
    }
    /// Returns an iterator over all cubelet IDs.
    pub fn ids(&self) -> impl '_ + Iterator<Item = CubeletId> {
        self.0.iter().map(|c| c.id)
    }
    /// Returns a cubelet, or `None` if the ID is out of range.
    pub fn get(&self, id: CubeletId) -> Option<&Cubelet> {
        self.0.get(id.0 as usize)
    }
    pub(crate) fn get_mut(&mut self, id: CubeletId) -> Option<&mut Cubelet> {
        self.0.get_mut(id.0 as usize)
    }

    /// Returns the grid indices of the lattice point nearest to a cubelet.
    pub fn grid_index(&self, id: CubeletId, geometry: &CubeGeometry) -> Option<[usize; 3]> {
        Some(geometry.nearest_indices(self.get(id)?.position))
    }

    /// Checks that every cubelet sits exactly on a lattice point and that no
    /// two cubelets share one.
    pub fn check_lattice(&self, geometry: &CubeGeometry) -> Result<(), EngineError> {
        let n = LAYER_COUNT;
        let mut occupant: [[[Option<CubeletId>; LAYER_COUNT]; LAYER_COUNT]; LAYER_COUNT] =
            [[[None; LAYER_COUNT]; LAYER_COUNT]; LAYER_COUNT];

        for cubelet in &self.0 {
            let index = geometry.nearest_indices(cubelet.position);
            let lattice_point = geometry.lattice_point(index);
            if !vectors_approx_eq(cubelet.position, lattice_point) {
                return Err(EngineError::OffLattice {
                    id: cubelet.id,
                    position: cubelet.position.into(),
                });
            }
            let [x, y, z] = index;
            if let Some(first) = occupant[x][y][z].replace(cubelet.id) {
                return Err(EngineError::DuplicateSlot {
                    first,
                    second: cubelet.id,
                    index,
                });
            }
        }

        if self.len() != n * n * n {
            return Err(EngineError::WrongCubeletCount {
                expected: n * n * n,
                found: self.len(),
            });
        }
        Ok(())
    }

    /// Returns the cubelets whose position along the axis of `face` is within
    /// `tolerance` of the outer layer on that face.
    pub fn on_face<'a>(
        &'a self,
        geometry: &CubeGeometry,
        face: Face,
        tolerance: f32,
    ) -> impl 'a + Iterator<Item = &'a Cubelet> {
        let axis = face.axis();
        let target = geometry.outer_coordinate(face.sign());
        self.0
            .iter()
            .filter(move |c| (axis.component(c.position) - target).abs() < tolerance)
    }
}
impl Index<CubeletId> for Cubelets {
    type Output = Cubelet;

    fn index(&self, id: CubeletId) -> &Self::Output {
        &self.0[id.0 as usize]
    }
}
impl<'a> IntoIterator for &'a Cubelets {
    type Item = &'a Cubelet;
    type IntoIter = std::slice::Iter<'a, Cubelet>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
