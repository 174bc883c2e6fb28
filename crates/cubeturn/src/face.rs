//! Axes and faces of the cube.

use cgmath::{InnerSpace, Vector3};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::Sign;

/// 3-dimensional axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl Axis {
    /// Returns an integer index for this axis; X = 0, Y = 1, Z = 2.
    pub fn int(self) -> usize {
        self as usize
    }

    /// Returns an iterator over all axes.
    pub fn iter() -> impl Iterator<Item = Axis> {
        [Axis::X, Axis::Y, Axis::Z].into_iter()
    }

    /// Returns the unit vector along this axis.
    pub fn unit_vec3(self) -> Vector3<f32> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }

    /// Returns the component of `v` along this axis.
    pub fn component(self, v: Vector3<f32>) -> f32 {
        v[self.int()]
    }
}

/// Face of the cube. The declaration order (right, left, up, down, front,
/// back) is also the order of the stickers on each cubelet.
#[derive(EnumIter, Display, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// Right face (+X).
    R,
    /// Left face (-X).
    L,
    /// Up face (+Y).
    U,
    /// Down face (-Y).
    D,
    /// Front face (+Z).
    F,
    /// Back face (-Z).
    B,
}
impl Face {
    /// Number of faces on a cube.
    pub const COUNT: usize = 6;

    /// Returns the index of the face, in declaration order.
    pub fn idx(self) -> usize {
        self as usize
    }

    /// Returns the axis perpendicular to this face.
    pub fn axis(self) -> Axis {
        use Face::*;

        match self {
            R | L => Axis::X,
            U | D => Axis::Y,
            F | B => Axis::Z,
        }
    }
    /// Returns the sign of this face along its perpendicular axis.
    pub fn sign(self) -> Sign {
        use Face::*;

        match self {
            R | U | F => Sign::Pos,
            L | D | B => Sign::Neg,
        }
    }
    /// Returns the face on the given axis with the given sign.
    pub fn new(axis: Axis, sign: Sign) -> Self {
        match (axis, sign) {
            (Axis::X, Sign::Pos) => Face::R,
            (Axis::X, Sign::Neg) => Face::L,
            (Axis::Y, Sign::Pos) => Face::U,
            (Axis::Y, Sign::Neg) => Face::D,
            (Axis::Z, Sign::Pos) => Face::F,
            (Axis::Z, Sign::Neg) => Face::B,
        }
    }
    /// Returns the face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self::new(self.axis(), -self.sign())
    }

    /// Returns the human-friendly name of the face.
    pub fn name(self) -> &'static str {
        use Face::*;

        match self {
            R => "Right",
            L => "Left",
            U => "Up",
            D => "Down",
            F => "Front",
            B => "Back",
        }
    }

    /// Returns the outward unit normal of the face.
    pub fn vector(self) -> Vector3<f32> {
        self.axis().unit_vec3() * self.sign().float()
    }

    /// Returns the face whose outward normal is closest to `v`, or `None` if
    /// `v` is not clearly pointing towards any one face.
    pub fn nearest_to(v: Vector3<f32>) -> Option<Self> {
        if v.magnitude2() == 0.0 || !v.magnitude2().is_finite() {
            return None;
        }
        let v = v.normalize();
        // At most one face normal can be within 45 degrees of a unit vector.
        Face::iter().find(|f| f.vector().dot(v) > std::f32::consts::FRAC_1_SQRT_2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_axis_sign_roundtrip() {
        for face in Face::iter() {
            assert_eq!(Face::new(face.axis(), face.sign()), face);
            assert_eq!(face.opposite().opposite(), face);
            assert_ne!(face.opposite(), face);
        }
        assert_eq!(Face::iter().count(), Face::COUNT);
    }

    #[test]
    fn test_nearest_face() {
        for face in Face::iter() {
            assert_eq!(Face::nearest_to(face.vector() * 3.0), Some(face));
        }
        assert_eq!(Face::nearest_to(Vector3::new(0.9, 0.1, -0.2)), Some(Face::R));
        assert_eq!(Face::nearest_to(Vector3::new(1.0, 1.0, 1.0)), None);
        assert_eq!(Face::nearest_to(Vector3::new(0.0, 0.0, 0.0)), None);
    }
}
