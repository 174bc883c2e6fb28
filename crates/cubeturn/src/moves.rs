//! Moves, twists, and the table that maps labels to them.

use std::f32::consts::FRAC_PI_2;
use std::fmt;

use cgmath::{Quaternion, Rad, Rotation3, Vector3};
use cubeturn_notation::Node;
use strum::{Display, EnumIter, EnumString};

use crate::{Axis, Face};

/// Symbolic command accepted from buttons and keyboard.
///
/// | Label | Axis | Scope        |
/// |-------|------|--------------|
/// | `U`   | +Y   | top layer    |
/// | `D`   | -Y   | bottom layer |
/// | `L`   | -X   | left layer   |
/// | `R`   | +X   | right layer  |
/// | `F`   | +Z   | front layer  |
/// | `B`   | -Z   | back layer   |
/// | `X`   | +X   | whole cube   |
/// | `Y`   | +Y   | whole cube   |
/// | `Z`   | +Z   | whole cube   |
#[derive(EnumIter, EnumString, Display, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum Move {
    /// Top layer.
    U,
    /// Bottom layer.
    D,
    /// Left layer.
    L,
    /// Right layer.
    R,
    /// Front layer.
    F,
    /// Back layer.
    B,
    /// Whole cube about +X.
    X,
    /// Whole cube about +Y.
    Y,
    /// Whole cube about +Z.
    Z,
}

/// What a move rotates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveScope {
    /// The outer layer on a face.
    Layer(Face),
    /// All cubelets, by rotating the whole assembly.
    WholeCube(Axis),
}

impl Move {
    /// Looks up a move by its label. Case and surrounding whitespace are
    /// ignored. Returns `None` for anything not in the table.
    pub fn from_label(label: &str) -> Option<Self> {
        label.trim().parse().ok()
    }

    /// Returns what the move rotates.
    pub fn scope(self) -> MoveScope {
        use Move::*;

        match self {
            U => MoveScope::Layer(Face::U),
            D => MoveScope::Layer(Face::D),
            L => MoveScope::Layer(Face::L),
            R => MoveScope::Layer(Face::R),
            F => MoveScope::Layer(Face::F),
            B => MoveScope::Layer(Face::B),
            X => MoveScope::WholeCube(Axis::X),
            Y => MoveScope::WholeCube(Axis::Y),
            Z => MoveScope::WholeCube(Axis::Z),
        }
    }
    /// Returns the face whose layer the move rotates, or `None` for a
    /// whole-cube move.
    pub fn face(self) -> Option<Face> {
        match self.scope() {
            MoveScope::Layer(face) => Some(face),
            MoveScope::WholeCube(_) => None,
        }
    }
    /// Returns whether the move rotates the whole cube.
    pub fn is_whole_cube(self) -> bool {
        matches!(self.scope(), MoveScope::WholeCube(_))
    }

    /// Returns the signed axis of rotation.
    pub fn axis(self) -> Vector3<f32> {
        match self.scope() {
            MoveScope::Layer(face) => face.vector(),
            MoveScope::WholeCube(axis) => axis.unit_vec3(),
        }
    }
    /// Returns the angle of the move, which is always a quarter turn.
    pub fn angle(self) -> Rad<f32> {
        Rad(FRAC_PI_2)
    }
    /// Returns the rotation performed by the move.
    pub fn rotation(self) -> Quaternion<f32> {
        Quaternion::from_axis_angle(self.axis(), self.angle())
    }
}

/// Direction of a twist.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TwistDirection {
    /// Positive quarter turn about the move's axis, as listed in the move
    /// table.
    #[default]
    Normal,
    /// Inverse of `Normal`.
    Prime,
}
impl TwistDirection {
    /// Returns the reverse direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Self::Normal => Self::Prime,
            Self::Prime => Self::Normal,
        }
    }
    /// Returns `1.0` or `-1.0`.
    pub fn float(self) -> f32 {
        match self {
            Self::Normal => 1.0,
            Self::Prime => -1.0,
        }
    }
    /// Returns the notation suffix.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Prime => "'",
        }
    }
}

/// Move in a specific direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Twist {
    /// Which move.
    pub mv: Move,
    /// Which way.
    pub direction: TwistDirection,
}
impl From<Move> for Twist {
    fn from(mv: Move) -> Self {
        Self::new(mv, TwistDirection::Normal)
    }
}
impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.mv, self.direction.symbol())
    }
}
impl Twist {
    /// Constructs a twist.
    pub fn new(mv: Move, direction: TwistDirection) -> Self {
        Self { mv, direction }
    }
    /// Returns the inverse twist.
    #[must_use]
    pub fn rev(self) -> Self {
        Self::new(self.mv, self.direction.rev())
    }
    /// Returns the rotation performed by the twist.
    pub fn rotation(self) -> Quaternion<f32> {
        let Rad(angle) = self.mv.angle();
        Quaternion::from_axis_angle(self.mv.axis(), Rad(angle * self.direction.float()))
    }

    /// Expands a notation node such as `U2'` into quarter-turn twists.
    /// Returns `None` if the node's family is not a known move.
    ///
    /// The multiplier is reduced modulo 4, and three quarter turns become one
    /// `Prime` twist.
    pub fn from_node(node: &Node) -> Option<Vec<Self>> {
        let mv = Move::from_label(node.family.encode_utf8(&mut [0; 4]))?;
        Some(match node.multiplier.quarter_turns() {
            0 => vec![],
            1 => vec![Self::new(mv, TwistDirection::Normal)],
            2 => vec![Self::new(mv, TwistDirection::Normal); 2],
            _ => vec![Self::new(mv, TwistDirection::Prime)],
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::approx_cmp::{rotations_approx_eq, vectors_approx_eq};

    #[test]
    fn test_move_table() {
        let table = [
            ("U", Vector3::unit_y(), false),
            ("D", -Vector3::unit_y(), false),
            ("L", -Vector3::unit_x(), false),
            ("R", Vector3::unit_x(), false),
            ("F", Vector3::unit_z(), false),
            ("B", -Vector3::unit_z(), false),
            ("X", Vector3::unit_x(), true),
            ("Y", Vector3::unit_y(), true),
            ("Z", Vector3::unit_z(), true),
        ];
        assert_eq!(table.len(), Move::iter().count());
        for (label, axis, whole_cube) in table {
            let mv = Move::from_label(label).unwrap();
            assert_eq!(mv.to_string(), label);
            assert_eq!(mv.axis(), axis);
            assert_eq!(mv.is_whole_cube(), whole_cube);
            assert_eq!(mv.face().is_none(), whole_cube);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Move::from_label("u"), Some(Move::U));
        assert_eq!(Move::from_label(" R\n"), Some(Move::R));
        assert_eq!(Move::from_label("x"), Some(Move::X));
        assert_eq!(Move::from_label("M"), None);
        assert_eq!(Move::from_label(""), None);
        assert_eq!(Move::from_label("UU"), None);
    }

    #[test]
    fn test_twist_rotation() {
        // +90 degrees about +X takes +Y to +Z.
        let r = Twist::from(Move::R).rotation();
        assert!(vectors_approx_eq(r * Vector3::unit_y(), Vector3::unit_z()));

        // U' undoes U.
        let u = Twist::from(Move::U);
        assert!(rotations_approx_eq(
            u.rotation() * u.rev().rotation(),
            Quaternion::new(1.0, 0.0, 0.0, 0.0),
        ));
        assert_eq!(u.rev().to_string(), "U'");
        assert_eq!(u.rev().rev(), u);
    }

    #[test]
    fn test_from_node() {
        let twists = |s: &str| {
            cubeturn_notation::parse_notation(s)
                .unwrap()
                .iter()
                .map(|node| {
                    Twist::from_node(node)
                        .map(|ts| ts.iter().map(Twist::to_string).collect::<Vec<_>>())
                })
                .collect::<Vec<_>>()
        };
        let strings = |v: &[&str]| Some(v.iter().map(|s| s.to_string()).collect::<Vec<_>>());
        assert_eq!(
            twists("R U2 F' x4 M"),
            vec![strings(&["R"]), strings(&["U", "U"]), strings(&["F'"]), strings(&[]), None],
        );
    }
}
