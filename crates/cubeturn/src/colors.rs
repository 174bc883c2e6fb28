//! Sticker colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Face;

/// RGB color, written in preferences as a hex string such as `#ffa500`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub [u8; 3]);
impl Rgb {
    /// Constructs a color from a `0xRRGGBB` integer.
    pub const fn from_hex(value: u32) -> Self {
        Self([(value >> 16) as u8, (value >> 8) as u8, value as u8])
    }
}
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.0))
    }
}
impl FromStr for Rgb {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rgb = [0_u8; 3];
        let s = s.trim();
        hex::decode_to_slice(s.strip_prefix('#').unwrap_or(s), &mut rgb)?;
        Ok(Self(rgb))
    }
}
impl TryFrom<String> for Rgb {
    type Error = hex::FromHexError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// What is printed on one face of a cubelet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sticker {
    /// Sticker with the color of a face of the solved cube.
    Colored(Face),
    /// Inert side facing the inside of the cube.
    Interior,
}
impl fmt::Display for Sticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sticker::Colored(face) => write!(f, "{face}"),
            Sticker::Interior => write!(f, "-"),
        }
    }
}

/// Colors for each face of the cube, plus the interior color.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ColorScheme {
    /// Color of the right face.
    pub right: Rgb,
    /// Color of the left face.
    pub left: Rgb,
    /// Color of the up face.
    pub up: Rgb,
    /// Color of the down face.
    pub down: Rgb,
    /// Color of the front face.
    pub front: Rgb,
    /// Color of the back face.
    pub back: Rgb,
    /// Color of the sides of cubelets that face the inside of the cube.
    pub interior: Rgb,
}
impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            right: Rgb::from_hex(0xff0000),
            left: Rgb::from_hex(0xffa500),
            up: Rgb::from_hex(0x00ff00),
            down: Rgb::from_hex(0x0000ff),
            front: Rgb::from_hex(0xffffff),
            back: Rgb::from_hex(0xffff00),
            interior: Rgb::from_hex(0x111111),
        }
    }
}
impl ColorScheme {
    /// Returns the color of a face.
    pub fn face_color(&self, face: Face) -> Rgb {
        match face {
            Face::R => self.right,
            Face::L => self.left,
            Face::U => self.up,
            Face::D => self.down,
            Face::F => self.front,
            Face::B => self.back,
        }
    }
    /// Returns the color to draw a sticker with.
    pub fn sticker_color(&self, sticker: Sticker) -> Rgb {
        match sticker {
            Sticker::Colored(face) => self.face_color(face),
            Sticker::Interior => self.interior,
        }
    }
}
