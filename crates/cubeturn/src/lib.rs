//! State and layer-rotation engine for a 3x3x3 twisty cube.
//!
//! The engine keeps track of where each of the 27 cubelets is and which way
//! it is facing, animates layer twists one at a time, and snaps cubelets back
//! onto the lattice when each twist completes. Drawing the cube is left to
//! the caller, which reads [`CubeEngine::cubelet_transform()`] once per frame.
//!
//! # Example
//!
//! ```rust
//! use cubeturn::{CubeEngine, CubeletId, Face, MoveOutcome, Sticker};
//! use web_time::Duration;
//!
//! let mut engine = CubeEngine::default();
//! assert_eq!(engine.press("R").unwrap(), MoveOutcome::Started);
//! // Another layer cannot start turning until this one is done.
//! assert_eq!(engine.press("U").unwrap(), MoveOutcome::Rejected);
//!
//! while engine.proceed(Duration::from_millis(16)).unwrap() {}
//! assert!(!engine.is_animating());
//!
//! // The up-right-front corner has moved to the bottom, and its up sticker
//! // now faces the front.
//! let corner = CubeletId(26);
//! assert_eq!(engine.sticker_facing(corner, Face::F), Some(Sticker::Colored(Face::U)));
//! ```

pub mod animations;
pub mod approx_cmp;
mod colors;
mod cubelet;
mod engine;
mod error;
mod face;
mod geometry;
mod layer;
mod moves;
mod picking;
mod prefs;
mod sign;

#[cfg(test)]
mod tests;

pub use animations::{AnimationPhase, Interpolation, TwistAnimation};
pub use colors::{ColorScheme, Rgb, Sticker};
pub use cubelet::{Cubelet, CubeletId, Cubelets};
pub use engine::{CubeEngine, FaceSticker, MoveOutcome};
pub use error::EngineError;
pub use face::{Axis, Face};
pub use geometry::{CubeGeometry, LAYER_COUNT};
pub use layer::{CUBELETS_PER_LAYER, LayerSelection, select_layer};
pub use moves::{Move, MoveScope, Twist, TwistDirection};
pub use picking::StickerHit;
pub use prefs::{DEFAULT_PREFS, EnginePreferences};
pub use sign::Sign;
