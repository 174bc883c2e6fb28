//! Frame-driven animation of layer twists.

pub mod interpolate;
mod twist;

pub use interpolate::Interpolation;
pub use twist::{AnimationPhase, TwistAnimation};
