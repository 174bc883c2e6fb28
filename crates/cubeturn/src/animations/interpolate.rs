//! Interpolation functions.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Function that maps a float from the range 0.0 to 1.0 to another float
/// from 0.0 to 1.0.
pub type InterpolateFn = fn(f32) -> f32;

/// Interpolate at constant speed.
pub const LINEAR: InterpolateFn = |x| x;
/// Interpolate using cosine from 0.0 to PI.
pub const COSINE: InterpolateFn = |x| (1.0 - (x * PI).cos()) / 2.0;

/// Easing curve for twist animations.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// Constant angular speed.
    #[default]
    Linear,
    /// Slow start and slow finish.
    Cosine,
}
impl Interpolation {
    /// Returns the interpolation function.
    pub fn function(self) -> InterpolateFn {
        match self {
            Interpolation::Linear => LINEAR,
            Interpolation::Cosine => COSINE,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::approx_cmp::approx_eq;

    #[test]
    fn test_endpoints() {
        for f in [LINEAR, COSINE] {
            assert!(approx_eq(f(0.0), 0.0));
            assert!(approx_eq(f(1.0), 1.0));
        }
        assert!(approx_eq(COSINE(0.5), 0.5));
    }

    proptest! {
        #[test]
        fn proptest_monotonic(a in 0.0_f32..=1.0, b in 0.0_f32..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for interpolation in [Interpolation::Linear, Interpolation::Cosine] {
                let f = interpolation.function();
                prop_assert!(f(lo) <= f(hi) + f32::EPSILON);
            }
        }
    }
}
