//! Engine error type.

use cubeturn_notation::ParseError;
use thiserror::Error;

use crate::{CubeletId, Face};

/// Internal error in the engine, or bad input that cannot be ignored.
///
/// Unknown move labels and moves rejected because another move is animating
/// are not errors; see [`crate::MoveOutcome`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A face layer did not contain the expected number of cubelets, which
    /// means the stored coordinates have drifted or been corrupted.
    #[error("layer {face} contains {found} cubelets instead of {expected}")]
    LayerSize {
        /// Face whose layer was selected.
        face: Face,
        /// Expected number of cubelets.
        expected: usize,
        /// Number of cubelets actually selected.
        found: usize,
    },
    /// A cubelet at rest is not on a lattice point.
    #[error("cubelet {id} is not on a lattice point (position {position:?})")]
    OffLattice {
        /// Offending cubelet.
        id: CubeletId,
        /// Its position.
        position: [f32; 3],
    },
    /// Two cubelets occupy the same lattice point.
    #[error("cubelets {first} and {second} both occupy lattice point {index:?}")]
    DuplicateSlot {
        /// Cubelet that was there first.
        first: CubeletId,
        /// Cubelet that was found on top of it.
        second: CubeletId,
        /// Grid indices of the lattice point.
        index: [usize; 3],
    },
    /// The registry does not contain the right number of cubelets.
    #[error("expected {expected} cubelets; found {found}")]
    WrongCubeletCount {
        /// Expected number of cubelets.
        expected: usize,
        /// Number of cubelets in the registry.
        found: usize,
    },
    /// A move sequence could not be parsed.
    #[error("bad notation: {0}")]
    Notation(#[from] ParseError),
    /// Preferences could not be loaded or saved.
    #[error("bad preferences: {0}")]
    Prefs(String),
}
