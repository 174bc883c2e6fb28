use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::InvertError;

/// List of moves.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct NodeList(pub Vec<Node>);

impl fmt::Display for NodeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated_list(f, &self.0, " ")
    }
}

impl Deref for NodeList {
    type Target = Vec<Node>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for NodeList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl NodeList {
    /// Constructs a new empty node list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns a list with all nodes inverted, in reverse order.
    pub fn inv(&self) -> Result<Self, InvertError> {
        self.0
            .iter()
            .rev()
            .map(|n| n.inv())
            .collect::<Result<_, _>>()
            .map(Self)
    }
}

/// Single move, such as `R2'`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    /// Move family, such as `R` or `x`. Case is preserved.
    pub family: char,
    /// Multiplier, which defaults to `1`.
    pub multiplier: Multiplier,
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.family, self.multiplier)
    }
}

impl Node {
    /// Constructs a move with a multiplier of `1`.
    pub fn new(family: char) -> Self {
        Self {
            family,
            multiplier: Multiplier::default(),
        }
    }

    /// Returns the same move with a different multiplier.
    #[must_use]
    pub fn with_multiplier(self, multiplier: impl Into<Multiplier>) -> Self {
        Self {
            multiplier: multiplier.into(),
            ..self
        }
    }

    /// Returns the inverse move.
    pub fn inv(&self) -> Result<Self, InvertError> {
        Ok(self.with_multiplier(self.multiplier.inv()?))
    }
}

/// Multiplier suffix using `'` for negative numbers.
///
/// The default multiplier is `Multiplier(1)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Multiplier(pub i32);

impl Default for Multiplier {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        if abs != 1 {
            write!(f, "{abs}")?;
        }
        if self.0 < 0 {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl From<i32> for Multiplier {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl Multiplier {
    /// Returns the negated multiplier.
    pub fn inv(self) -> Result<Self, InvertError> {
        self.0
            .checked_neg()
            .map(Self)
            .ok_or(InvertError::IntegerOverflow)
    }

    /// Returns the multiplier reduced modulo 4, which is the net number of
    /// forward quarter turns for a move of order 4.
    pub fn quarter_turns(self) -> u8 {
        self.0.rem_euclid(4) as u8
    }
}

pub(crate) fn write_separated_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    elements: &[T],
    separator: &str,
) -> fmt::Result {
    let mut is_first = true;
    for elem in elements {
        if is_first {
            is_first = false;
        } else {
            write!(f, "{separator}")?;
        }
        write!(f, "{elem}")?;
    }
    Ok(())
}
