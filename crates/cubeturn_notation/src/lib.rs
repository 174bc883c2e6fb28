//! Move notation parser and serializer.
//!
//! This crate only knows about syntax. A move is a single ASCII letter (its
//! _family_) followed by an optional repeat count and an optional `'`, such as
//! `R`, `U2`, or `F2'`. Moves may be separated by whitespace. Mapping families
//! to actual cube twists is left to the caller.

mod common;
mod errors;
mod parse;


pub use common::*;
pub use errors::*;
pub use parse::parse_notation;
