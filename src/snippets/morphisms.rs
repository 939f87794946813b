//! Morphisms are structure-preserving transformations.
//!
//! - endomorphism: input and output have the same type
//! - isomorphism: a pair of transformations that undo each other
//! - homomorphism: preserves structure, so lifting then applying equals
//!   applying then lifting
//! - catamorphism: reduces a structure to a single value

use std::io::Write;

use super::Print;
use crate::config::RunnerConfig;
use crate::control::Either;
use crate::error::SnippetError;
use crate::typeclass::ap;

/// A point on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coords {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
}

/// Half of an isomorphism with [`coords_to_pair`].
pub const fn pair_to_coords((x, y): (i32, i32)) -> Coords {
    Coords { x, y }
}

/// Half of an isomorphism with [`pair_to_coords`].
pub const fn coords_to_pair(Coords { x, y }: Coords) -> (i32, i32) {
    (x, y)
}

/// Folds from the right.
#[must_use]
pub fn sum(values: &[i32]) -> i32 {
    values.iter().rfold(0, |accumulator, value| value + accumulator)
}

/// Prints the endomorphism results `"OREOS"`, `4` and `Right(2)`, then
/// `(1, 2)`, `Coords { x: 1, y: 2 }`, `true` and `15`.
///
/// # Errors
///
/// Returns [`SnippetError::Io`] if writing fails.
pub fn run(out: &mut dyn Write, _config: &RunnerConfig) -> Result<(), SnippetError> {
    // String -> String
    let uppercase = |text: &&str| text.to_uppercase();
    // i32 -> i32
    let decrement = |x: i32| x - 1;
    // Either<String, i32> -> Either<String, i32>
    let halve = |value: Either<String, i32>| value.map_right(|n| n / 2);

    uppercase(&"oreos").print(out)?;
    decrement(5).print(out)?;
    halve(Either::of(4)).print(out)?;

    coords_to_pair(pair_to_coords((1, 2))).print(out)?;
    pair_to_coords(coords_to_pair(Coords { x: 1, y: 2 })).print(out)?;

    (ap(&[uppercase], &["oreos"]) == vec![uppercase(&"oreos")]).print(out)?;

    sum(&[1, 2, 3, 4, 5]).print(out)?;
    Ok(())
}
