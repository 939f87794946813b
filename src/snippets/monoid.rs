//! A monoid is an associative combining operation with an identity element.

use std::io::Write;

use super::Print;
use crate::config::RunnerConfig;
use crate::error::SnippetError;
use crate::typeclass::{Monoid, Semigroup, Sum};

/// Prints `true` (associativity of addition), `[1, 2, 3, 4]` (list
/// concatenation), and `[1, 2]` (the empty list is the identity).
///
/// # Errors
///
/// Returns [`SnippetError::Io`] if writing fails.
pub fn run(out: &mut dyn Write, _config: &RunnerConfig) -> Result<(), SnippetError> {
    let right_nested = Sum(1).combine(Sum(2).combine(Sum(3)));
    let left_nested = Sum(1).combine(Sum(2)).combine(Sum(3));
    (right_nested == left_nested).print(out)?;

    vec![1, 2].combine(vec![3, 4]).print(out)?;

    vec![1, 2].combine(Vec::empty()).print(out)?;
    Ok(())
}
