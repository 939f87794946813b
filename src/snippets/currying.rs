//! Currying turns a function of several arguments into a chain of functions
//! of one argument each.

use std::io::Write;

use super::Print;
use crate::compose::Curry;
use crate::config::RunnerConfig;
use crate::error::SnippetError;

/// Prints `42`, then `12` twice: once from a hand-curried closure and once
/// from [`Curry::curried`].
///
/// # Errors
///
/// Returns [`SnippetError::Io`] if writing fails.
pub fn run(out: &mut dyn Write, _config: &RunnerConfig) -> Result<(), SnippetError> {
    let sum = |a: i32, b: i32| a + b;

    let curried_sum = |a: i32| move |b: i32| a + b;
    curried_sum(40)(2).print(out)?;

    let add2 = curried_sum(2);
    add2(10).print(out)?;

    let add2 = sum.curried()(2);
    add2(10).print(out)?;
    Ok(())
}
