//! A closure keeps access to the variables of the scope that created it.

use std::io::Write;

use super::Print;
use crate::config::RunnerConfig;
use crate::error::SnippetError;

/// Returns a function that adds `x` to whatever it is given.
///
/// `x` lives on inside the returned closure after `add_to` has returned.
#[must_use]
pub fn add_to(x: i32) -> impl Fn(i32) -> i32 {
    move |y| x + y
}

/// Prints `8`.
///
/// # Errors
///
/// Returns [`SnippetError::Io`] if writing fails.
pub fn run(out: &mut dyn Write, _config: &RunnerConfig) -> Result<(), SnippetError> {
    let add_to_five = add_to(5);

    add_to_five(3).print(out)?;
    Ok(())
}
