//! A function maps every input to exactly one output.

use std::io::Write;

use super::Print;
use crate::config::RunnerConfig;
use crate::error::SnippetError;
use crate::typeclass::map;

/// Prints `[2, 4, 6]`.
///
/// # Errors
///
/// Returns [`SnippetError::Io`] if writing fails.
pub fn run(out: &mut dyn Write, _config: &RunnerConfig) -> Result<(), SnippetError> {
    // times2 :: i32 -> i32
    let times2 = |n: &i32| n * 2;

    map(times2, &[1, 2, 3]).print(out)?;
    Ok(())
}
