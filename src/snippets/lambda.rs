//! A lambda is a function written as an expression, with or without a name.

use std::io::Write;

use super::Print;
use crate::config::RunnerConfig;
use crate::error::SnippetError;

/// Prints `[2, 3]` twice: once with an anonymous closure, once with the same
/// closure bound to a name.
///
/// # Errors
///
/// Returns [`SnippetError::Io`] if writing fails.
pub fn run(out: &mut dyn Write, _config: &RunnerConfig) -> Result<(), SnippetError> {
    let numbers = [1, 2];

    numbers.iter().map(|a| a + 1).collect::<Vec<i32>>().print(out)?;

    let add1 = |a: &i32| a + 1;
    numbers.iter().map(add1).collect::<Vec<i32>>().print(out)?;
    Ok(())
}
