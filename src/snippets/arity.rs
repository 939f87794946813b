//! Arity is the number of arguments a function takes.

use std::io::Write;

use super::Print;
use crate::compose::arity_of;
use crate::config::RunnerConfig;
use crate::error::SnippetError;

/// Prints `2`.
///
/// # Errors
///
/// Returns [`SnippetError::Io`] if writing fails.
pub fn run(out: &mut dyn Write, _config: &RunnerConfig) -> Result<(), SnippetError> {
    let sum = |x: i32, y: i32| x + y;

    arity_of(&sum).print(out)?;
    Ok(())
}
