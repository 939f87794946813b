//! A predicate is a function that answers true or false.

use std::io::Write;

use super::Print;
use crate::config::RunnerConfig;
use crate::error::SnippetError;

/// Prints `[3, 4]`.
///
/// # Errors
///
/// Returns [`SnippetError::Io`] if writing fails.
pub fn run(out: &mut dyn Write, _config: &RunnerConfig) -> Result<(), SnippetError> {
    let predicate = |a: &i32| *a > 2;

    vec![1, 2, 3, 4]
        .into_iter()
        .filter(predicate)
        .collect::<Vec<_>>()
        .print(out)?;
    Ok(())
}
