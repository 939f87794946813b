//! Composition builds a new function from two others: the output of the
//! first is the input of the second.

use std::io::Write;

use super::Print;
use crate::compose::compose;
use crate::config::RunnerConfig;
use crate::error::SnippetError;

/// Rounds to the nearest integer, halves towards positive infinity.
#[allow(clippy::cast_possible_truncation)]
fn round_to_int(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Prints `"121"`.
///
/// # Errors
///
/// Returns [`SnippetError::Io`] if writing fails.
pub fn run(out: &mut dyn Write, _config: &RunnerConfig) -> Result<(), SnippetError> {
    let round_and_to_string = compose(round_to_int, |n: i64| n.to_string());

    round_and_to_string(121.212_121).print(out)?;
    Ok(())
}
