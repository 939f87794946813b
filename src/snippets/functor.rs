//! A functor is a container that can be mapped over while keeping its shape.

use std::io::Write;

use super::Print;
use crate::config::RunnerConfig;
use crate::error::SnippetError;
use crate::typeclass::Functor;

/// Prints `[1, 2, 3]` (identity law), then `[3, 5, 7]` twice (composition
/// law).
///
/// # Errors
///
/// Returns [`SnippetError::Io`] if writing fails.
pub fn run(out: &mut dyn Write, _config: &RunnerConfig) -> Result<(), SnippetError> {
    vec![1, 2, 3].fmap(|x| x).print(out)?;

    let f = |x: i32| x + 1;
    let g = |x: i32| x * 2;

    vec![1, 2, 3].fmap(|x| f(g(x))).print(out)?;
    vec![1, 2, 3].fmap(g).fmap(f).print(out)?;
    Ok(())
}
