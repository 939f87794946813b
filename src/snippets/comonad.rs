//! A comonad is the dual of a monad: a value can always be taken out of it,
//! and a function over the whole context can be extended across it.

use std::io::Write;

use super::Print;
use crate::config::RunnerConfig;
use crate::error::SnippetError;
use crate::typeclass::{CoIdentity, Comonad};

/// Prints `1`, then `CoIdentity(2)`.
///
/// # Errors
///
/// Returns [`SnippetError::Io`] if writing fails.
pub fn run(out: &mut dyn Write, _config: &RunnerConfig) -> Result<(), SnippetError> {
    CoIdentity(1).extract().print(out)?;

    CoIdentity(1)
        .extend(|context| context.extract() + 1)
        .print(out)?;
    Ok(())
}
