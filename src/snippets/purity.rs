//! A pure function's output depends only on its arguments and it has no
//! side effects.

use std::io::Write;

use super::Print;
use crate::config::RunnerConfig;
use crate::error::SnippetError;

/// Depends only on `name`.
#[must_use]
pub fn greet(name: &str) -> String {
    format!("Hi, {name}")
}

/// Prints `"Hi, Brianne"` three times.
///
/// # Errors
///
/// Returns [`SnippetError::Io`] if writing fails.
pub fn run(out: &mut dyn Write, _config: &RunnerConfig) -> Result<(), SnippetError> {
    greet("Brianne").print(out)?;

    // impure: reads state from outside its arguments
    let name = "Brianne";
    let greet_captured = || format!("Hi, {name}");
    greet_captured().print(out)?;

    // impure: writes state outside itself
    let mut greeting = String::new();
    let mut greet_into = |name: &str| greeting = format!("Hi, {name}");
    greet_into("Brianne");
    greeting.print(out)?;
    Ok(())
}
