//! A monad chains computations that each produce a wrapped value,
//! flattening as it goes.

use std::io::Write;

use super::Print;
use crate::config::RunnerConfig;
use crate::error::SnippetError;
use crate::typeclass::{flat_map, map};

fn split_on_comma(pair: &&str) -> Vec<String> {
    pair.split(',').map(String::from).collect()
}

/// Prints `["cat", "dog", "fish", "bird"]`, then the unflattened
/// `[["cat", "dog"], ["fish", "bird"]]` that `map` gives for contrast.
///
/// # Errors
///
/// Returns [`SnippetError::Io`] if writing fails.
pub fn run(out: &mut dyn Write, _config: &RunnerConfig) -> Result<(), SnippetError> {
    let pairs = ["cat,dog", "fish,bird"];

    flat_map(split_on_comma, &pairs).print(out)?;

    map(split_on_comma, &pairs).print(out)?;
    Ok(())
}
