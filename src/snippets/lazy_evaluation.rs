//! Lazy evaluation defers a computation until its result is needed.

use std::io::Write;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::Print;
use crate::config::RunnerConfig;
use crate::control::{Lazy, random_numbers};
use crate::error::SnippetError;

fn rng_for(config: &RunnerConfig) -> SmallRng {
    config
        .seed
        .map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64)
}

/// Prints `config.sample_size` random integers taken from an endless
/// sequence, then shows a [`Lazy`] value before and after it is forced:
/// `false`, `55`, `true`.
///
/// # Errors
///
/// Returns [`SnippetError::Io`] if writing fails.
pub fn run(out: &mut dyn Write, config: &RunnerConfig) -> Result<(), SnippetError> {
    random_numbers(rng_for(config))
        .take(config.sample_size)
        .collect::<Vec<_>>()
        .print(out)?;

    let total = Lazy::new(|| {
        tracing::debug!("forcing lazy total");
        (1..=10).sum::<i32>()
    });
    total.is_initialized().print(out)?;
    total.force().print(out)?;
    total.is_initialized().print(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn seeded_runs_are_reproducible() {
        let config = RunnerConfig::default().with_seed(11);
        let mut first = Vec::new();
        let mut second = Vec::new();
        run(&mut first, &config).unwrap();
        run(&mut second, &config).unwrap();
        assert_eq!(first, second);
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    fn sample_size_bounds_the_output(#[case] sample_size: usize) {
        let config = RunnerConfig::default().with_seed(1).with_sample_size(sample_size);
        let mut out = Vec::new();
        run(&mut out, &config).unwrap();
        let text = String::from_utf8(out).unwrap();
        let first_line = text.lines().next().unwrap();
        let count = first_line
            .trim_matches(|c| c == '[' || c == ']')
            .split(", ")
            .filter(|item| !item.is_empty())
            .count();
        assert_eq!(count, sample_size);
        assert!(text.ends_with("false\n55\ntrue\n"));
    }
}
