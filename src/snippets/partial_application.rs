//! Partial application fixes some arguments of a function and returns a
//! function of the rest.

use std::io::Write;

use super::Print;
use crate::compose::Partial;
use crate::config::RunnerConfig;
use crate::error::SnippetError;

fn add3(a: i32, b: i32, c: i32) -> i32 {
    a + b + c
}

/// Prints `9` twice: `add3` with its last two arguments fixed, then a binary
/// add with its first argument fixed.
///
/// # Errors
///
/// Returns [`SnippetError::Io`] if writing fails.
pub fn run(out: &mut dyn Write, _config: &RunnerConfig) -> Result<(), SnippetError> {
    let five_plus = crate::partial!(add3, __, 2, 3);
    five_plus(4).print(out)?;

    let add2 = |a: i32, b: i32| a + b;
    let five_plus = add2.partial(5);
    five_plus(4).print(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(4)]
    #[case(0)]
    #[case(-5)]
    fn partial_forms_agree_with_full_call(#[case] x: i32) {
        assert_eq!(crate::partial!(add3, __, 2, 3)(x), add3(x, 2, 3));
        assert_eq!(crate::partial!(add3, 2, __, 3)(x), add3(2, x, 3));
        assert_eq!((|a: i32, b: i32| a + b).partial(5)(x), 5 + x);
    }
}
