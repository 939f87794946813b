//! An applicative functor applies functions held in one container to values
//! held in another.

use std::io::Write;

use super::Print;
use crate::config::RunnerConfig;
use crate::error::SnippetError;
use crate::typeclass::ap;

/// Prints `[2]`, then `[5, 6, 7, 8]`.
///
/// # Errors
///
/// Returns [`SnippetError::Io`] if writing fails.
pub fn run(out: &mut dyn Write, _config: &RunnerConfig) -> Result<(), SnippetError> {
    ap(&[|a: &i32| a + 1], &[1]).print(out)?;

    let arg0 = [1, 3];
    let arg1 = [4, 5];

    // the combining function has to be curried
    let add = |x: &i32| {
        let x = *x;
        move |y: &i32| x + y
    };

    // [|y| 1 + y, |y| 3 + y]
    let partially_applied_adds = ap(&[add], &arg0);

    ap(&partially_applied_adds, &arg1).print(out)?;
    Ok(())
}
