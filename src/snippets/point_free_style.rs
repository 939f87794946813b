//! Point-free style defines a function without naming the data it works on.

use std::io::Write;

use super::Print;
use crate::config::RunnerConfig;
use crate::error::SnippetError;

/// Lifts `function` to work over a whole list.
#[must_use]
pub fn map_all<F>(function: F) -> impl Fn(Vec<i32>) -> Vec<i32>
where
    F: Fn(i32) -> i32,
{
    move |list| list.into_iter().map(&function).collect()
}

/// Curried addition.
#[must_use]
pub fn add(a: i32) -> impl Fn(i32) -> i32 {
    move |b| a + b
}

/// Prints `[5, 4, 3]` twice.
///
/// # Errors
///
/// Returns [`SnippetError::Io`] if writing fails.
pub fn run(out: &mut dyn Write, _config: &RunnerConfig) -> Result<(), SnippetError> {
    // `numbers` is an explicit argument
    let increment_all = |numbers: Vec<i32>| map_all(add(1))(numbers);

    // the list is implicit
    let increment_all_point_free = map_all(add(1));

    increment_all(vec![4, 3, 2]).print(out)?;
    increment_all_point_free(vec![4, 3, 2]).print(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![4, 3, 2], vec![5, 4, 3])]
    #[case(vec![-1], vec![0])]
    fn both_styles_agree(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        let pointful = |numbers: Vec<i32>| map_all(add(1))(numbers);
        assert_eq!(pointful(input.clone()), expected);
        assert_eq!(map_all(add(1))(input), expected);
    }
}
