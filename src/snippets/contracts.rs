//! A contract checks a value at run time and fails loudly when it does not
//! hold.

use std::io::Write;

use super::Print;
use crate::config::RunnerConfig;
use crate::contract::{ContractError, Value, expect_int};
use crate::error::SnippetError;

/// Adds one to an integer; any other value violates the contract.
///
/// # Errors
///
/// Returns [`ContractError::Violated`] if `input` is not an integer.
pub fn add_one(input: &Value) -> Result<i64, ContractError> {
    expect_int(input).map(|number| number + 1)
}

/// Prints `3`, then fails on a string input.
///
/// # Errors
///
/// Always returns [`SnippetError::Contract`] with
/// `Contract violated: expected an Int`, or [`SnippetError::Io`] if writing
/// fails first.
pub fn run(out: &mut dyn Write, _config: &RunnerConfig) -> Result<(), SnippetError> {
    add_one(&Value::Int(2))?.print(out)?;

    add_one(&Value::from("some string"))?.print(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Kind;
    use rstest::rstest;

    #[rstest]
    fn run_prints_before_failing() {
        let mut out = Vec::new();
        let result = run(&mut out, &RunnerConfig::default());
        assert_eq!(String::from_utf8(out).unwrap(), "3\n");
        assert!(matches!(
            result,
            Err(SnippetError::Contract(ContractError::Violated {
                expected: Kind::Int,
                found: Kind::Text,
            }))
        ));
    }
}
