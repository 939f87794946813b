//! A higher-order function takes a function as an argument, returns one, or
//! both.

use std::io::Write;

use super::Print;
use crate::config::RunnerConfig;
use crate::contract::{Kind, Value, is_a};
use crate::error::SnippetError;

/// Keeps the values `predicate` accepts.
///
/// Takes a function as an argument.
#[must_use]
pub fn filter<P>(predicate: P, values: &[Value]) -> Vec<Value>
where
    P: Fn(&Value) -> bool,
{
    values
        .iter()
        .filter(|value| predicate(value))
        .cloned()
        .collect()
}

/// Prints `[Int(0), Int(2)]`.
///
/// [`is_a`] returns a function, which [`filter`] then takes as an argument.
///
/// # Errors
///
/// Returns [`SnippetError::Io`] if writing fails.
pub fn run(out: &mut dyn Write, _config: &RunnerConfig) -> Result<(), SnippetError> {
    let values = [Value::Int(0), Value::from("1"), Value::Int(2)];

    filter(is_a(Kind::Int), &values).print(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn filter_keeps_order() {
        let values = [Value::Bool(true), Value::Int(3), Value::Bool(false)];
        assert_eq!(
            filter(is_a(Kind::Bool), &values),
            vec![Value::Bool(true), Value::Bool(false)]
        );
    }

    #[rstest]
    fn filter_on_empty_input() {
        assert!(filter(is_a(Kind::Text), &[]).is_empty());
    }
}
