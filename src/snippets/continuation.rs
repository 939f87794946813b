//! Continuation-passing style: instead of returning, a function hands its
//! result to the rest of the program, which it receives as an argument.

use std::fs;
use std::io::Write;

use crate::config::RunnerConfig;
use crate::control::Continuation;
use crate::error::SnippetError;

/// Adds one and continues with `continuation`.
pub fn add_one_and_continue<R: 'static>(number: i32) -> Continuation<R, i32> {
    Continuation::pure(number + 1)
}

/// Prints `Given 3`, then the contents of `config.data_file` as
/// `Data is: '<contents>'`.
///
/// A file that cannot be read is logged and skipped; the snippet still
/// succeeds.
///
/// # Errors
///
/// Returns [`SnippetError::Io`] if writing fails.
pub fn run(out: &mut dyn Write, config: &RunnerConfig) -> Result<(), SnippetError> {
    let print_as_string = |number: i32| format!("Given {number}");

    let given = add_one_and_continue(2).run(print_as_string);
    writeln!(out, "{given}")?;

    let mut continue_program_with = |data: &[u8]| {
        writeln!(out, "Data is: '{}'", String::from_utf8_lossy(data).trim_end())
    };

    match fs::read(&config.data_file) {
        Ok(data) => continue_program_with(&data)?,
        Err(error) => tracing::error!(
            path = %config.data_file.display(),
            %error,
            "could not read data file"
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn continuation_receives_incremented_value() {
        assert_eq!(add_one_and_continue(41).run(|n| n), 42);
    }

    #[rstest]
    fn missing_file_is_not_an_error() {
        let config = RunnerConfig::default().with_data_file("does/not/exist");
        let mut out = Vec::new();
        run(&mut out, &config).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Given 3\n");
    }
}
