//! Errors returned by snippet runs.

use std::io;

use thiserror::Error;

use crate::contract::ContractError;

/// Why a snippet run failed.
#[derive(Debug, Error)]
pub enum SnippetError {
    /// A runtime contract rejected its input.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// Writing output or reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No snippet is registered under the requested name.
    #[error("Unknown snippet: {0}")]
    UnknownSnippet(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Kind;
    use rstest::rstest;

    #[rstest]
    fn contract_error_is_shown_as_is() {
        let error = SnippetError::from(ContractError::Violated {
            expected: Kind::Int,
            found: Kind::Text,
        });
        assert_eq!(error.to_string(), "Contract violated: expected an Int");
    }

    #[rstest]
    fn unknown_snippet_display() {
        let error = SnippetError::UnknownSnippet("monads".to_string());
        assert_eq!(error.to_string(), "Unknown snippet: monads");
    }

    #[rstest]
    fn io_error_converts() {
        let error: SnippetError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(error, SnippetError::Io(_)));
        assert_eq!(error.to_string(), "I/O error: gone");
    }
}
