//! Runnable demonstrations, one per functional programming term.
//!
//! Every snippet is independent: it writes its results to the sink it is
//! given and shares nothing with the others. [`CATALOG`] lists them in
//! presentation order.
//!
//! # Examples
//!
//! ```rust
//! use jargon::config::RunnerConfig;
//! use jargon::snippets;
//!
//! let mut out = Vec::new();
//! snippets::run_by_name("closure", &mut out, &RunnerConfig::default()).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "8\n");
//! ```

mod print;

pub mod applicative_functor;
pub mod arity;
pub mod closure;
pub mod comonad;
pub mod continuation;
pub mod contracts;
pub mod currying;
pub mod function;
pub mod function_composition;
pub mod functor;
pub mod higher_order_functions;
pub mod lambda;
pub mod lazy_evaluation;
pub mod monad;
pub mod monoid;
pub mod morphisms;
pub mod partial_application;
pub mod point_free_style;
pub mod predicate;
pub mod purity;

pub use print::Print;

use std::io::{self, Write};

use crate::config::RunnerConfig;
use crate::error::SnippetError;

/// Signature shared by every snippet entry point.
pub type SnippetFunction = fn(&mut dyn Write, &RunnerConfig) -> Result<(), SnippetError>;

/// A named, runnable demonstration.
#[derive(Clone, Copy)]
pub struct Snippet {
    /// Name used on the command line.
    pub name: &'static str,
    /// One-line description of the term it demonstrates.
    pub concept: &'static str,
    /// Entry point.
    pub run: SnippetFunction,
}

impl Snippet {
    /// Runs the snippet, writing its output to `out`.
    ///
    /// # Errors
    ///
    /// Returns whatever the snippet returns.
    pub fn run(&self, out: &mut dyn Write, config: &RunnerConfig) -> Result<(), SnippetError> {
        tracing::debug!(snippet = self.name, "running snippet");
        (self.run)(out, config)
    }
}

impl std::fmt::Debug for Snippet {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Snippet")
            .field("name", &self.name)
            .field("concept", &self.concept)
            .finish_non_exhaustive()
    }
}

macro_rules! snippet {
    ($name:literal, $module:ident, $concept:literal) => {
        Snippet {
            name: $name,
            concept: $concept,
            run: $module::run,
        }
    };
}

/// Every snippet, in presentation order.
pub static CATALOG: [Snippet; 20] = [
    snippet!("closure", closure, "a function that keeps access to the scope it was created in"),
    snippet!("currying", currying, "a chain of one-argument functions in place of one multi-argument function"),
    snippet!("function", function, "a mapping from each input to exactly one output"),
    snippet!("lambda", lambda, "a function written as an expression"),
    snippet!("predicate", predicate, "a function returning true or false"),
    snippet!("higher-order-functions", higher_order_functions, "functions taking or returning functions"),
    snippet!("function-composition", function_composition, "feeding one function's output into another"),
    snippet!("partial-application", partial_application, "fixing some arguments of a function"),
    snippet!("point-free-style", point_free_style, "defining functions without naming their data"),
    snippet!("arity", arity, "the number of arguments a function takes"),
    snippet!("purity", purity, "output determined by input alone, without side effects"),
    snippet!("functor", functor, "a container that can be mapped over"),
    snippet!("applicative-functor", applicative_functor, "applying wrapped functions to wrapped values"),
    snippet!("monad", monad, "chaining computations that produce wrapped values"),
    snippet!("comonad", comonad, "extracting from and extending over a context"),
    snippet!("monoid", monoid, "an associative combination with an identity"),
    snippet!("morphisms", morphisms, "structure-preserving transformations"),
    snippet!("lazy-evaluation", lazy_evaluation, "computing values only when needed"),
    snippet!("continuation", continuation, "passing the rest of the program as a function"),
    snippet!("contracts", contracts, "checking values at run time"),
];

/// Looks a snippet up by name.
///
/// # Errors
///
/// Returns [`SnippetError::UnknownSnippet`] if no snippet has that name.
pub fn find(name: &str) -> Result<&'static Snippet, SnippetError> {
    CATALOG
        .iter()
        .find(|snippet| snippet.name == name)
        .ok_or_else(|| SnippetError::UnknownSnippet(name.to_string()))
}

/// Looks a snippet up by name and runs it.
///
/// # Errors
///
/// Returns [`SnippetError::UnknownSnippet`] if no snippet has that name, or
/// whatever the snippet returns.
pub fn run_by_name(
    name: &str,
    out: &mut dyn Write,
    config: &RunnerConfig,
) -> Result<(), SnippetError> {
    find(name)?.run(out, config)
}

/// Resolves every name before anything runs.
///
/// # Errors
///
/// Returns [`SnippetError::UnknownSnippet`] for the first unknown name.
pub fn select<S: AsRef<str>>(names: &[S]) -> Result<Vec<&'static Snippet>, SnippetError> {
    names.iter().map(|name| find(name.as_ref())).collect()
}

/// Runs `selected` in order under a `== name ==` header each.
///
/// A failing snippet is logged and does not stop the ones after it.
/// Returns how many failed.
///
/// # Errors
///
/// Returns an I/O error if a header cannot be written.
pub fn run_all(
    selected: &[&Snippet],
    out: &mut dyn Write,
    config: &RunnerConfig,
) -> io::Result<usize> {
    let mut failures = 0;
    for snippet in selected {
        tracing::info!(snippet = snippet.name, "running");
        writeln!(out, "== {} ==", snippet.name)?;
        if let Err(error) = snippet.run(out, config) {
            tracing::error!(snippet = snippet.name, %error, "snippet failed");
            failures += 1;
        }
    }
    out.flush()?;
    Ok(failures)
}

/// Writes every snippet name and concept, names padded to one column.
///
/// # Errors
///
/// Returns an I/O error if `out` cannot be written.
pub fn list(out: &mut dyn Write) -> io::Result<()> {
    let width = CATALOG
        .iter()
        .map(|snippet| snippet.name.len())
        .max()
        .unwrap_or_default();
    for snippet in &CATALOG {
        writeln!(out, "{:width$}  {}", snippet.name, snippet.concept)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn names_are_unique() {
        let names: HashSet<&str> = CATALOG.iter().map(|snippet| snippet.name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[rstest]
    #[case("closure")]
    #[case("contracts")]
    fn find_known_names(#[case] name: &str) {
        assert_eq!(find(name).unwrap().name, name);
    }

    #[rstest]
    fn select_keeps_the_given_order() {
        let selected = select(&["monad", "closure"]).unwrap();
        let names: Vec<&str> = selected.iter().map(|snippet| snippet.name).collect();
        assert_eq!(names, vec!["monad", "closure"]);
    }

    #[rstest]
    fn find_unknown_name() {
        let error = find("category-theory").unwrap_err();
        assert!(matches!(error, SnippetError::UnknownSnippet(name) if name == "category-theory"));
    }
}
