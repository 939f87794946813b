//! Runtime contracts over dynamically tagged values.
//!
//! A contract is a function that checks a value at run time and either hands
//! it back with a narrower type or fails. [`Value`] is a small tagged union
//! standing in for "any value"; [`Kind`] names its tags.
//!
//! # Examples
//!
//! ```rust
//! use jargon::contract::{ContractError, Kind, Value, expect_int};
//!
//! let add_one = |input: &Value| expect_int(input).map(|number| number + 1);
//!
//! assert_eq!(add_one(&Value::Int(2)), Ok(3));
//! assert_eq!(
//!     add_one(&Value::from("some string")),
//!     Err(ContractError::Violated { expected: Kind::Int, found: Kind::Text }),
//! );
//! ```

use std::fmt;

use thiserror::Error;

/// The runtime tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A signed integer.
    Int,
    /// A string.
    Text,
    /// A floating point number.
    Float,
    /// A boolean.
    Bool,
}

impl fmt::Display for Kind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "Int",
            Self::Text => "Text",
            Self::Float => "Float",
            Self::Bool => "Bool",
        };
        formatter.write_str(name)
    }
}

/// A value whose type is only known at run time.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A signed integer.
    Int(i64),
    /// A string.
    Text(String),
    /// A floating point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
}

impl Value {
    /// Returns the runtime tag of this value.
    #[inline]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Int(_) => Kind::Int,
            Self::Text(_) => Kind::Text,
            Self::Float(_) => Kind::Float,
            Self::Bool(_) => Kind::Bool,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A failed runtime contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractError {
    /// The value did not have the expected kind.
    #[error("Contract violated: expected an {expected}")]
    Violated {
        /// The kind the contract requires.
        expected: Kind,
        /// The kind that was supplied.
        found: Kind,
    },
}

/// Builds a predicate that accepts values of the given kind.
///
/// # Examples
///
/// ```rust
/// use jargon::contract::{Kind, Value, is_a};
///
/// let values = [Value::Int(0), Value::from("1"), Value::Int(2)];
/// let integers: Vec<&Value> = values.iter().filter(|value| is_a(Kind::Int)(value)).collect();
/// assert_eq!(integers, vec![&Value::Int(0), &Value::Int(2)]);
/// ```
#[must_use]
pub fn is_a(kind: Kind) -> impl Fn(&Value) -> bool {
    move |value| value.kind() == kind
}

/// Returns the integer inside `value`.
///
/// # Errors
///
/// Returns [`ContractError::Violated`] if `value` is not an [`Value::Int`].
pub const fn expect_int(value: &Value) -> Result<i64, ContractError> {
    match value {
        Value::Int(number) => Ok(*number),
        other => Err(ContractError::Violated {
            expected: Kind::Int,
            found: other.kind(),
        }),
    }
}
