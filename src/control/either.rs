//! Either type - a value that can be one of two types.
//!
//! By convention `Left` carries the failure or the first alternative and
//! `Right` the success or the second alternative.
//!
//! # Examples
//!
//! ```rust
//! use jargon::control::Either;
//!
//! let right: Either<i32, String> = Either::of("hello".to_string());
//! let rendered = right.fold(
//!     |n| format!("Number: {n}"),
//!     |s| format!("String: {s}"),
//! );
//! assert_eq!(rendered, "String: hello");
//! ```

/// A value that is either `Left(L)` or `Right(R)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Lifts `value` into the `Right` side.
    #[inline]
    pub const fn of(value: R) -> Self {
        Self::Right(value)
    }

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Maps the right value, leaving a left value untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jargon::control::Either;
    ///
    /// let success: Either<String, i32> = Either::Right(42);
    /// assert_eq!(success.map_right(|x| x * 2), Either::Right(84));
    /// ```
    #[inline]
    #[must_use]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Maps the left value, leaving a right value untouched.
    #[inline]
    #[must_use]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Collapses both sides into one value.
    #[inline]
    pub fn fold<T, LeftFunction, RightFunction>(
        self,
        left_function: LeftFunction,
        right_function: RightFunction,
    ) -> T
    where
        LeftFunction: FnOnce(L) -> T,
        RightFunction: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }
}
