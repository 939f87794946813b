//! Deferred values.
//!
//! [`Lazy<T, F>`] holds a computation instead of a value. Nothing runs until
//! [`Lazy::force`] is called; the first `force` runs the computation and
//! caches the result, every later `force` returns the cached value.
//!
//! # Examples
//!
//! ```rust
//! use jargon::control::Lazy;
//!
//! let lazy = Lazy::new(|| 6 * 7);
//! assert!(!lazy.is_initialized());
//! assert_eq!(*lazy.force(), 42);
//! assert!(lazy.is_initialized());
//! ```

use std::cell::{Cell, OnceCell};
use std::fmt;

/// A value computed on first use and memoized. Not thread-safe.
///
/// If the computation panics the value is poisoned: the computation is gone
/// and every later `force` panics.
///
/// # Examples
///
/// ```rust
/// use jargon::control::Lazy;
/// use std::cell::Cell;
///
/// let evaluations = Cell::new(0);
/// let total = Lazy::new(|| {
///     evaluations.set(evaluations.get() + 1);
///     (1..=10).sum::<i32>()
/// });
///
/// assert_eq!(evaluations.get(), 0);
/// assert_eq!(*total.force(), 55);
/// assert_eq!(*total.force(), 55);
/// assert_eq!(evaluations.get(), 1);
/// ```
pub struct Lazy<T, F = fn() -> T> {
    value: OnceCell<T>,
    pending: Cell<Option<F>>,
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Wraps `computation` without running it.
    #[inline]
    pub const fn new(computation: F) -> Self {
        Self {
            value: OnceCell::new(),
            pending: Cell::new(Some(computation)),
        }
    }

    /// Runs the computation on the first call and returns the cached value.
    ///
    /// # Panics
    ///
    /// Panics if the computation panicked on an earlier call.
    pub fn force(&self) -> &T {
        self.value.get_or_init(|| match self.pending.take() {
            Some(computation) => computation(),
            None => panic!("Lazy instance has been poisoned"),
        })
    }

    /// Whether the value has been computed.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }

    /// Whether the computation panicked.
    pub fn is_poisoned(&self) -> bool {
        let pending = self.pending.take();
        let poisoned = pending.is_none() && !self.is_initialized();
        self.pending.set(pending);
        poisoned
    }

    /// A new lazy value applying `function` to this one. Neither step runs
    /// until the result is forced.
    ///
    /// ```rust
    /// use jargon::control::Lazy;
    ///
    /// let doubled = Lazy::new(|| 21).map(|x| x * 2);
    /// assert_eq!(*doubled.force(), 42);
    /// ```
    #[must_use]
    pub fn map<U, G>(self, function: G) -> Lazy<U, impl FnOnce() -> U>
    where
        G: FnOnce(T) -> U,
    {
        Lazy::new(move || function(self.into_value()))
    }

    fn into_value(self) -> T {
        let Self { value, pending } = self;
        value.into_inner().unwrap_or_else(|| match pending.into_inner() {
            Some(computation) => computation(),
            None => panic!("Lazy instance has been poisoned"),
        })
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            None => formatter.debug_tuple("Lazy").field(&"<pending>").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn nothing_runs_before_force() {
        let evaluations = Cell::new(0);
        let lazy = Lazy::new(|| evaluations.set(evaluations.get() + 1));
        assert!(!lazy.is_initialized());
        assert_eq!(evaluations.get(), 0);
    }

    #[rstest]
    fn force_runs_once() {
        let evaluations = Cell::new(0);
        let lazy = Lazy::new(|| {
            evaluations.set(evaluations.get() + 1);
            42
        });

        assert_eq!(*lazy.force(), 42);
        assert_eq!(*lazy.force(), 42);
        assert_eq!(evaluations.get(), 1);
        assert!(lazy.is_initialized());
    }

    #[rstest]
    fn map_defers_both_steps() {
        let evaluations = Cell::new(0);
        let lazy = Lazy::new(|| {
            evaluations.set(evaluations.get() + 1);
            21
        })
        .map(|x| x * 2);

        assert_eq!(evaluations.get(), 0);
        assert_eq!(*lazy.force(), 42);
        assert_eq!(evaluations.get(), 1);
    }

    #[rstest]
    fn map_reuses_a_forced_value() {
        let evaluations = Cell::new(0);
        let lazy = Lazy::new(|| {
            evaluations.set(evaluations.get() + 1);
            5
        });
        let _ = lazy.force();

        assert_eq!(*lazy.map(|x| x + 1).force(), 6);
        assert_eq!(evaluations.get(), 1);
    }

    #[rstest]
    fn debug_shows_pending_then_value() {
        let lazy = Lazy::new(|| 1);
        assert_eq!(format!("{lazy:?}"), "Lazy(\"<pending>\")");
        let _ = lazy.force();
        assert_eq!(format!("{lazy:?}"), "Lazy(1)");
    }

    #[rstest]
    fn panicking_computation_poisons() {
        let lazy: Lazy<i32, _> = Lazy::new(|| panic!("computation failed"));
        assert!(!lazy.is_poisoned());

        let first = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| *lazy.force()));
        assert!(first.is_err());
        assert!(lazy.is_poisoned());

        let second = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| *lazy.force()));
        assert!(second.is_err());
    }
}
