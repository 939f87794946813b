//! Continuation monad for continuation-passing style (CPS).
//!
//! In continuation-passing style a function never returns its result;
//! it hands the result to "the rest of the computation", a function it was
//! given as an extra argument. [`Continuation<R, A>`] packages such a
//! computation as a value: it produces an `A`, and once it is given a
//! continuation `A -> R` it produces the final `R`.
//!
//! # Examples
//!
//! ```rust
//! use jargon::control::Continuation;
//!
//! let add_one_and_continue = |number: i32| Continuation::<String, i32>::pure(number + 1);
//! let rendered = add_one_and_continue(2).run(|result| format!("Given {result}"));
//! assert_eq!(rendered, "Given 3");
//! ```

use std::marker::PhantomData;

/// A boxed continuation function that takes a value and produces a result.
type ContinuationFunction<A, R> = Box<dyn FnOnce(A) -> R>;

/// A boxed CPS function that takes a continuation and produces a result.
type CpsFunction<A, R> = Box<dyn FnOnce(ContinuationFunction<A, R>) -> R>;

/// A computation in continuation-passing style, `(A -> R) -> R`.
///
/// # Laws
///
/// - **Left Identity**: `Continuation::pure(a).flat_map(f).run(k) == f(a).run(k)`
/// - **Right Identity**: `m.flat_map(Continuation::pure).run(k) == m.run(k)`
/// - **Associativity**: `m.flat_map(f).flat_map(g).run(k) == m.flat_map(|x| f(x).flat_map(g)).run(k)`
pub struct Continuation<R, A> {
    run_continuation: CpsFunction<A, R>,
    _marker: PhantomData<(R, A)>,
}

impl<R: 'static, A: 'static> Continuation<R, A> {
    /// Creates a continuation from a function `(A -> R) -> R`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jargon::control::Continuation;
    ///
    /// let cont: Continuation<String, i32> = Continuation::new(|k| k(42));
    /// assert_eq!(cont.run(|x| x.to_string()), "42");
    /// ```
    pub fn new<F>(run: F) -> Self
    where
        F: FnOnce(Box<dyn FnOnce(A) -> R>) -> R + 'static,
    {
        Self {
            run_continuation: Box::new(run),
            _marker: PhantomData,
        }
    }

    /// Passes `value` straight to the continuation.
    #[must_use]
    pub fn pure(value: A) -> Self {
        Self::new(move |continuation| continuation(value))
    }

    /// Runs the computation with the final continuation.
    pub fn run<K>(self, continuation: K) -> R
    where
        K: FnOnce(A) -> R + 'static,
    {
        (self.run_continuation)(Box::new(continuation))
    }

    /// Applies `function` to the intermediate value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jargon::control::Continuation;
    ///
    /// let cont: Continuation<i32, i32> = Continuation::pure(21);
    /// assert_eq!(cont.map(|x| x * 2).run(|x| x), 42);
    /// ```
    #[must_use]
    pub fn map<B: 'static, F>(self, function: F) -> Continuation<R, B>
    where
        F: FnOnce(A) -> B + 'static,
    {
        Continuation::new(move |continuation| self.run(move |a| continuation(function(a))))
    }

    /// Feeds the intermediate value to a function producing the next
    /// continuation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jargon::control::Continuation;
    ///
    /// let cont: Continuation<i32, i32> = Continuation::pure(21);
    /// let result = cont.flat_map(|x| Continuation::pure(x * 2));
    /// assert_eq!(result.run(|x| x), 42);
    /// ```
    #[must_use]
    pub fn flat_map<B: 'static, F>(self, function: F) -> Continuation<R, B>
    where
        F: FnOnce(A) -> Continuation<R, B> + 'static,
    {
        Continuation::new(move |continuation| self.run(move |a| function(a).run(continuation)))
    }
}
