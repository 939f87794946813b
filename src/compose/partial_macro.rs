//! Partial application: fixing some arguments of a function and getting a
//! function of the remaining ones back.
//!
//! - [`Partial::partial`] fixes the first argument of a binary function.
//! - [`partial!`](crate::partial) fixes any combination of the arguments of
//!   a 2 or 3 argument function, using `__` for the ones left open.

/// Extension trait fixing the first argument of a binary `Fn`.
///
/// # Examples
///
/// ```
/// use jargon::compose::Partial;
///
/// let add = |a: i32, b: i32| a + b;
/// let five_plus = add.partial(5);
/// assert_eq!(five_plus(4), 9);
/// ```
pub trait Partial<A, B, C> {
    /// Returns `|b| self(first, b)`.
    #[must_use]
    fn partial(self, first: A) -> impl Fn(B) -> C;
}

impl<F, A, B, C> Partial<A, B, C> for F
where
    F: Fn(A, B) -> C,
    A: Clone,
{
    fn partial(self, first: A) -> impl Fn(B) -> C {
        move |second: B| self(first.clone(), second)
    }
}

/// Partially applies arguments to a function.
///
/// Use `__` (double underscore) as a placeholder for arguments that should
/// remain as parameters in the resulting function. `__` is matched as a
/// literal token and needs no import.
///
/// # Syntax
///
/// For a 3-argument function `f(a, b, c)`:
/// - `partial!(f, __, v2, v3)` creates `|a| f(a, v2, v3)`
/// - `partial!(f, v1, __, __)` creates `|b, c| f(v1, b, c)`
/// - `partial!(f, v1, v2, v3)` creates `|| f(v1, v2, v3)`
///
/// and likewise for 2-argument functions. Fixed values are cloned on every
/// call, so they must implement [`Clone`].
///
/// # Examples
///
/// ```
/// use jargon::partial;
///
/// fn add3(a: i32, b: i32, c: i32) -> i32 { a + b + c }
///
/// let five_plus = partial!(add3, __, 2, 3);
/// assert_eq!(five_plus(4), 9);
/// ```
///
/// ## Fixing the second argument
///
/// ```
/// use jargon::partial;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let half = partial!(divide, __, 2.0);
/// assert_eq!(half(10.0), 5.0);
/// ```
#[macro_export]
macro_rules! partial {
    // Three parameters. Arms holding `__` come before the ones that would
    // read it as an expression.
    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |a, b, c| function(a, b, c)
    }};
    ($function:expr, $a:expr, __, __ $(,)?) => {{
        let (function, a) = ($function, $a);
        move |b, c| function(a.clone(), b, c)
    }};
    ($function:expr, __, $b:expr, __ $(,)?) => {{
        let (function, b) = ($function, $b);
        move |a, c| function(a, b.clone(), c)
    }};
    ($function:expr, __, __, $c:expr $(,)?) => {{
        let (function, c) = ($function, $c);
        move |a, b| function(a, b, c.clone())
    }};
    ($function:expr, $a:expr, $b:expr, __ $(,)?) => {{
        let (function, a, b) = ($function, $a, $b);
        move |c| function(a.clone(), b.clone(), c)
    }};
    ($function:expr, $a:expr, __, $c:expr $(,)?) => {{
        let (function, a, c) = ($function, $a, $c);
        move |b| function(a.clone(), b, c.clone())
    }};
    ($function:expr, __, $b:expr, $c:expr $(,)?) => {{
        let (function, b, c) = ($function, $b, $c);
        move |a| function(a, b.clone(), c.clone())
    }};
    ($function:expr, $a:expr, $b:expr, $c:expr $(,)?) => {{
        let (function, a, b, c) = ($function, $a, $b, $c);
        move || function(a.clone(), b.clone(), c.clone())
    }};

    // Two parameters.
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |a, b| function(a, b)
    }};
    ($function:expr, $a:expr, __ $(,)?) => {{
        let (function, a) = ($function, $a);
        move |b| function(a.clone(), b)
    }};
    ($function:expr, __, $b:expr $(,)?) => {{
        let (function, b) = ($function, $b);
        move |a| function(a, b.clone())
    }};
    ($function:expr, $a:expr, $b:expr $(,)?) => {{
        let (function, a, b) = ($function, $a, $b);
        move || function(a.clone(), b.clone())
    }};
}

#[cfg(test)]
mod tests {
    use super::Partial;
    use rstest::rstest;

    fn add3(a: i32, b: i32, c: i32) -> i32 {
        a + b + c
    }

    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    #[rstest]
    fn partial_trait_fixes_first_argument() {
        let ten_minus = subtract.partial(10);
        assert_eq!(ten_minus(3), 7);
    }

    #[rstest]
    #[case(4, 9)]
    #[case(0, 5)]
    fn partial_macro_fixes_trailing_arguments(#[case] input: i32, #[case] expected: i32) {
        let five_plus = partial!(add3, __, 2, 3);
        assert_eq!(five_plus(input), expected);
    }

    #[rstest]
    fn partial_macro_fixes_second_of_two() {
        let minus_one = partial!(subtract, __, 1);
        assert_eq!(minus_one(10), 9);
    }

    #[rstest]
    fn partial_macro_thunk() {
        let thunk = partial!(subtract, 10, 4);
        assert_eq!(thunk(), 6);
    }

    #[rstest]
    fn partial_macro_middle_placeholder() {
        let around = partial!(add3, 100, __, 1);
        assert_eq!(around(10), 111);
    }
}
