//! Function composition: the [`compose`] function and the [`compose!`] macro.
//!
//! Both read in data-flow order: the first function listed is applied first.
//! `compose(f, g)(x)` is `g(f(x))`, and `compose!(f, g, h)(x)` is
//! `h(g(f(x)))`.

/// Composes two functions so that `first` runs before `then`.
///
/// `compose(f, g)(x) == g(f(x))`.
///
/// # Examples
///
/// ```
/// use jargon::compose::compose;
///
/// let round_and_render = compose(f64::round, |rounded: f64| rounded.to_string());
/// assert_eq!(round_and_render(121.212_121), "121");
/// ```
///
/// ## Composition is associative
///
/// ```
/// use jargon::compose::compose;
///
/// let f = |x: i32| x + 1;
/// let g = |x: i32| x * 2;
/// let h = |x: i32| x - 3;
///
/// let left = compose(compose(f, g), h);
/// let right = compose(f, compose(g, h));
/// assert_eq!(left(10), right(10));
/// ```
#[inline]
#[must_use]
pub fn compose<A, B, C, F, G>(first: F, then: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| then(first(input))
}

/// Composes any number of functions, applying them left to right.
///
/// `compose!(f, g, h)(x)` is equivalent to `h(g(f(x)))`, which is also
/// `pipe!(x, f, g, h)`.
///
/// # Syntax
///
/// - `compose!(f)` - returns `f` unchanged
/// - `compose!(f, g)` - returns `|x| g(f(x))`
/// - `compose!(f, g, h, ...)` - composes any number of functions
///
/// # Examples
///
/// ```
/// use jargon::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // square(3) = 9, double(9) = 18, add_one(18) = 19
/// let composed = compose!(square, double, add_one);
/// assert_eq!(composed(3), 19);
/// ```
///
/// ## Types flow through the chain
///
/// ```
/// use jargon::compose;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let digits = compose!(to_string, get_length);
/// assert_eq!(digits(12345), 5);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::compose!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}
