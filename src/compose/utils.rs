//! Helper combinators for function composition.
//!
//! - [`identity`]: the I combinator
//! - [`constant`]: the K combinator
//! - [`flip`]: the C combinator

/// Returns the value unchanged.
///
/// `identity` is the unit of composition:
/// `compose(identity, f)` and `compose(f, identity)` both behave like `f`.
///
/// # Examples
///
/// ```
/// use jargon::compose::identity;
///
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
#[must_use]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns `value`, ignoring its input.
///
/// # Examples
///
/// ```
/// use jargon::compose::constant;
///
/// let values: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(values, vec![0, 0, 0]);
/// ```
#[inline]
#[must_use]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(a, b) == f(b, a)` and `flip(flip(f))` behaves like `f`.
///
/// # Examples
///
/// ```
/// use jargon::compose::flip;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let flipped_divide = flip(divide);
/// assert!((flipped_divide(10.0, 2.0) - 0.2).abs() < f64::EPSILON);
/// ```
#[inline]
#[must_use]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_constant_with_reference() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(42), "hello");
    }

    #[test]
    fn test_flip_with_asymmetric_function() {
        fn power(base: i32, exponent: u32) -> i32 {
            base.pow(exponent)
        }

        let flipped_power = flip(power);
        assert_eq!(power(2, 3), 8);
        assert_eq!(flipped_power(3, 2), 8);
    }
}
