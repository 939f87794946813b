//! Currying: turning an `n`-argument function into `n` nested one-argument
//! functions.
//!
//! Two forms are provided:
//!
//! - the [`Curry`] extension trait, `f.curried()`, for binary functions, and
//! - the [`curry2!`](crate::curry2) and [`curry3!`](crate::curry3) macros.
//!
//! Both share the function and the already-supplied arguments through
//! `std::rc::Rc`, so a curried function and every partial application taken
//! from it can be called any number of times.

use std::rc::Rc;

/// Extension trait that curries any binary `Fn`.
///
/// # Examples
///
/// ```
/// use jargon::compose::Curry;
///
/// let sum = |a: i32, b: i32| a + b;
/// let curried_sum = sum.curried();
///
/// assert_eq!(curried_sum(40)(2), 42);
///
/// let add2 = curried_sum(2);
/// assert_eq!(add2(10), 12);
/// ```
pub trait Curry<A, B, Z> {
    /// Returns the curried form `a -> b -> z`.
    #[must_use]
    fn curried(self) -> impl Fn(A) -> Box<dyn Fn(B) -> Z>;
}

impl<F, A, B, Z> Curry<A, B, Z> for F
where
    F: Fn(A, B) -> Z + 'static,
    A: Clone + 'static,
    B: 'static,
    Z: 'static,
{
    fn curried(self) -> impl Fn(A) -> Box<dyn Fn(B) -> Z> {
        let function = Rc::new(self);
        move |first: A| {
            let function = Rc::clone(&function);
            let applied: Box<dyn Fn(B) -> Z> =
                Box::new(move |second| function(first.clone(), second));
            applied
        }
    }
}

/// Converts a 2-argument function into a curried form.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - The first argument type must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use jargon::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                    arg2,
                )
            }
        }
    }};
}

/// Converts a 3-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use jargon::curry3;
///
/// fn add_three(first: i32, second: i32, third: i32) -> i32 {
///     first + second + third
/// }
///
/// let curried = curry3!(add_three);
/// let with_first = curried(1);
/// let with_second = with_first(2);
/// assert_eq!(with_second(3), 6);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    function(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                        arg3,
                    )
                }
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::Curry;
    use rstest::rstest;

    #[rstest]
    fn curried_partial_is_reusable() {
        let curried = (|a: i32, b: i32| a - b).curried();
        let ten_minus = curried(10);
        assert_eq!(ten_minus(3), 7);
        assert_eq!(ten_minus(4), 6);
    }

    #[rstest]
    fn curried_with_owned_first_argument() {
        let greet = |greeting: String, name: &'static str| format!("{greeting}, {name}");
        let hello = greet.curried()(String::from("Hello"));
        assert_eq!(hello("Ada"), "Hello, Ada");
        assert_eq!(hello("Grace"), "Hello, Grace");
    }

    #[rstest]
    fn curry2_matches_uncurried() {
        let add = |a: i32, b: i32| a + b;
        let curried = curry2!(add);
        assert_eq!(curried(40)(2), add(40, 2));
    }

    #[rstest]
    fn curry3_with_non_copy_arguments() {
        let join = |a: String, b: String, c: String| format!("{a}{b}{c}");
        let curried = curry3!(join);
        let prefix = curried(String::from("a"))(String::from("b"));
        assert_eq!(prefix(String::from("c")), "abc");
        assert_eq!(prefix(String::from("d")), "abd");
    }
}
