//! Free-standing `map`, `flat_map` and `ap` over borrowed sequences.
//!
//! These mirror the trait methods of [`Functor`](super::Functor),
//! [`Monad`](super::Monad) and [`Applicative`](super::Applicative) but take
//! the function first and borrow the input slice, so the caller's sequence
//! is never consumed or mutated. Every call returns a fresh `Vec`.
//!
//! # Examples
//!
//! ```rust
//! use jargon::typeclass::{ap, flat_map, map};
//!
//! let numbers = [1, 2, 3];
//! assert_eq!(map(|n| n * 2, &numbers), vec![2, 4, 6]);
//! assert_eq!(flat_map(|n| vec![*n; 2], &numbers), vec![1, 1, 2, 2, 3, 3]);
//!
//! let increment = |n: &i32| n + 1;
//! assert_eq!(ap(&[increment], &[1]), vec![2]);
//! assert_eq!(numbers, [1, 2, 3]);
//! ```

/// Applies `function` to each element in order.
///
/// The result has the same length and order as `elements`.
#[must_use]
pub fn map<A, B, F>(function: F, elements: &[A]) -> Vec<B>
where
    F: FnMut(&A) -> B,
{
    elements.iter().map(function).collect()
}

/// Applies `function` to each element and concatenates the produced
/// sequences in order, flattening exactly one level.
///
/// # Examples
///
/// ```rust
/// use jargon::typeclass::flat_map;
///
/// let nested = flat_map(|n: &i32| vec![vec![*n]], &[1, 2]);
/// assert_eq!(nested, vec![vec![1], vec![2]]);
/// ```
#[must_use]
pub fn flat_map<A, B, I, F>(function: F, elements: &[A]) -> Vec<B>
where
    I: IntoIterator<Item = B>,
    F: FnMut(&A) -> I,
{
    elements.iter().flat_map(function).collect()
}

/// Applies every function to every element.
///
/// The output is `functions[0]` applied to all of `elements`, followed by
/// `functions[1]` applied to all of `elements`, and so on.
///
/// # Examples
///
/// ```rust
/// use jargon::typeclass::ap;
///
/// let add = |x: &i32| {
///     let x = *x;
///     move |y: &i32| x + y
/// };
/// let partially_applied = ap(&[add], &[1, 3]);
/// assert_eq!(ap(&partially_applied, &[4, 5]), vec![5, 6, 7, 8]);
/// ```
#[must_use]
pub fn ap<A, B, F>(functions: &[F], elements: &[A]) -> Vec<B>
where
    F: Fn(&A) -> B,
{
    let mut result = Vec::with_capacity(functions.len().saturating_mul(elements.len()));
    for function in functions {
        result.extend(elements.iter().map(function));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn map_doubles_in_order() {
        assert_eq!(map(|n: &i32| n * 2, &[1, 2, 3]), vec![2, 4, 6]);
    }

    #[rstest]
    fn map_over_empty_slice_is_empty() {
        let empty: [i32; 0] = [];
        assert!(map(|n: &i32| n + 1, &empty).is_empty());
    }

    #[rstest]
    fn flat_map_splits_and_concatenates() {
        let split = flat_map(
            |pair: &&str| pair.split(',').map(String::from).collect::<Vec<_>>(),
            &["cat,dog", "fish,bird"],
        );
        assert_eq!(split, vec!["cat", "dog", "fish", "bird"]);
    }

    #[rstest]
    fn ap_single_function_single_element() {
        assert_eq!(ap(&[|x: &i32| x + 1], &[1]), vec![2]);
    }

    #[rstest]
    fn ap_with_fn_pointers_orders_by_function() {
        let functions: [fn(&i32) -> i32; 2] = [|x| x + 1, |x| x * 10];
        assert_eq!(ap(&functions, &[1, 2]), vec![2, 3, 10, 20]);
    }

    #[rstest]
    fn inputs_are_left_untouched() {
        let numbers = vec![3, 2, 1];
        let _ = map(|n: &i32| n * 100, &numbers);
        let _ = flat_map(|n: &i32| vec![*n, *n], &numbers);
        assert_eq!(numbers, vec![3, 2, 1]);
    }
}
