//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Option<_>` or `Vec<_>` as type constructors
//! directly. [`TypeConstructor`] records the element type a container is
//! currently applied to, and how to re-apply the same container to another
//! element type, which is all `Functor`, `Applicative`, `Monad` and `Comonad`
//! need in order to be written once.
//!
//! # Example
//!
//! ```rust
//! use jargon::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers: Vec<i32> = vec![1, 2, 3];
//! let words: Vec<String> = empty_like(numbers);
//! assert!(words.is_empty());
//! ```

/// A type constructor applied to some element type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The element type this constructor is currently applied to.
    ///
    /// For `Option<i32>` this is `i32`.
    type Inner;

    /// The same constructor applied to `B`.
    ///
    /// For `Option<i32>`, `WithType<String>` is `Option<String>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
