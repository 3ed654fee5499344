//! Customization-point resolver
//!
//! Each channel of a registered type is read through exactly one strategy,
//! named by its [`Traits`] registration:
//!
//! | Strategy | Value channel | Error channel |
//! |---|---|---|
//! | [`Registered`] | [`ExplicitValue`] | [`ExplicitError`] |
//! | [`Intrinsic`] | the type's own `IntoIterator` (one item when a value is held) | n/a |
//! | [`Free<F>`] | `F: ValueFn<T>` | `F: ErrorFn<T>` |
//! | [`NoError`] | n/a | none, the type is a plain nullable |
//!
//! When a type could be served by several strategies, registrations pick them
//! in this order: an explicit entry first, then the type's intrinsic
//! protocol, then a free function.
//!
//! The functions at the bottom of this module are the checked entry points
//! the algorithms use. Each one verifies its precondition before touching a
//! channel.

use std::marker::PhantomData;

use crate::assert::violated;
use crate::concepts::{ExpectedLike, Nullable};
use crate::error::ContractViolation;
use crate::precondition;
use crate::registry::{ExplicitError, ExplicitValue, FromError, FromNull, FromValue, Traits};

/// Read the value through the registered entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Registered;

/// Read the value through the type's own iteration protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Intrinsic;

/// Read a channel through the free function object `F`
pub struct Free<F>(PhantomData<fn() -> F>);

/// The type has no error channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoError;

/// A way of reading the value channel of `T`
pub trait ValueStrategy<T> {
    /// Type of the value read
    type Output;

    /// Read the value; `source` holds one
    fn read(source: T) -> Self::Output;
}

/// A way of reading the error channel of `T`
#[diagnostic::on_unimplemented(
    message = "`{T}` is not expected-like",
    label = "`{T}` has no readable error channel",
    note = "this operation requires an expected-like input; register `{T}` with an `ErrorAccess` other than `NoError`"
)]
pub trait ErrorStrategy<T> {
    /// Type of the error read
    type Output;

    /// Read the error; `source` holds one
    fn read(source: T) -> Self::Output;
}

/// Free function reading the value of `T`
pub trait ValueFn<T> {
    /// Type of the value read
    type Output;

    /// Read the value
    fn value(source: T) -> Self::Output;
}

/// Free function reading the error of `T`
pub trait ErrorFn<T> {
    /// Type of the error read
    type Output;

    /// Read the error
    fn error(source: T) -> Self::Output;
}

impl<T: ExplicitValue> ValueStrategy<T> for Registered {
    type Output = T::Output;

    #[inline]
    fn read(source: T) -> Self::Output {
        source.value()
    }
}

impl<T: IntoIterator> ValueStrategy<T> for Intrinsic {
    type Output = T::Item;

    #[inline]
    fn read(source: T) -> Self::Output {
        match source.into_iter().next() {
            Some(value) => value,
            None => violated(ContractViolation::missing_value::<T>()),
        }
    }
}

impl<T, F: ValueFn<T>> ValueStrategy<T> for Free<F> {
    type Output = F::Output;

    #[inline]
    fn read(source: T) -> Self::Output {
        F::value(source)
    }
}

impl<T: ExplicitError> ErrorStrategy<T> for Registered {
    type Output = T::Output;

    #[inline]
    fn read(source: T) -> Self::Output {
        source.error()
    }
}

impl<T, F: ErrorFn<T>> ErrorStrategy<T> for Free<F> {
    type Output = F::Output;

    #[inline]
    fn read(source: T) -> Self::Output {
        F::error(source)
    }
}

/// Carry the null state of `Source` into `Target`
///
/// Plain nullables produce an empty `Target`; expected-likes move their error
/// into it. Implemented by the error strategies.
#[diagnostic::on_unimplemented(
    message = "the null state of `{Source}` cannot be carried into `{Target}`",
    note = "plain nullables need `{Target}: FromNull`; expected-likes need `{Target}: FromError<_>` for their error type"
)]
pub trait Propagate<Source, Target> {
    /// Convert a null `source`
    fn propagate(source: Source) -> Target;
}

impl<S, T: FromNull> Propagate<S, T> for NoError {
    #[inline]
    fn propagate(_source: S) -> T {
        T::from_null(T::NULL)
    }
}

impl<S, T> Propagate<S, T> for Registered
where
    Registered: ErrorStrategy<S>,
    T: FromError<<Registered as ErrorStrategy<S>>::Output>,
{
    #[inline]
    fn propagate(source: S) -> T {
        T::from_error(<Registered as ErrorStrategy<S>>::read(source))
    }
}

impl<S, T, F> Propagate<S, T> for Free<F>
where
    Free<F>: ErrorStrategy<S>,
    T: FromError<<Free<F> as ErrorStrategy<S>>::Output>,
{
    #[inline]
    fn propagate(source: S) -> T {
        T::from_error(<Free<F> as ErrorStrategy<S>>::read(source))
    }
}

// =============================================================================
// Checked entry points
// =============================================================================

/// Whether `target` holds a value
///
/// Compares against the registered sentinel.
#[inline]
pub fn has_value<N: Traits>(target: &N) -> bool {
    N::NULL != *target
}

/// Read the value of `source`
///
/// # Panics
///
/// Reports [`ContractViolation::MissingValue`] if `source` is null.
#[inline]
#[track_caller]
pub fn value<N: Nullable>(source: N) -> N::Value {
    precondition!(has_value(&source), ContractViolation::missing_value::<N>());
    source.read_value()
}

/// Read the error of `source`
///
/// # Panics
///
/// Reports [`ContractViolation::MissingError`] if `source` holds a value.
#[inline]
#[track_caller]
pub fn error<N: ExpectedLike>(source: N) -> N::Error {
    precondition!(!has_value(&source), ContractViolation::missing_error::<N>());
    source.read_error()
}

/// The empty instance of `N`
#[inline]
pub fn empty<N: FromNull>() -> N {
    N::from_null(N::NULL)
}

/// A value-holding `N`
#[inline]
pub fn construct_from_value<N, V>(value: V) -> N
where
    N: Nullable + FromValue<V>,
{
    N::from_value(value)
}

/// An error-holding `N`
#[inline]
pub fn construct_from_error<N, E>(error: E) -> N
where
    N: ExpectedLike + FromError<E>,
{
    N::from_error(error)
}

/// Carry the null state of `source` into `T`
///
/// # Panics
///
/// Reports [`ContractViolation::UnexpectedValue`] if `source` holds a value.
#[inline]
#[track_caller]
pub fn propagate<N, T>(source: N) -> T
where
    N: Nullable,
    N::ErrorAccess: Propagate<N, T>,
{
    precondition!(!has_value(&source), ContractViolation::unexpected_value::<N>());
    <N::ErrorAccess as Propagate<N, T>>::propagate(source)
}

/// Carry the value held by `source` into `T`
///
/// # Panics
///
/// Reports [`ContractViolation::MissingValue`] if `source` is null.
#[inline]
#[track_caller]
pub fn rebind_value<T, N>(source: N) -> T
where
    N: Nullable,
    T: FromValue<N::Value>,
{
    T::from_value(value(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ExpectedFake, Slot};

    #[test]
    fn test_has_value_option() {
        assert!(has_value(&Some(1)));
        assert!(!has_value(&None::<i32>));
    }

    #[test]
    fn test_has_value_result() {
        assert!(has_value(&Ok::<i32, String>(1)));
        assert!(!has_value(&Err::<i32, String>("bad".into())));
    }

    #[test]
    fn test_value_through_intrinsic() {
        assert_eq!(value(Some(42)), 42);
        assert_eq!(value(Ok::<_, String>("text")), "text");
    }

    #[test]
    fn test_value_preserves_borrows() {
        let mut opt = Some(String::from("owned"));
        let shared: &String = value(opt.as_ref());
        assert_eq!(shared, "owned");

        let exclusive: &mut String = value(opt.as_mut());
        exclusive.push('!');
        assert_eq!(opt.as_deref(), Some("owned!"));
    }

    #[test]
    fn test_value_through_registered() {
        assert_eq!(value(ExpectedFake::<f32>::new(4.2)), 4.2);
    }

    #[test]
    fn test_value_through_free_function() {
        assert_eq!(value(Slot::new("x")), "x");
    }

    #[test]
    fn test_error_through_registered() {
        let err: std::result::Result<i32, String> = Err("bad".into());
        assert_eq!(error(err), "bad");
    }

    #[test]
    fn test_error_through_free_function() {
        let fake = ExpectedFake::<f32>::from_error("An error".to_string());
        assert_eq!(error(fake), "An error");
    }

    #[test]
    fn test_error_of_borrowed_result() {
        let err: std::result::Result<i32, String> = Err("bad".into());
        let borrowed: &String = error(err.as_ref());
        assert_eq!(borrowed, "bad");
    }

    #[test]
    #[should_panic(expected = "must contain a value")]
    fn test_value_of_null_panics() {
        let _ = value(None::<i32>);
    }

    #[test]
    #[should_panic(expected = "must contain a value")]
    fn test_value_of_empty_slot_panics() {
        let _ = value(Slot::<i32>::empty());
    }

    #[test]
    #[should_panic(expected = "must hold an error")]
    fn test_error_of_value_panics() {
        let _ = error(Ok::<i32, String>(3));
    }

    #[test]
    fn test_empty() {
        assert_eq!(empty::<Option<u8>>(), None);
        assert!(!has_value(&empty::<Slot<u8>>()));
    }

    #[test]
    fn test_construct_from_value_and_error() {
        let opt: Option<i32> = construct_from_value(5);
        assert_eq!(opt, Some(5));

        let res: std::result::Result<i32, &str> = construct_from_error("bad");
        assert_eq!(res, Err("bad"));
    }

    #[test]
    fn test_propagate_plain_nullable_gives_empty() {
        let target: Option<f32> = propagate(None::<i32>);
        assert_eq!(target, None);
    }

    #[test]
    fn test_propagate_expected_carries_error() {
        let source: std::result::Result<i32, String> = Err("bad".into());
        let target: std::result::Result<f32, String> = propagate(source);
        assert_eq!(target, Err("bad".to_string()));
    }

    #[test]
    fn test_propagate_free_error_strategy() {
        let source = ExpectedFake::<i32>::from_error("An error".to_string());
        let target: ExpectedFake<u8> = propagate(source);
        assert_eq!(target.error_ref().map(String::as_str), Some("An error"));
    }

    #[test]
    #[should_panic(expected = "must not contain a value")]
    fn test_propagate_value_panics() {
        let _: Option<i32> = propagate(Some(1));
    }

    #[test]
    fn test_rebind_value_carries_value() {
        let source: std::result::Result<i32, String> = Ok(7);
        let target: std::result::Result<i32, usize> = rebind_value(source);
        assert_eq!(target, Ok(7));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn has_value_agrees_with_option(input in proptest::option::of(any::<i64>())) {
                prop_assert_eq!(has_value(&input), input.is_some());
            }

            #[test]
            fn propagate_keeps_any_error(message in ".{0,32}") {
                let source: std::result::Result<u8, String> = Err(message.clone());
                let target: std::result::Result<char, String> = propagate(source);
                prop_assert_eq!(target, Err(message));
            }
        }
    }
}
