//! Concept predicates
//!
//! Compile-time predicates gating which algorithms apply to which types.
//! All of them are blanket-implemented from the registry, so a type satisfies
//! them structurally, never by opting in.
//!
//! - [`Nullable`]: registered, with a readable value channel
//! - [`ExpectedLike`]: nullable, with a readable error channel
//! - [`ConstructibleFromValue`], [`ConstructibleFromError`]: can be built from
//!   a payload
//! - [`RebindableValueTo`], [`RebindableErrorTo`]: the rebound container can be
//!   built from the new payload
//!
//! Because the impls are blanket, an unmet predicate is reported through the
//! registry item that is missing: [`Traits`] for unregistered types,
//! [`ErrorStrategy`] for inputs without an error channel, and the
//! construction and rebinding traits for the rest.

use crate::registry::{FromError, FromValue, RebindError, RebindValue, Traits};
use crate::resolver::{ErrorStrategy, ValueStrategy};

/// A registered type with a readable value channel
///
/// An instance either holds a value (`instance != NULL`) or is null; there is
/// no third state.
pub trait Nullable: Traits {
    /// Type of the value read from an instance
    type Value;

    /// Read the value without checking the precondition
    ///
    /// Prefer [`crate::value`], which checks that a value is held.
    fn read_value(self) -> Self::Value;
}

impl<T: Traits> Nullable for T {
    type Value = <T::ValueAccess as ValueStrategy<T>>::Output;

    #[inline]
    fn read_value(self) -> Self::Value {
        <T::ValueAccess as ValueStrategy<T>>::read(self)
    }
}

/// A nullable carrying an error while null
///
/// Reading the error is only valid while the instance is null.
pub trait ExpectedLike: Nullable {
    /// Type of the error read from an instance
    type Error;

    /// Read the error without checking the precondition
    ///
    /// Prefer [`crate::error`], which checks that no value is held.
    fn read_error(self) -> Self::Error;
}

impl<T> ExpectedLike for T
where
    T: Nullable,
    T::ErrorAccess: ErrorStrategy<T>,
{
    type Error = <T::ErrorAccess as ErrorStrategy<T>>::Output;

    #[inline]
    fn read_error(self) -> Self::Error {
        <T::ErrorAccess as ErrorStrategy<T>>::read(self)
    }
}

/// A nullable buildable from a `V`
pub trait ConstructibleFromValue<V>: Nullable + FromValue<V> {}

impl<T, V> ConstructibleFromValue<V> for T where T: Nullable + FromValue<V> {}

/// An expected-like buildable from an `E`
pub trait ConstructibleFromError<E>: ExpectedLike + FromError<E> {}

impl<T, E> ConstructibleFromError<E> for T where T: ExpectedLike + FromError<E> {}

/// A nullable whose value type can be replaced by `V`
pub trait RebindableValueTo<V>: RebindValue {}

impl<T, V> RebindableValueTo<V> for T
where
    T: RebindValue,
    T::WithValue<V>: ConstructibleFromValue<V>,
{
}

/// An expected-like whose error type can be replaced by `E`
pub trait RebindableErrorTo<E>: RebindError {}

impl<T, E> RebindableErrorTo<E> for T
where
    T: RebindError,
    T::WithError<E>: ConstructibleFromError<E>,
{
}

/// Value type of `N`
pub type ValueOf<N> = <N as Nullable>::Value;

/// Error type of `N`
pub type ErrorOf<N> = <N as ExpectedLike>::Error;
