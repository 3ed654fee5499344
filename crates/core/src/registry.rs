//! Trait registry
//!
//! A type takes part in gimo by implementing [`Traits`]. The registration names
//! the type's null sentinel and the strategies used to read its value and
//! error channels. Everything else (construction, rebinding) is an optional
//! trait the algorithms ask for only when they need it.
//!
//! ## Registering a type
//!
//! ```
//! use gimo_core::{FromNull, FromValue, Intrinsic, NoError, Null, Traits};
//!
//! struct Cell(Option<u8>);
//!
//! impl PartialEq<Null> for Cell {
//!     fn eq(&self, _: &Null) -> bool {
//!         self.0.is_none()
//!     }
//! }
//!
//! impl PartialEq<Cell> for Null {
//!     fn eq(&self, cell: &Cell) -> bool {
//!         cell.0.is_none()
//!     }
//! }
//!
//! impl IntoIterator for Cell {
//!     type Item = u8;
//!     type IntoIter = std::option::IntoIter<u8>;
//!
//!     fn into_iter(self) -> Self::IntoIter {
//!         self.0.into_iter()
//!     }
//! }
//!
//! impl Traits for Cell {
//!     type Null = Null;
//!     const NULL: Null = Null;
//!     type ValueAccess = Intrinsic;
//!     type ErrorAccess = NoError;
//! }
//!
//! assert_eq!(gimo_core::value(Cell(Some(7))), 7);
//! assert!(!gimo_core::has_value(&Cell(None)));
//! ```

use crate::resolver::ValueStrategy;

/// Registration of a nullable type
///
/// This is the per-type table entry consulted by the resolver:
///
/// - `Null` / `NULL`: the sentinel an instance equals exactly when it holds
///   no value
/// - `ValueAccess`: the strategy reading the value channel
///   ([`Registered`](crate::Registered), [`Intrinsic`](crate::Intrinsic) or
///   [`Free`](crate::Free))
/// - `ErrorAccess`: the strategy reading the error channel, or
///   [`NoError`](crate::NoError) for plain nullables
///
/// The strategy is fixed per type and channel; nothing is decided at run time.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not registered as a nullable type",
    label = "not registered with gimo",
    note = "implement `gimo::Traits` for `{Self}` to name its null sentinel and value access"
)]
pub trait Traits: Sized {
    /// Null sentinel type
    type Null: NullFor<Self>;

    /// The sentinel value
    const NULL: Self::Null;

    /// Strategy reading the value channel
    type ValueAccess: ValueStrategy<Self>;

    /// Strategy reading the error channel
    type ErrorAccess;
}

/// `Self` is a null sentinel for `T`
///
/// Holds when the sentinel is copyable and compares with `T` in both
/// directions. Construction from the sentinel is a separate capability,
/// see [`FromNull`].
pub trait NullFor<T>: Copy + PartialEq<T> {}

impl<N, T> NullFor<T> for N
where
    N: Copy + PartialEq<T>,
    T: PartialEq<N>,
{
}

/// The shared null sentinel
///
/// Compares equal to every registered instance that holds no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Null;

/// Construction of an empty instance from the null sentinel
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be constructed from its null sentinel",
    note = "implement `gimo::FromNull` for `{Self}`; an and_then action must return a registered nullable"
)]
pub trait FromNull: Traits {
    /// Build the empty instance
    fn from_null(null: Self::Null) -> Self;
}

/// Explicitly registered value access
///
/// Read by the [`Registered`](crate::Registered) strategy. The caller
/// guarantees a value is held.
pub trait ExplicitValue {
    /// Type of the value read
    type Output;

    /// Read the value
    fn value(self) -> Self::Output;
}

/// Explicitly registered error access
///
/// Read by the [`Registered`](crate::Registered) strategy. The caller
/// guarantees an error is held.
pub trait ExplicitError {
    /// Type of the error read
    type Output;

    /// Read the error
    fn error(self) -> Self::Output;
}

/// Construction from a value
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be constructed from a value of type `{V}`",
    note = "implement `gimo::FromValue<{V}>` for `{Self}`"
)]
pub trait FromValue<V>: Sized {
    /// Build a value-holding instance
    fn from_value(value: V) -> Self;
}

/// Construction from an error
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be constructed from an error of type `{E}`",
    note = "implement `gimo::FromError<{E}>` for `{Self}`"
)]
pub trait FromError<E>: Sized {
    /// Build an error-holding instance
    fn from_error(error: E) -> Self;
}

/// The same container over a different value type
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot rebind its value type",
    label = "value type of `{Self}` is fixed",
    note = "implement `gimo::RebindValue` for `{Self}`"
)]
pub trait RebindValue: crate::Nullable {
    /// The container holding `V` instead
    type WithValue<V>;
}

/// The same container over a different error type
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot rebind its error type",
    label = "error type of `{Self}` is fixed",
    note = "transform_error requires an expected-like input implementing `gimo::RebindError`"
)]
pub trait RebindError: crate::ExpectedLike {
    /// The container holding `E` as error instead
    type WithError<E>;
}

/// `N` with its value type replaced by `V`
pub type RebindValueT<N, V> = <N as RebindValue>::WithValue<V>;

/// `N` with its error type replaced by `E`
pub type RebindErrorT<N, E> = <N as RebindError>::WithError<E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_is_copy_and_default() {
        let null = Null;
        let copy = null;
        assert_eq!(null, copy);
        assert_eq!(Null::default(), Null);
    }

    #[test]
    fn test_null_compares_both_ways_with_option() {
        assert!(Null == None::<i32>);
        assert!(None::<i32> == Null);
        assert!(Null != Some(1));
        assert!(Some(1) != Null);
    }

    #[test]
    fn test_null_compares_both_ways_with_result() {
        let err: std::result::Result<i32, String> = Err("bad".into());
        let ok: std::result::Result<i32, String> = Ok(3);
        assert!(err == Null);
        assert!(Null == err);
        assert!(ok != Null);
        assert!(Null != ok);
    }

    #[test]
    fn test_from_null_builds_empty_option() {
        let empty: Option<i32> = FromNull::from_null(Null);
        assert_eq!(empty, None);
    }

    #[test]
    fn test_from_null_uses_default_error_for_result() {
        let empty: std::result::Result<i32, String> = FromNull::from_null(Null);
        assert_eq!(empty, Err(String::new()));
    }

    static_assertions::assert_impl_all!(Null: NullFor<Option<i32>>, NullFor<std::result::Result<u8, ()>>);
    static_assertions::assert_not_impl_any!(Null: NullFor<i32>);
}
