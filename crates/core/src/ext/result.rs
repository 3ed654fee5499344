//! `Result<T, E>` adapter
//!
//! `Err` is the null state. The value is read through `IntoIterator`, the
//! error through the registered entry below. An empty `Result` can only be
//! built when `E: Default`.

use crate::assert::violated;
use crate::error::ContractViolation;
use crate::registry::{
    ExplicitError, FromError, FromNull, FromValue, Null, RebindError, RebindValue, Traits,
};
use crate::resolver::{Intrinsic, Registered};

impl<T, E> PartialEq<Null> for Result<T, E> {
    #[inline]
    fn eq(&self, _: &Null) -> bool {
        self.is_err()
    }
}

impl<T, E> PartialEq<Result<T, E>> for Null {
    #[inline]
    fn eq(&self, other: &Result<T, E>) -> bool {
        other.is_err()
    }
}

impl<T, E> Traits for Result<T, E> {
    type Null = Null;
    const NULL: Null = Null;
    type ValueAccess = Intrinsic;
    type ErrorAccess = Registered;
}

impl<T, E> ExplicitError for Result<T, E> {
    type Output = E;

    #[inline]
    fn error(self) -> E {
        match self {
            Err(error) => error,
            Ok(_) => violated(ContractViolation::missing_error::<Self>()),
        }
    }
}

impl<T, E: Default> FromNull for Result<T, E> {
    #[inline]
    fn from_null(_: Null) -> Self {
        Err(E::default())
    }
}

impl<T, E> FromValue<T> for Result<T, E> {
    #[inline]
    fn from_value(value: T) -> Self {
        Ok(value)
    }
}

impl<T, E> FromError<E> for Result<T, E> {
    #[inline]
    fn from_error(error: E) -> Self {
        Err(error)
    }
}

impl<T, E> RebindValue for Result<T, E> {
    type WithValue<V> = Result<V, E>;
}

impl<T, E> RebindError for Result<T, E> {
    type WithError<F> = Result<T, F>;
}
