//! `Option<T>` adapter

use crate::registry::{FromNull, FromValue, Null, RebindValue, Traits};
use crate::resolver::{Intrinsic, NoError};

impl<T> PartialEq<Null> for Option<T> {
    #[inline]
    fn eq(&self, _: &Null) -> bool {
        self.is_none()
    }
}

impl<T> PartialEq<Option<T>> for Null {
    #[inline]
    fn eq(&self, other: &Option<T>) -> bool {
        other.is_none()
    }
}

impl<T> Traits for Option<T> {
    type Null = Null;
    const NULL: Null = Null;
    type ValueAccess = Intrinsic;
    type ErrorAccess = NoError;
}

impl<T> FromNull for Option<T> {
    #[inline]
    fn from_null(_: Null) -> Self {
        None
    }
}

impl<T> FromValue<T> for Option<T> {
    #[inline]
    fn from_value(value: T) -> Self {
        Some(value)
    }
}

impl<T> RebindValue for Option<T> {
    type WithValue<V> = Option<V>;
}
