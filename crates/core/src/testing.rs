//! Test fakes
//!
//! Registered types exercising the strategies the std adapters leave out:
//!
//! - [`ExpectedFake`]: expected-like, value through [`Registered`], error
//!   through [`Free`]
//! - [`FixedError`]: expected-like, both channels through [`Registered`],
//!   value rebindable but error type fixed
//! - [`Slot`]: plain nullable, value through [`Free`], not rebindable
//! - [`CallCounter`]: counts how often an action ran

use std::cell::Cell;
use std::rc::Rc;

use crate::assert::violated;
use crate::error::ContractViolation;
use crate::registry::{
    ExplicitError, ExplicitValue, FromError, FromNull, FromValue, Null, RebindError, RebindValue,
    Traits,
};
use crate::resolver::{ErrorFn, Free, NoError, Registered, ValueFn};

// =============================================================================
// ExpectedFake
// =============================================================================

/// Expected-like fake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedFake<V, E = String> {
    state: Result<V, E>,
}

impl<V, E> ExpectedFake<V, E> {
    /// Value-holding fake
    pub fn new(value: V) -> Self {
        Self { state: Ok(value) }
    }

    /// Error-holding fake
    pub fn from_error(error: E) -> Self {
        Self { state: Err(error) }
    }

    /// Whether a value is held
    pub fn has_value(&self) -> bool {
        self.state.is_ok()
    }

    /// The held value, if any
    pub fn value_ref(&self) -> Option<&V> {
        self.state.as_ref().ok()
    }

    /// The held error, if any
    pub fn error_ref(&self) -> Option<&E> {
        self.state.as_ref().err()
    }
}

impl<V, E> PartialEq<Null> for ExpectedFake<V, E> {
    fn eq(&self, _: &Null) -> bool {
        !self.has_value()
    }
}

impl<V, E> PartialEq<ExpectedFake<V, E>> for Null {
    fn eq(&self, other: &ExpectedFake<V, E>) -> bool {
        !other.has_value()
    }
}

impl<V, E> Traits for ExpectedFake<V, E> {
    type Null = Null;
    const NULL: Null = Null;
    type ValueAccess = Registered;
    type ErrorAccess = Free<FakeError>;
}

impl<V, E> ExplicitValue for ExpectedFake<V, E> {
    type Output = V;

    fn value(self) -> V {
        match self.state {
            Ok(value) => value,
            Err(_) => violated(ContractViolation::missing_value::<Self>()),
        }
    }
}

/// Free error accessor of [`ExpectedFake`]
#[derive(Debug)]
pub struct FakeError;

impl<V, E> ErrorFn<ExpectedFake<V, E>> for FakeError {
    type Output = E;

    fn error(source: ExpectedFake<V, E>) -> E {
        match source.state {
            Err(error) => error,
            Ok(_) => violated(ContractViolation::missing_error::<ExpectedFake<V, E>>()),
        }
    }
}

impl<V, E: Default> FromNull for ExpectedFake<V, E> {
    fn from_null(_: Null) -> Self {
        Self::from_error(E::default())
    }
}

impl<V, E> FromValue<V> for ExpectedFake<V, E> {
    fn from_value(value: V) -> Self {
        Self::new(value)
    }
}

impl<V, E> FromError<E> for ExpectedFake<V, E> {
    fn from_error(error: E) -> Self {
        Self::from_error(error)
    }
}

impl<V, E> RebindValue for ExpectedFake<V, E> {
    type WithValue<U> = ExpectedFake<U, E>;
}

impl<V, E> RebindError for ExpectedFake<V, E> {
    type WithError<F> = ExpectedFake<V, F>;
}

// =============================================================================
// FixedError
// =============================================================================

/// Expected-like fake whose error type cannot be rebound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedError<V, E = String>(Result<V, E>);

impl<V, E> FixedError<V, E> {
    /// Value-holding fake
    pub fn new(value: V) -> Self {
        FixedError(Ok(value))
    }

    /// Error-holding fake
    pub fn from_error(error: E) -> Self {
        FixedError(Err(error))
    }

    /// The held value, if any
    pub fn value_ref(&self) -> Option<&V> {
        self.0.as_ref().ok()
    }

    /// The held error, if any
    pub fn error_ref(&self) -> Option<&E> {
        self.0.as_ref().err()
    }
}

impl<V, E> PartialEq<Null> for FixedError<V, E> {
    fn eq(&self, _: &Null) -> bool {
        self.0.is_err()
    }
}

impl<V, E> PartialEq<FixedError<V, E>> for Null {
    fn eq(&self, other: &FixedError<V, E>) -> bool {
        other.0.is_err()
    }
}

impl<V, E> Traits for FixedError<V, E> {
    type Null = Null;
    const NULL: Null = Null;
    type ValueAccess = Registered;
    type ErrorAccess = Registered;
}

impl<V, E> ExplicitValue for FixedError<V, E> {
    type Output = V;

    fn value(self) -> V {
        match self.0 {
            Ok(value) => value,
            Err(_) => violated(ContractViolation::missing_value::<Self>()),
        }
    }
}

impl<V, E> ExplicitError for FixedError<V, E> {
    type Output = E;

    fn error(self) -> E {
        match self.0 {
            Err(error) => error,
            Ok(_) => violated(ContractViolation::missing_error::<Self>()),
        }
    }
}

impl<V, E> FromValue<V> for FixedError<V, E> {
    fn from_value(value: V) -> Self {
        Self::new(value)
    }
}

impl<V, E> FromError<E> for FixedError<V, E> {
    fn from_error(error: E) -> Self {
        Self::from_error(error)
    }
}

impl<V, E> RebindValue for FixedError<V, E> {
    type WithValue<U> = FixedError<U, E>;
}

// =============================================================================
// Slot
// =============================================================================

/// Plain nullable fake without rebinding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot<T>(Option<T>);

impl<T> Slot<T> {
    /// Filled slot
    pub fn new(value: T) -> Self {
        Slot(Some(value))
    }

    /// Empty slot
    pub fn empty() -> Self {
        Slot(None)
    }

    /// The held value, if any
    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

impl<T> PartialEq<Null> for Slot<T> {
    fn eq(&self, _: &Null) -> bool {
        self.0.is_none()
    }
}

impl<T> PartialEq<Slot<T>> for Null {
    fn eq(&self, other: &Slot<T>) -> bool {
        other.0.is_none()
    }
}

impl<T> Traits for Slot<T> {
    type Null = Null;
    const NULL: Null = Null;
    type ValueAccess = Free<SlotValue>;
    type ErrorAccess = NoError;
}

/// Free value accessor of [`Slot`]
#[derive(Debug)]
pub struct SlotValue;

impl<T> ValueFn<Slot<T>> for SlotValue {
    type Output = T;

    fn value(source: Slot<T>) -> T {
        match source.0 {
            Some(value) => value,
            None => violated(ContractViolation::missing_value::<Slot<T>>()),
        }
    }
}

impl<T> FromNull for Slot<T> {
    fn from_null(_: Null) -> Self {
        Slot::empty()
    }
}

impl<T> FromValue<T> for Slot<T> {
    fn from_value(value: T) -> Self {
        Slot::new(value)
    }
}

// =============================================================================
// CallCounter
// =============================================================================

/// Shared invocation counter
///
/// Clones share the count, so one clone can move into an action while the
/// test keeps another.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Rc<Cell<usize>>);

impl CallCounter {
    /// Fresh counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one invocation
    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    /// Invocations so far
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_counter_shared_between_clones() {
        let counter = CallCounter::new();
        let clone = counter.clone();
        clone.hit();
        clone.hit();
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_expected_fake_null_state() {
        assert!(ExpectedFake::<i32>::from_error("e".into()) == Null);
        assert!(ExpectedFake::<i32>::new(1) != Null);
    }

    #[test]
    fn test_fixed_error_null_state() {
        assert!(FixedError::<i32>::from_error("e".into()) == Null);
        assert!(Null != FixedError::<i32>::new(1));
    }

    #[test]
    fn test_slot_null_state() {
        assert!(Slot::<i32>::empty() == Null);
        assert!(Null != Slot::new(1));
    }
}
