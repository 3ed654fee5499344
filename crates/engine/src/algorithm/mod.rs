//! Algorithm engine
//!
//! A step of a pipeline is a [`BasicAlgorithm`]: an action paired with a
//! [`Policy`] deciding what happens on each branch. Dispatch compares the
//! input against its null sentinel and hands the action, the input and the
//! remaining steps to `Policy::on_value` or `Policy::on_null`.
//!
//! | Policy | On value | On null |
//! |---|---|---|
//! | [`Transform`] | map the value, rebind the value type | carry the null state into the rebound type |
//! | [`AndThen`] | the action's nullable is the result | carry the null state into the action's return type |
//! | [`OrElse`] | pass the input on, action not called | the action's result replaces the input |
//! | [`TransformError`] | rebind the error type, action not called | map the error |
//!
//! A policy that does not apply to an input fails to compile. An action with
//! the wrong arity or argument type is reported by rustc as a closure
//! mismatch; a missing capability of the input or of the action's result is
//! reported with the message of the `gimo-core` registry trait it lacks.

mod and_then;
mod or_else;
mod transform;
mod transform_error;

use std::fmt;
use std::marker::PhantomData;

use gimo_core::{has_value, precondition, ContractViolation, Nullable};
use tracing::trace;

use crate::pipeline::End;

pub use and_then::{and_then, AndThen, AndThenAction};
pub use or_else::{or_else, OrElse, OrElseAction};
pub use transform::{transform, Mapped, Transform, TransformAction, Transformed};
pub use transform_error::{
    transform_error, ErrorTransformed, MappedError, TransformError, TransformErrorAction,
};

/// Name of a policy, as it appears in logs
pub trait AlgorithmKind {
    /// Short name, e.g. `"transform"`
    const NAME: &'static str;
}

/// Branch behavior of an algorithm
///
/// `A` is the action in the form the step hands it over: owned, `&A` or
/// `&mut A`. `Rest` is the list of steps still to run.
pub trait Policy<N, A, Rest>: AlgorithmKind {
    /// Result of this step and every step after it
    type Output;

    /// Handle an input holding a value
    fn on_value(action: A, input: N, rest: Rest) -> Self::Output;

    /// Handle a null input
    fn on_null(action: A, input: N, rest: Rest) -> Self::Output;
}

/// An action bound to a policy
pub struct BasicAlgorithm<P, A> {
    action: A,
    policy: PhantomData<fn() -> P>,
}

impl<P, A> BasicAlgorithm<P, A> {
    /// Bind `action` to the policy `P`
    pub const fn new(action: A) -> Self {
        Self {
            action,
            policy: PhantomData,
        }
    }

    /// The bound action
    pub fn action(&self) -> &A {
        &self.action
    }
}

impl<P, A: Clone> Clone for BasicAlgorithm<P, A> {
    fn clone(&self) -> Self {
        Self::new(self.action.clone())
    }
}

impl<P, A: Copy> Copy for BasicAlgorithm<P, A> {}

impl<P: AlgorithmKind, A> fmt::Debug for BasicAlgorithm<P, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAlgorithm")
            .field("policy", &P::NAME)
            .finish_non_exhaustive()
    }
}

/// One step of a pipeline, run on `N` and followed by `Rest`
#[diagnostic::on_unimplemented(
    message = "this step cannot be applied on `{N}`",
    note = "check that the action accepts the value (or error) of `{N}` and that its result fits the next step"
)]
pub trait Step<N, Rest> {
    /// Result of this step and every step after it
    type Output;

    /// Test whether `input` holds a value and run the matching branch
    fn call(self, input: N, rest: Rest) -> Self::Output;

    /// Run the value branch; `input` must hold a value
    fn on_value(self, input: N, rest: Rest) -> Self::Output;

    /// Run the null branch; `input` must be null
    fn on_null(self, input: N, rest: Rest) -> Self::Output;
}

impl<P, A, N, Rest> Step<N, Rest> for BasicAlgorithm<P, A>
where
    N: Nullable,
    P: Policy<N, A, Rest>,
{
    type Output = <P as Policy<N, A, Rest>>::Output;

    #[inline]
    fn call(self, input: N, rest: Rest) -> Self::Output {
        dispatch::<P, N, A, Rest>(self.action, input, rest)
    }

    #[inline]
    fn on_value(self, input: N, rest: Rest) -> Self::Output {
        resume_value::<P, N, A, Rest>(self.action, input, rest)
    }

    #[inline]
    fn on_null(self, input: N, rest: Rest) -> Self::Output {
        resume_null::<P, N, A, Rest>(self.action, input, rest)
    }
}

impl<'a, P, A, N, Rest> Step<N, Rest> for &'a BasicAlgorithm<P, A>
where
    N: Nullable,
    P: Policy<N, &'a A, Rest>,
{
    type Output = <P as Policy<N, &'a A, Rest>>::Output;

    #[inline]
    fn call(self, input: N, rest: Rest) -> Self::Output {
        dispatch::<P, N, &'a A, Rest>(&self.action, input, rest)
    }

    #[inline]
    fn on_value(self, input: N, rest: Rest) -> Self::Output {
        resume_value::<P, N, &'a A, Rest>(&self.action, input, rest)
    }

    #[inline]
    fn on_null(self, input: N, rest: Rest) -> Self::Output {
        resume_null::<P, N, &'a A, Rest>(&self.action, input, rest)
    }
}

impl<'a, P, A, N, Rest> Step<N, Rest> for &'a mut BasicAlgorithm<P, A>
where
    N: Nullable,
    P: Policy<N, &'a mut A, Rest>,
{
    type Output = <P as Policy<N, &'a mut A, Rest>>::Output;

    #[inline]
    fn call(self, input: N, rest: Rest) -> Self::Output {
        dispatch::<P, N, &'a mut A, Rest>(&mut self.action, input, rest)
    }

    #[inline]
    fn on_value(self, input: N, rest: Rest) -> Self::Output {
        resume_value::<P, N, &'a mut A, Rest>(&mut self.action, input, rest)
    }

    #[inline]
    fn on_null(self, input: N, rest: Rest) -> Self::Output {
        resume_null::<P, N, &'a mut A, Rest>(&mut self.action, input, rest)
    }
}

#[inline]
fn dispatch<P, N, A, Rest>(action: A, input: N, rest: Rest) -> <P as Policy<N, A, Rest>>::Output
where
    N: Nullable,
    P: Policy<N, A, Rest>,
{
    let present = has_value(&input);
    trace!(target: "gimo::dispatch", algorithm = P::NAME, has_value = present, "Dispatching step");
    if present {
        P::on_value(action, input, rest)
    } else {
        P::on_null(action, input, rest)
    }
}

#[inline]
#[track_caller]
fn resume_value<P, N, A, Rest>(action: A, input: N, rest: Rest) -> <P as Policy<N, A, Rest>>::Output
where
    N: Nullable,
    P: Policy<N, A, Rest>,
{
    precondition!(has_value(&input), ContractViolation::missing_value::<N>());
    P::on_value(action, input, rest)
}

#[inline]
#[track_caller]
fn resume_null<P, N, A, Rest>(action: A, input: N, rest: Rest) -> <P as Policy<N, A, Rest>>::Output
where
    N: Nullable,
    P: Policy<N, A, Rest>,
{
    precondition!(!has_value(&input), ContractViolation::unexpected_value::<N>());
    P::on_null(action, input, rest)
}

/// `Alg` can be applied on `Self` as the last step of a pipeline
pub trait ApplicableOn<Alg>: Nullable {}

impl<N, Alg> ApplicableOn<Alg> for N
where
    N: Nullable,
    Alg: Step<N, End>,
{
}
