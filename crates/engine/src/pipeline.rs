//! Pipeline composer
//!
//! A [`Pipeline`] is an ordered, immutable sequence of algorithm steps stored
//! as a type-level list (`Cons<Step1, Cons<Step2, End>>`). Applying it hands
//! the input to the first step together with the remaining steps; every step
//! decides its own branch and passes its result on.
//!
//! ## Composition
//!
//! Pipelines concatenate with [`Pipeline::append`] or `|`. Prefix steps run
//! before suffix steps; neither source is changed.
//!
//! ## Applying
//!
//! | Call | Steps receive their action as |
//! |---|---|
//! | `pipeline.apply(x)` / `apply(x, pipeline)` | owned (`FnOnce`) |
//! | `pipeline.apply_ref(x)` / `apply(x, &pipeline)` | `&A` (`Fn`) |
//! | `pipeline.apply_mut(x)` / `apply(x, &mut pipeline)` | `&mut A` (`FnMut`) |

use std::any::type_name;
use std::ops::BitOr;

use gimo_core::Nullable;
use tracing::trace;

use crate::algorithm::Step;

/// End of a step list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct End;

/// A step followed by the rest of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cons<H, T>(pub(crate) H, pub(crate) T);

/// Type-level step list
pub trait StepList {
    /// Number of steps
    const LEN: usize;
}

impl StepList for End {
    const LEN: usize = 0;
}

impl<H, T: StepList> StepList for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

/// Execution of the remaining steps on `N`
///
/// `run` tests whether the input holds a value before dispatching; `run_value`
/// and `run_null` resume a branch the previous step already established.
#[diagnostic::on_unimplemented(
    message = "the remaining steps `{Self}` cannot process `{N}`",
    note = "each step must be applicable on the output of its predecessor"
)]
pub trait Chain<N> {
    /// Result of the whole chain
    type Output;

    /// Dispatch on the state of `input`
    fn run(self, input: N) -> Self::Output;

    /// Continue with an input known to hold a value
    fn run_value(self, input: N) -> Self::Output;

    /// Continue with an input known to be null
    fn run_null(self, input: N) -> Self::Output;
}

impl<N: Nullable> Chain<N> for End {
    type Output = N;

    #[inline]
    fn run(self, input: N) -> N {
        input
    }

    #[inline]
    fn run_value(self, input: N) -> N {
        input
    }

    #[inline]
    fn run_null(self, input: N) -> N {
        input
    }
}

impl<'a, N: Nullable> Chain<N> for &'a End {
    type Output = N;

    #[inline]
    fn run(self, input: N) -> N {
        input
    }

    #[inline]
    fn run_value(self, input: N) -> N {
        input
    }

    #[inline]
    fn run_null(self, input: N) -> N {
        input
    }
}

impl<'a, N: Nullable> Chain<N> for &'a mut End {
    type Output = N;

    #[inline]
    fn run(self, input: N) -> N {
        input
    }

    #[inline]
    fn run_value(self, input: N) -> N {
        input
    }

    #[inline]
    fn run_null(self, input: N) -> N {
        input
    }
}

impl<N, H, T> Chain<N> for Cons<H, T>
where
    N: Nullable,
    H: Step<N, T>,
{
    type Output = <H as Step<N, T>>::Output;

    #[inline]
    fn run(self, input: N) -> Self::Output {
        let Cons(head, tail) = self;
        head.call(input, tail)
    }

    #[inline]
    fn run_value(self, input: N) -> Self::Output {
        let Cons(head, tail) = self;
        head.on_value(input, tail)
    }

    #[inline]
    fn run_null(self, input: N) -> Self::Output {
        let Cons(head, tail) = self;
        head.on_null(input, tail)
    }
}

impl<'a, N, H, T> Chain<N> for &'a Cons<H, T>
where
    N: Nullable,
    &'a H: Step<N, &'a T>,
{
    type Output = <&'a H as Step<N, &'a T>>::Output;

    #[inline]
    fn run(self, input: N) -> Self::Output {
        let Cons(head, tail) = self;
        head.call(input, tail)
    }

    #[inline]
    fn run_value(self, input: N) -> Self::Output {
        let Cons(head, tail) = self;
        head.on_value(input, tail)
    }

    #[inline]
    fn run_null(self, input: N) -> Self::Output {
        let Cons(head, tail) = self;
        head.on_null(input, tail)
    }
}

impl<'a, N, H, T> Chain<N> for &'a mut Cons<H, T>
where
    N: Nullable,
    &'a mut H: Step<N, &'a mut T>,
{
    type Output = <&'a mut H as Step<N, &'a mut T>>::Output;

    #[inline]
    fn run(self, input: N) -> Self::Output {
        let Cons(head, tail) = self;
        head.call(input, tail)
    }

    #[inline]
    fn run_value(self, input: N) -> Self::Output {
        let Cons(head, tail) = self;
        head.on_value(input, tail)
    }

    #[inline]
    fn run_null(self, input: N) -> Self::Output {
        let Cons(head, tail) = self;
        head.on_null(input, tail)
    }
}

/// Type-level concatenation of step lists
pub trait Concat<Rhs> {
    /// `Self` followed by `Rhs`
    type Output;

    /// Concatenate, keeping relative order
    fn concat(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs> Concat<Rhs> for End {
    type Output = Rhs;

    #[inline]
    fn concat(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<H, T, Rhs> Concat<Rhs> for Cons<H, T>
where
    T: Concat<Rhs>,
{
    type Output = Cons<H, <T as Concat<Rhs>>::Output>;

    #[inline]
    fn concat(self, rhs: Rhs) -> Self::Output {
        let Cons(head, tail) = self;
        Cons(head, tail.concat(rhs))
    }
}

/// An ordered sequence of algorithm steps
///
/// Created by the algorithm factories ([`transform`](crate::transform),
/// [`and_then`](crate::and_then), [`or_else`](crate::or_else),
/// [`transform_error`](crate::transform_error)) and by concatenation.
#[derive(Debug, Clone, Copy)]
#[must_use = "a pipeline does nothing until it is applied"]
pub struct Pipeline<S> {
    steps: S,
}

impl<H> Pipeline<Cons<H, End>> {
    /// Single-step pipeline
    pub(crate) const fn from_step(step: H) -> Self {
        Pipeline {
            steps: Cons(step, End),
        }
    }
}

impl<S: StepList> Pipeline<S> {
    /// Number of steps
    pub const fn step_count(&self) -> usize {
        S::LEN
    }
}

impl<S> Pipeline<S> {
    /// Run `input` through all steps, consuming the pipeline
    pub fn apply<N>(self, input: N) -> <S as Chain<N>>::Output
    where
        N: Nullable,
        S: Chain<N> + StepList,
    {
        trace!(
            target: "gimo::pipeline",
            steps = S::LEN,
            input = type_name::<N>(),
            "Applying pipeline"
        );
        self.steps.run(input)
    }

    /// Run `input` through all steps, sharing the actions
    pub fn apply_ref<'a, N>(&'a self, input: N) -> <&'a S as Chain<N>>::Output
    where
        N: Nullable,
        S: StepList,
        &'a S: Chain<N>,
    {
        trace!(
            target: "gimo::pipeline",
            steps = S::LEN,
            input = type_name::<N>(),
            "Applying pipeline by reference"
        );
        (&self.steps).run(input)
    }

    /// Run `input` through all steps, borrowing the actions mutably
    pub fn apply_mut<'a, N>(&'a mut self, input: N) -> <&'a mut S as Chain<N>>::Output
    where
        N: Nullable,
        S: StepList,
        &'a mut S: Chain<N>,
    {
        trace!(
            target: "gimo::pipeline",
            steps = S::LEN,
            input = type_name::<N>(),
            "Applying pipeline by mutable reference"
        );
        (&mut self.steps).run(input)
    }

    /// Append the steps of `suffix` after the steps of `self`
    pub fn append<T>(self, suffix: Pipeline<T>) -> Pipeline<<S as Concat<T>>::Output>
    where
        S: Concat<T>,
    {
        Pipeline {
            steps: self.steps.concat(suffix.steps),
        }
    }
}

impl<S, T> BitOr<Pipeline<T>> for Pipeline<S>
where
    S: Concat<T>,
{
    type Output = Pipeline<<S as Concat<T>>::Output>;

    /// `prefix | suffix` is `prefix.append(suffix)`
    #[inline]
    fn bitor(self, suffix: Pipeline<T>) -> Self::Output {
        self.append(suffix)
    }
}

/// A pipeline, by value or borrowed, that can process `N`
#[diagnostic::on_unimplemented(
    message = "`{N}` cannot be processed by `{Self}`",
    note = "every step must be applicable on the output of its predecessor"
)]
pub trait Processes<N> {
    /// Result of the run
    type Output;

    /// Run `input` through all steps
    fn process(self, input: N) -> Self::Output;
}

impl<N, S> Processes<N> for Pipeline<S>
where
    N: Nullable,
    S: Chain<N> + StepList,
{
    type Output = <S as Chain<N>>::Output;

    #[inline]
    fn process(self, input: N) -> Self::Output {
        self.apply(input)
    }
}

impl<'a, N, S> Processes<N> for &'a Pipeline<S>
where
    N: Nullable,
    S: StepList,
    &'a S: Chain<N>,
{
    type Output = <&'a S as Chain<N>>::Output;

    #[inline]
    fn process(self, input: N) -> Self::Output {
        self.apply_ref(input)
    }
}

impl<'a, N, S> Processes<N> for &'a mut Pipeline<S>
where
    N: Nullable,
    S: StepList,
    &'a mut S: Chain<N>,
{
    type Output = <&'a mut S as Chain<N>>::Output;

    #[inline]
    fn process(self, input: N) -> Self::Output {
        self.apply_mut(input)
    }
}

/// `N` can be threaded through every step of `P`
///
/// `P` is a pipeline, by value or borrowed.
pub trait ProcessableBy<P>: Nullable {}

impl<N, P> ProcessableBy<P> for N
where
    N: Nullable,
    P: Processes<N>,
{
}

/// Run `input` through `pipeline`
///
/// ```
/// use gimo_engine::{apply, transform};
///
/// let pipeline = transform(|v: i32| v + 1);
/// assert_eq!(apply(Some(42), &pipeline), Some(43));
/// assert_eq!(apply(None::<i32>, pipeline), None);
/// ```
#[inline]
pub fn apply<N, P>(input: N, pipeline: P) -> P::Output
where
    P: Processes<N>,
{
    pipeline.process(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{and_then, or_else, transform, transform_error, BasicAlgorithm, Transform};
    use gimo_core::testing::CallCounter;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    type Inc = fn(i32) -> i32;
    type ToText = fn(i32) -> String;
    type IncStep = Cons<BasicAlgorithm<Transform, Inc>, End>;
    type TextThenInc = Cons<BasicAlgorithm<Transform, ToText>, IncStep>;

    assert_impl_all!(Option<i32>: ProcessableBy<Pipeline<IncStep>>);
    assert_impl_all!(Option<i32>: ProcessableBy<Pipeline<End>>);
    assert_impl_all!(Result<i32, String>: ProcessableBy<Pipeline<IncStep>>);
    // The second step receives `Option<String>`
    assert_not_impl_any!(Option<i32>: ProcessableBy<Pipeline<TextThenInc>>);
    assert_not_impl_any!(i32: ProcessableBy<Pipeline<End>>);
    assert_not_impl_any!(Pipeline<IncStep>: PartialEq);

    #[test]
    fn test_step_count() {
        let single = transform(|v: i32| v);
        assert_eq!(single.step_count(), 1);

        let triple = transform(|v: i32| v) | and_then(|v: i32| Some(v)) | or_else(|| Some(0));
        assert_eq!(triple.step_count(), 3);
        assert_eq!(<End as StepList>::LEN, 0);
    }

    #[test]
    fn test_append_keeps_order() {
        let prefix = transform(|v: i32| v + 1);
        let suffix = transform(|v: i32| v * 10);
        assert_eq!(prefix.append(suffix).apply(Some(1)), Some(20));
    }

    #[test]
    fn test_operator_matches_append() {
        let left = (transform(|v: i32| v + 1) | transform(|v: i32| v * 10)).apply(Some(4));
        let right = transform(|v: i32| v + 1)
            .append(transform(|v: i32| v * 10))
            .apply(Some(4));
        assert_eq!(left, right);
    }

    #[test]
    fn test_concat_is_associative() {
        let a = || transform(|v: i32| v + 1);
        let b = || transform(|v: i32| v * 3);
        let c = || transform(|v: i32| v - 2);
        assert_eq!(((a() | b()) | c()).apply(Some(1)), (a() | (b() | c())).apply(Some(1)));
    }

    #[test]
    fn test_free_apply_accepts_all_forms() {
        let mut pipeline = transform(|v: i32| v + 1);
        assert_eq!(apply(Some(1), &pipeline), Some(2));
        assert_eq!(apply(Some(2), &mut pipeline), Some(3));
        assert_eq!(apply(Some(3), pipeline), Some(4));
    }

    #[test]
    fn test_null_skips_remaining_actions() {
        let counter = CallCounter::new();
        let (first, second) = (counter.clone(), counter.clone());
        let pipeline = transform(move |v: i32| {
            first.hit();
            v
        }) | transform(move |v: i32| {
            second.hit();
            v
        });
        assert_eq!(pipeline.apply(None::<i32>), None);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_mixed_channels() {
        let pipeline = transform(|v: i32| v * 2)
            | transform_error(|e: String| e.len())
            | or_else(|| Ok::<i32, usize>(0));
        assert_eq!(pipeline.apply_ref(Ok::<i32, String>(21)), Ok(42));
        assert_eq!(pipeline.apply_ref(Err::<i32, String>("bad".into())), Ok(0));
    }

    #[test]
    fn test_empty_list_passes_input_through() {
        let steps = End;
        assert_eq!(steps.run(Some(1)), Some(1));
        assert_eq!(End.concat(Cons(1, End)), Cons(1, End));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn concatenated_transforms_compose(input in proptest::option::of(any::<i32>())) {
                let pipeline = transform(|v: i32| i64::from(v) * 2) | transform(|v: i64| v - 1);
                prop_assert_eq!(pipeline.apply_ref(input), input.map(|v| i64::from(v) * 2 - 1));
            }

            #[test]
            fn recovery_result_reaches_later_steps(fallback in any::<i32>()) {
                let pipeline = or_else(move || Some(fallback)) | transform(|v: i32| v.wrapping_neg());
                prop_assert_eq!(pipeline.apply(None::<i32>), Some(fallback.wrapping_neg()));
            }
        }
    }
}
