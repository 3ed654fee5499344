//! `and_then`: continue with a nullable computed from the value

use gimo_core::{propagate, value, Nullable, Propagate};

use super::{AlgorithmKind, BasicAlgorithm, Policy};
use crate::pipeline::{Chain, Cons, End, Pipeline};

/// Policy of [`and_then`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AndThen;

impl AlgorithmKind for AndThen {
    const NAME: &'static str = "and_then";
}

/// An action turning the value of `N` into another nullable
///
/// Any `FnOnce(N::Value) -> M` qualifies; the policy requires `M: Nullable`.
pub trait AndThenAction<N: Nullable> {
    /// Returned nullable
    type Output;

    /// Compute the next nullable
    fn invoke(self, value: N::Value) -> Self::Output;
}

impl<N, F, M> AndThenAction<N> for F
where
    N: Nullable,
    F: FnOnce(N::Value) -> M,
{
    type Output = M;

    #[inline]
    fn invoke(self, value: N::Value) -> M {
        self(value)
    }
}

impl<N, A, Rest> Policy<N, A, Rest> for AndThen
where
    N: Nullable,
    A: AndThenAction<N>,
    A::Output: Nullable,
    N::ErrorAccess: Propagate<N, A::Output>,
    Rest: Chain<A::Output>,
{
    type Output = <Rest as Chain<A::Output>>::Output;

    #[inline]
    fn on_value(action: A, input: N, rest: Rest) -> Self::Output {
        // The returned nullable may itself be null
        rest.run(action.invoke(value(input)))
    }

    #[inline]
    fn on_null(_action: A, input: N, rest: Rest) -> Self::Output {
        rest.run_null(propagate::<N, A::Output>(input))
    }
}

/// Continue with the nullable the action returns for the value
///
/// The returned nullable is the result; it is not wrapped again. A null input
/// becomes the null state of the action's return type and the action is not
/// called.
///
/// ```
/// use gimo_engine::and_then;
///
/// let parse = and_then(|s: &str| s.parse::<u8>().ok());
/// assert_eq!(parse.apply_ref(Some("42")), Some(42));
/// assert_eq!(parse.apply_ref(Some("x")), None);
/// assert_eq!(parse.apply_ref(None::<&str>), None);
/// ```
///
/// The action must return a registered nullable:
///
/// ```compile_fail,E0277
/// use gimo_engine::and_then;
///
/// and_then(|v: i32| v + 1).apply(Some(1));
/// ```
pub fn and_then<A>(action: A) -> Pipeline<Cons<BasicAlgorithm<AndThen, A>, End>> {
    Pipeline::from_step(BasicAlgorithm::new(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gimo_core::testing::{CallCounter, ExpectedFake};

    fn half(v: i32) -> Option<i32> {
        (v % 2 == 0).then_some(v / 2)
    }

    #[test]
    fn test_and_then_value() {
        assert_eq!(and_then(half).apply(Some(8)), Some(4));
    }

    #[test]
    fn test_and_then_action_returns_null() {
        assert_eq!(and_then(half).apply(Some(3)), None);
    }

    #[test]
    fn test_and_then_null_skips_action() {
        let counter = CallCounter::new();
        let hits = counter.clone();
        let out = and_then(move |v: i32| {
            hits.hit();
            Some(v.to_string())
        })
        .apply(None::<i32>);
        assert_eq!(out, None::<String>);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_and_then_carries_error_into_return_type() {
        let input: Result<i32, String> = Err("bad".into());
        let out = and_then(|v: i32| Ok::<f32, String>(v as f32)).apply(input);
        assert_eq!(out, Err("bad".to_string()));
    }

    #[test]
    fn test_and_then_changes_container() {
        let input: Result<i32, String> = Ok(3);
        let out = and_then(|v: i32| ExpectedFake::<i32>::new(v * 3)).apply(input);
        assert_eq!(out.value_ref(), Some(&9));
    }

    #[test]
    fn test_and_then_chain_short_circuits() {
        let counter = CallCounter::new();
        let hits = counter.clone();
        let pipeline = and_then(|_: i32| None::<i32>)
            | and_then(move |v: i32| {
                hits.hit();
                Some(v)
            });
        assert_eq!(pipeline.apply(Some(1)), None);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_and_then_mutable_action() {
        let mut total = 0;
        let mut accumulate = and_then(|v: i32| {
            total += v;
            Some(total)
        });
        assert_eq!(accumulate.apply_mut(Some(2)), Some(2));
        assert_eq!(accumulate.apply_mut(Some(5)), Some(7));
        assert_eq!(accumulate.apply_mut(None::<i32>), None);
    }
}
