//! `or_else`: recover a null input

use gimo_core::Nullable;

use super::{AlgorithmKind, BasicAlgorithm, Policy};
use crate::pipeline::{Chain, Cons, End, Pipeline};

/// Policy of [`or_else`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrElse;

impl AlgorithmKind for OrElse {
    const NAME: &'static str = "or_else";
}

/// A nullary action producing a replacement for a null `N`
pub trait OrElseAction<N> {
    /// Produce the replacement
    fn invoke(self) -> N;
}

impl<N, F> OrElseAction<N> for F
where
    F: FnOnce() -> N,
{
    #[inline]
    fn invoke(self) -> N {
        self()
    }
}

impl<N, A, Rest> Policy<N, A, Rest> for OrElse
where
    N: Nullable,
    A: OrElseAction<N>,
    Rest: Chain<N>,
{
    type Output = <Rest as Chain<N>>::Output;

    #[inline]
    fn on_value(_action: A, input: N, rest: Rest) -> Self::Output {
        rest.run_value(input)
    }

    #[inline]
    fn on_null(action: A, _input: N, rest: Rest) -> Self::Output {
        // The replacement may be null again
        rest.run(action.invoke())
    }
}

/// Replace a null input with the action's result
///
/// An input holding a value passes through unchanged and the action is not
/// called. The action returns the input's own type.
///
/// ```
/// use gimo_engine::or_else;
///
/// let fallback = or_else(|| Some(0));
/// assert_eq!(fallback.apply_ref(Some(5)), Some(5));
/// assert_eq!(fallback.apply_ref(None::<i32>), Some(0));
///
/// let retry = or_else(|| Ok::<i32, String>(1));
/// assert_eq!(retry.apply(Err::<i32, String>("bad".to_string())), Ok(1));
/// ```
///
/// The replacement must have the input's type:
///
/// ```compile_fail
/// use gimo_engine::or_else;
///
/// or_else(|| Some(0.5f32)).apply(Some(1));
/// ```
pub fn or_else<A>(action: A) -> Pipeline<Cons<BasicAlgorithm<OrElse, A>, End>> {
    Pipeline::from_step(BasicAlgorithm::new(action))
}
