//! `transform`: map the value, keep the null state

use gimo_core::{propagate, value, FromValue, Nullable, Propagate, RebindValue, RebindValueT};

use super::{AlgorithmKind, BasicAlgorithm, Policy};
use crate::pipeline::{Chain, Cons, End, Pipeline};

/// Policy of [`transform`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transform;

impl AlgorithmKind for Transform {
    const NAME: &'static str = "transform";
}

/// An action mapping the value of `N`
pub trait TransformAction<N: Nullable> {
    /// New value type
    type Output;

    /// Map the value
    fn invoke(self, value: N::Value) -> Self::Output;
}

impl<N, F, U> TransformAction<N> for F
where
    N: Nullable,
    F: FnOnce(N::Value) -> U,
{
    type Output = U;

    #[inline]
    fn invoke(self, value: N::Value) -> U {
        self(value)
    }
}

/// Value type produced by the action `A` on `N`
pub type Mapped<N, A> = <A as TransformAction<N>>::Output;

/// Result container of the action `A` on `N`
pub type Transformed<N, A> = RebindValueT<N, Mapped<N, A>>;

impl<N, A, Rest> Policy<N, A, Rest> for Transform
where
    N: RebindValue,
    A: TransformAction<N>,
    Transformed<N, A>: FromValue<Mapped<N, A>> + Nullable,
    N::ErrorAccess: Propagate<N, Transformed<N, A>>,
    Rest: Chain<Transformed<N, A>>,
{
    type Output = <Rest as Chain<Transformed<N, A>>>::Output;

    #[inline]
    fn on_value(action: A, input: N, rest: Rest) -> Self::Output {
        let mapped = action.invoke(value(input));
        rest.run_value(<Transformed<N, A> as FromValue<Mapped<N, A>>>::from_value(mapped))
    }

    #[inline]
    fn on_null(_action: A, input: N, rest: Rest) -> Self::Output {
        rest.run_null(propagate::<N, Transformed<N, A>>(input))
    }
}

/// Map the value of the input, rebinding its value type
///
/// A null input stays null: plain nullables become the empty instance of the
/// rebound type, expected-likes keep their error. The action is only called
/// when a value is held.
///
/// ```
/// use gimo_engine::transform;
///
/// let to_float = transform(|v: i32| v as f32 + 0.5);
/// assert_eq!(to_float.apply_ref(Some(1)), Some(1.5));
/// assert_eq!(to_float.apply_ref(None::<i32>), None::<f32>);
///
/// let err: Result<i32, String> = Err("bad".into());
/// assert_eq!(to_float.apply(err), Err::<f32, _>("bad".to_string()));
/// ```
///
/// The rebound container must exist:
///
/// ```compile_fail,E0277
/// use gimo_core::testing::Slot;
/// use gimo_engine::transform;
///
/// transform(|v: i32| v + 1).apply(Slot::new(1));
/// ```
///
/// and the action must accept the value:
///
/// ```compile_fail
/// use gimo_engine::transform;
///
/// transform(|v: String| v.len()).apply(Some(1));
/// ```
pub fn transform<A>(action: A) -> Pipeline<Cons<BasicAlgorithm<Transform, A>, End>> {
    Pipeline::from_step(BasicAlgorithm::new(action))
}
