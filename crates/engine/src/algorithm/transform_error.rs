//! `transform_error`: map the error, keep the value

use gimo_core::{
    error, rebind_value, ExpectedLike, FromError, FromValue, Nullable, RebindError, RebindErrorT,
};

use super::{AlgorithmKind, BasicAlgorithm, Policy};
use crate::pipeline::{Chain, Cons, End, Pipeline};

/// Policy of [`transform_error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformError;

impl AlgorithmKind for TransformError {
    const NAME: &'static str = "transform_error";
}

/// An action mapping the error of `N`
pub trait TransformErrorAction<N: ExpectedLike> {
    /// New error type
    type Output;

    /// Map the error
    fn invoke(self, error: N::Error) -> Self::Output;
}

impl<N, F, U> TransformErrorAction<N> for F
where
    N: ExpectedLike,
    F: FnOnce(N::Error) -> U,
{
    type Output = U;

    #[inline]
    fn invoke(self, error: N::Error) -> U {
        self(error)
    }
}

/// Error type produced by the action `A` on `N`
pub type MappedError<N, A> = <A as TransformErrorAction<N>>::Output;

/// Result container of the action `A` on `N`
pub type ErrorTransformed<N, A> = RebindErrorT<N, MappedError<N, A>>;

impl<N, A, Rest> Policy<N, A, Rest> for TransformError
where
    N: RebindError,
    A: TransformErrorAction<N>,
    ErrorTransformed<N, A>: FromError<MappedError<N, A>> + FromValue<N::Value> + Nullable,
    Rest: Chain<ErrorTransformed<N, A>>,
{
    type Output = <Rest as Chain<ErrorTransformed<N, A>>>::Output;

    #[inline]
    fn on_value(_action: A, input: N, rest: Rest) -> Self::Output {
        rest.run_value(rebind_value::<ErrorTransformed<N, A>, N>(input))
    }

    #[inline]
    fn on_null(action: A, input: N, rest: Rest) -> Self::Output {
        let mapped = action.invoke(error(input));
        let target = <ErrorTransformed<N, A> as FromError<MappedError<N, A>>>::from_error(mapped);
        rest.run_null(target)
    }
}

/// Map the error of an expected-like input, rebinding its error type
///
/// An input holding a value keeps it; only the error type changes and the
/// action is not called.
///
/// ```
/// use gimo_engine::transform_error;
///
/// let measure = transform_error(|e: String| e.len());
/// assert_eq!(measure.apply_ref(Err::<i32, _>("bad".to_string())), Err(3usize));
/// assert_eq!(measure.apply_ref(Ok::<i32, String>(1)), Ok::<i32, usize>(1));
/// ```
///
/// Plain nullables have no error to map:
///
/// ```compile_fail,E0277
/// use gimo_engine::transform_error;
///
/// transform_error(|e: String| e.len()).apply(Some(1));
/// ```
///
/// The error type must be rebindable:
///
/// ```compile_fail,E0277
/// use gimo_core::testing::FixedError;
/// use gimo_engine::transform_error;
///
/// transform_error(|e: String| e.len()).apply(FixedError::<i32>::from_error("bad".into()));
/// ```
///
/// and the action must accept the error:
///
/// ```compile_fail
/// use gimo_engine::transform_error;
///
/// transform_error(|e: i32| e + 1).apply(Err::<u8, String>("bad".into()));
/// ```
pub fn transform_error<A>(action: A) -> Pipeline<Cons<BasicAlgorithm<TransformError, A>, End>> {
    Pipeline::from_step(BasicAlgorithm::new(action))
}
