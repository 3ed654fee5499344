//! gimo - monadic pipelines over nullable-like types
//!
//! A pipeline is a chain of steps ([`transform`], [`and_then`], [`or_else`],
//! [`transform_error`]) run against a value that may be absent. Any type
//! registered through [`Traits`] can be the input: `Option<T>` and
//! `Result<T, E>` out of the box, or your own containers.
//!
//! # Quick Start
//!
//! ```
//! use gimo::{and_then, apply, transform, transform_error};
//!
//! let pipeline = and_then(|s: &str| s.parse::<i32>().map_err(|e| e.to_string()))
//!     | transform(|v: i32| v + 1)
//!     | transform_error(|e: String| e.len());
//!
//! assert_eq!(apply(Ok::<_, String>("41"), &pipeline), Ok(42));
//! assert!(apply(Ok::<_, String>("x"), &pipeline).is_err());
//! ```
//!
//! # Architecture
//!
//! - `gimo-core`: the type registry, the strategies reading value and error
//!   channels, the concept predicates and the std adapters
//! - `gimo-engine`: the algorithm policies and the pipeline composer
//!
//! Everything is re-exported here; depend on the member crates directly only
//! to keep the dependency surface small.

pub use gimo_core::{
    assert, construct_from_error, construct_from_value, empty, error, has_value, propagate,
    rebind_value, set_violation_handler, value, ConstructibleFromError, ConstructibleFromValue,
    ContractViolation, Error, ErrorFn, ErrorOf, ErrorStrategy, ExpectedLike, ExplicitError,
    ExplicitValue, Free, FromError, FromNull, FromValue, Intrinsic, NoError, Null, NullFor,
    Nullable, Propagate, RebindError, RebindErrorT, RebindValue, RebindValueT, RebindableErrorTo,
    RebindableValueTo, Registered, Result, Traits, ValueFn, ValueOf, ValueStrategy,
    ViolationHandler,
};
pub use gimo_engine::{
    and_then, apply, or_else, transform, transform_error, AlgorithmKind, AndThen, AndThenAction,
    ApplicableOn, BasicAlgorithm, Chain, Concat, Cons, End, OrElse, OrElseAction, Pipeline,
    Policy, ProcessableBy, Processes, Step, StepList, Transform, TransformAction, TransformError,
    TransformErrorAction,
};
