//! Algorithm engine and pipeline composer for gimo
//!
//! This crate runs nullable inputs through chains of steps:
//! - Algorithm: a [`BasicAlgorithm`] binds an action to a [`Policy`]
//!   ([`Transform`], [`AndThen`], [`OrElse`], [`TransformError`]) that decides
//!   what each branch does
//! - Pipeline: an ordered, immutable list of steps built with the factories
//!   ([`transform`], [`and_then`], [`or_else`], [`transform_error`]) and
//!   concatenated with `|`
//!
//! Which step applies to which type is decided at compile time from the
//! registrations in `gimo-core`; a mismatch is a compile error naming the
//! unmet requirement.
//!
//! Each application logs a `trace!` event on `gimo::pipeline` and each
//! dispatch one on `gimo::dispatch`. With no subscriber interested at that
//! level this costs a cached callsite check per step. Enabling tracing's
//! `max_level_debug` or `release_max_level_debug` feature (or a stricter
//! level) in the final binary removes the callsites at compile time.
//!
//! ```
//! use gimo_engine::{and_then, apply, or_else, transform};
//!
//! let pipeline = and_then(|s: &str| s.parse::<i32>().ok())
//!     | transform(|v: i32| v * 2)
//!     | or_else(|| Some(-1));
//!
//! assert_eq!(apply(Some("21"), &pipeline), Some(42));
//! assert_eq!(apply(Some("x"), &pipeline), Some(-1));
//! assert_eq!(pipeline.step_count(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod pipeline;

pub use algorithm::{
    and_then, or_else, transform, transform_error, AlgorithmKind, AndThen, AndThenAction,
    ApplicableOn, BasicAlgorithm, ErrorTransformed, Mapped, MappedError, OrElse, OrElseAction,
    Policy, Step, Transform, TransformAction, TransformError, TransformErrorAction, Transformed,
};
pub use pipeline::{apply, Chain, Concat, Cons, End, Pipeline, ProcessableBy, Processes, StepList};
