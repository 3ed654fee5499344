//! Core traits for gimo
//!
//! This crate defines how a type becomes usable in a gimo pipeline:
//! - Registry: the per-type [`Traits`] registration, the [`Null`] sentinel,
//!   construction ([`FromNull`], [`FromValue`], [`FromError`]) and rebinding
//!   ([`RebindValue`], [`RebindError`])
//! - Resolver: the strategies reading value and error channels
//!   ([`Registered`], [`Intrinsic`], [`Free`], [`NoError`]) and the checked
//!   entry points ([`value`], [`error`], [`has_value`], ...)
//! - Concepts: the predicates algorithms are gated on ([`Nullable`],
//!   [`ExpectedLike`], [`RebindableValueTo`], ...)
//! - Adapters for `Option<T>` and `Result<T, E>`
//! - Precondition checks and the violation handler hook
//!
//! ```
//! use gimo_core::{error, has_value, value, ExpectedLike};
//!
//! fn describe<N: ExpectedLike>(input: N) -> String
//! where
//!     N::Value: std::fmt::Display,
//!     N::Error: std::fmt::Display,
//! {
//!     if has_value(&input) {
//!         format!("value {}", value(input))
//!     } else {
//!         format!("error {}", error(input))
//!     }
//! }
//!
//! assert_eq!(describe(Ok::<i32, String>(42)), "value 42");
//! assert_eq!(describe(Err::<i32, String>("bad".into())), "error bad");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assert;
pub mod concepts;
pub mod error;
pub mod ext;
pub mod registry;
pub mod resolver;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use assert::{set_violation_handler, violated, ViolationHandler};
pub use concepts::{
    ConstructibleFromError, ConstructibleFromValue, ErrorOf, ExpectedLike, Nullable,
    RebindableErrorTo, RebindableValueTo, ValueOf,
};
pub use error::{ContractViolation, Error, Result};
pub use registry::{
    ExplicitError, ExplicitValue, FromError, FromNull, FromValue, Null, NullFor, RebindError,
    RebindErrorT, RebindValue, RebindValueT, Traits,
};
pub use resolver::{
    construct_from_error, construct_from_value, empty, error, has_value, propagate, rebind_value,
    value, ErrorFn, ErrorStrategy, Free, Intrinsic, NoError, Propagate, Registered, ValueFn,
    ValueStrategy,
};
