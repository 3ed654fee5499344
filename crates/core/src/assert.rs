//! Precondition checks and the violation handler hook
//!
//! Reading a channel that is not populated (the value of a null instance, the
//! error of a value-holding one) is a logic error in the caller's composition
//! or in a registration that misreports its null state. It is caught here,
//! never turned into a recoverable error.
//!
//! ## Configuration
//!
//! - Cargo feature `relaxed-preconditions`: checks only run in builds with
//!   `debug_assertions`. Reads that cannot produce a value still fail.
//! - [`set_violation_handler`]: a process-wide hook that runs before the panic,
//!   e.g. to flush logs or abort instead of unwinding.
//!
//! ```
//! use gimo_core::assert::set_violation_handler;
//! use gimo_core::ContractViolation;
//!
//! fn report(violation: &ContractViolation) {
//!     eprintln!("gimo: {violation}");
//! }
//!
//! set_violation_handler(report).unwrap();
//! ```

use once_cell::sync::OnceCell;
use tracing::{error, info};

use crate::error::{ContractViolation, Error, Result};

/// Whether preconditions are checked in this build
pub const CHECKS_ENABLED: bool = cfg!(any(debug_assertions, not(feature = "relaxed-preconditions")));

/// Function signature for a violation handler
///
/// Runs once per violation, before the panic. Returning from the handler
/// does not resume the failed operation.
pub type ViolationHandler = fn(&ContractViolation);

static VIOLATION_HANDLER: OnceCell<ViolationHandler> = OnceCell::new();

/// Install the process-wide violation handler
///
/// # Errors
///
/// Returns [`Error::HandlerAlreadyInstalled`] if a handler was installed
/// before; the first handler stays in place.
pub fn set_violation_handler(handler: ViolationHandler) -> Result<()> {
    VIOLATION_HANDLER
        .set(handler)
        .map_err(|_| Error::HandlerAlreadyInstalled)?;
    info!(target: "gimo::contract", "Installed contract violation handler");
    Ok(())
}

/// Report a broken precondition and abort the current operation
///
/// Logs the violation, runs the installed handler (if any) and panics with
/// the violation's message.
#[cold]
#[track_caller]
pub fn violated(violation: ContractViolation) -> ! {
    error!(
        target: "gimo::contract",
        %violation,
        type_name = violation.type_name(),
        "Contract violation"
    );
    if let Some(handler) = VIOLATION_HANDLER.get() {
        handler(&violation);
    }
    panic!("{violation}")
}

/// Check a run-time precondition
///
/// Expands to nothing observable when [`CHECKS_ENABLED`] is false.
///
/// ```should_panic
/// use gimo_core::{precondition, ContractViolation};
///
/// let slot: Option<i32> = None;
/// precondition!(slot.is_some(), ContractViolation::missing_value::<Option<i32>>());
/// ```
#[macro_export]
macro_rules! precondition {
    ($condition:expr, $violation:expr $(,)?) => {
        if $crate::assert::CHECKS_ENABLED && !($condition) {
            $crate::assert::violated($violation)
        }
    };
}
