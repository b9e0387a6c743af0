//! Conversion helpers between the panic machinery and explicit
//! [`Outcome`]/[`Fault`] values.
//!
//! These adapters let call sites choose, per boundary, whether a failure
//! travels as an unwinding panic or as a returned value. [`catch`] absorbs
//! raised values into outcomes, [`unwrap`] raises a failure back out, and
//! [`caught_to_fault`]/[`fault_to_exception`] are the underlying total,
//! lossless conversions.
//!
//! Everything here is single-shot and synchronous: each call either returns
//! or unwinds in the calling context, and no state persists between calls.
//!
//! Note that the process panic hook still runs for panics absorbed by
//! [`catch`]; install a quieter hook if caught panics should not reach
//! stderr.
//!
//! # Examples
//!
//! ```
//! use faultline::bridge;
//! use faultline::{Exception, ExceptionKind, Outcome};
//!
//! const PARSE: ExceptionKind = ExceptionKind::new("Parse");
//!
//! let outcome: Outcome<u32> = bridge::catch(|| {
//!     Exception::new(PARSE, "bad digit").raise()
//! });
//! assert_eq!(outcome.error().map(|f| f.message()), Some("bad digit"));
//! ```

use std::panic::{self, UnwindSafe};

use crate::types::{Caught, Exception, ExceptionKind, Fault, Outcome};

/// Message given to faults wrapping raised values with no recognized shape.
pub const UNKNOWN_MESSAGE: &str = "Unknown error";

/// Runs `op`, absorbing any raised value into a failure outcome.
///
/// A normal return becomes `Success`; a panic payload of any shape is
/// converted with [`caught_to_fault`] and becomes `Failure`. The call
/// itself never unwinds.
///
/// Closures that capture references to mutable state need
/// `std::panic::AssertUnwindSafe` (or the [`catching!`](crate::catching)
/// macro, which applies it).
///
/// # Examples
///
/// ```
/// use faultline::bridge;
///
/// let outcome = bridge::catch(|| "foo");
/// assert_eq!(outcome.into_value(), Some("foo"));
/// ```
pub fn catch<T, F>(op: F) -> Outcome<T>
where
    F: FnOnce() -> T + UnwindSafe,
{
    match panic::catch_unwind(op) {
        Ok(value) => Outcome::Success(value),
        Err(caught) => {
            let fault = caught_to_fault(caught);
            #[cfg(feature = "tracing")]
            tracing::debug!(fault = %fault, "absorbed raised value");
            Outcome::Failure(fault)
        }
    }
}

/// Runs `op`, absorbing only exceptions of the given kind.
///
/// A raised [`Exception`] whose kind matches is converted into a failure
/// outcome. Every other raised value (exceptions of other kinds, bare
/// faults, foreign payloads) is re-raised unchanged, so outer boundaries
/// observe the original value. This scopes which error family a call site
/// handles locally.
///
/// # Examples
///
/// ```
/// use faultline::bridge;
/// use faultline::{Exception, ExceptionKind, Outcome};
///
/// const AUTH: ExceptionKind = ExceptionKind::new("Auth");
///
/// let outcome: Outcome<()> = bridge::catch_only(AUTH, || {
///     Exception::new(AUTH, "token expired").raise()
/// });
/// assert!(outcome.is_failure());
/// ```
pub fn catch_only<T, F>(kind: ExceptionKind, op: F) -> Outcome<T>
where
    F: FnOnce() -> T + UnwindSafe,
{
    match panic::catch_unwind(op) {
        Ok(value) => Outcome::Success(value),
        Err(caught) => match caught.downcast::<Exception>() {
            Ok(exception) if exception.is_kind(kind) => {
                let fault = exception.into_fault();
                #[cfg(feature = "tracing")]
                tracing::debug!(kind = %kind, fault = %fault, "absorbed exception");
                Outcome::Failure(fault)
            }
            Ok(exception) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    raised = %exception.kind(),
                    handled = %kind,
                    "re-raising exception outside the handled kind"
                );
                panic::resume_unwind(exception)
            }
            Err(foreign) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(handled = %kind, "re-raising foreign payload");
                panic::resume_unwind(foreign)
            }
        },
    }
}

/// Returns the success value, or raises the failure as a generic exception.
///
/// Shorthand for [`unwrap_as`] with [`ExceptionKind::GENERIC`].
///
/// # Examples
///
/// ```
/// use faultline::bridge;
/// use faultline::Outcome;
///
/// let value = bridge::unwrap(Outcome::success(3));
/// assert_eq!(value, 3);
/// ```
pub fn unwrap<T>(outcome: Outcome<T>) -> T {
    unwrap_as(outcome, ExceptionKind::GENERIC)
}

/// Returns the success value, or raises the failure as an exception of the
/// given kind.
///
/// The failure's fault travels inside the raised exception, so a
/// [`catch`]/[`catch_only`] boundary further out recovers the full message
/// and cause chain.
pub fn unwrap_as<T>(outcome: Outcome<T>, kind: ExceptionKind) -> T {
    match outcome {
        Outcome::Success(value) => value,
        Outcome::Failure(fault) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(kind = %kind, fault = %fault, "raising failure");
            fault_to_exception(fault, kind).raise()
        }
    }
}

/// Converts any raised payload into a [`Fault`]. Total: no payload shape,
/// however exotic, makes this fail or unwind.
///
/// - A payload that already is a `Fault` is moved out and returned as-is,
///   never copied.
/// - A raised [`Exception`] carries a message, so its fault is moved out
///   and returned, also without copying.
/// - Anything else, including the string payloads of ordinary `panic!`
///   calls, becomes a fault with message [`UNKNOWN_MESSAGE`] and the
///   payload stored verbatim as the cause, recoverable via
///   [`Fault::cause_as`].
///
/// The last rule is deliberately uniform: foreign payloads are not
/// interpreted, whatever their type. Raise `Fault` or `Exception` values to
/// carry structured messages across the boundary.
///
/// # Examples
///
/// ```
/// use faultline::bridge::{self, UNKNOWN_MESSAGE};
/// use faultline::Fault;
///
/// let known = bridge::caught_to_fault(Box::new(Fault::new("boom")));
/// assert_eq!(known.message(), "boom");
///
/// let unknown = bridge::caught_to_fault(Box::new(42u8));
/// assert_eq!(unknown.message(), UNKNOWN_MESSAGE);
/// assert_eq!(unknown.cause_as::<u8>(), Some(&42));
/// ```
pub fn caught_to_fault(caught: Caught) -> Fault {
    let caught = match caught.downcast::<Fault>() {
        Ok(fault) => return *fault,
        Err(other) => other,
    };
    let caught = match caught.downcast::<Exception>() {
        Ok(exception) => return exception.into_fault(),
        Err(other) => other,
    };
    Fault::with_cause_boxed(UNKNOWN_MESSAGE, caught)
}

/// Stamps a fault with a kind, producing a raisable [`Exception`].
///
/// The exception owns the fault whole: message, cause, and chain stay
/// reachable, nothing is copied, and converting back with
/// [`Exception::into_fault`] yields the identical fault. Together with
/// [`caught_to_fault`] this round-trips exactly.
///
/// # Examples
///
/// ```
/// use faultline::bridge;
/// use faultline::{ExceptionKind, Fault};
///
/// const IO: ExceptionKind = ExceptionKind::new("Io");
///
/// let exception = bridge::fault_to_exception(Fault::new("short read"), IO);
/// assert!(exception.is_kind(IO));
/// assert_eq!(exception.message(), "short read");
/// ```
#[inline]
pub fn fault_to_exception(fault: Fault, kind: ExceptionKind) -> Exception {
    Exception::from_fault(kind, fault)
}
