//! Ergonomic macros for constructing [`Fault`](crate::types::Fault) values
//! and capturing panics.
//!
//! - [`macro@crate::fault`] - Builds a `Fault` with `format!`-style
//!   arguments.
//! - [`macro@crate::catching`] - Wraps a block in
//!   [`bridge::catch`](crate::bridge::catch), asserting unwind safety so
//!   the block may capture references.
//!
//! # Examples
//!
//! ```
//! use faultline::{catching, fault};
//!
//! let fault = fault!("user {} missing", 42);
//! assert_eq!(fault.message(), "user 42 missing");
//!
//! let base = 5;
//! let outcome = catching! { base * 2 };
//! assert_eq!(outcome.into_value(), Some(10));
//! ```

/// Builds a [`Fault`](crate::types::Fault) with `format!`-style arguments.
///
/// # Arguments
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use faultline::fault;
///
/// let attempts = 3;
/// let fault = fault!("gave up after {} attempts", attempts);
/// assert_eq!(fault.message(), "gave up after 3 attempts");
/// ```
#[macro_export]
macro_rules! fault {
    ($($arg:tt)*) => {
        $crate::types::Fault::new(format!($($arg)*))
    };
}

/// Wraps a block in [`bridge::catch`](crate::bridge::catch), converting any
/// panic raised inside into a failure outcome.
///
/// The block is run through `std::panic::AssertUnwindSafe`, so it may
/// capture references to surrounding state; the caller takes on the usual
/// obligation that such state is left consistent if the block unwinds.
///
/// # Examples
///
/// ```
/// use faultline::catching;
///
/// let outcome = catching! { "done" };
/// assert_eq!(outcome.into_value(), Some("done"));
/// ```
#[macro_export]
#[cfg(feature = "std")]
macro_rules! catching {
    ($($body:tt)*) => {
        $crate::bridge::catch(::std::panic::AssertUnwindSafe(move || { $($body)* }))
    };
}
