//! Extension trait for adapting `std::result::Result` into [`Outcome`].
//!
//! This module provides [`OutcomeExt`], which turns plain results into
//! outcomes without verbose `match` or `map_err` chains, keeping the
//! original error value reachable as the fault's cause.
//!
//! # Examples
//!
//! ```
//! use faultline::traits::OutcomeExt;
//!
//! let parsed = "17".parse::<u32>().fault("parsing retry count");
//! assert!(parsed.is_success());
//!
//! let failed = "n/a".parse::<u32>().fault("parsing retry count");
//! assert_eq!(failed.error().map(|f| f.message()), Some("parsing retry count"));
//! ```

use core::any::Any;

use crate::types::alloc_type::String;
use crate::types::{Fault, Outcome};

/// Extension methods on `Result` for moving into the outcome vocabulary.
///
/// # Performance
///
/// [`fault_with`](OutcomeExt::fault_with) evaluates its closure only when
/// the result is an `Err`, so the success path pays nothing for message
/// formatting.
pub trait OutcomeExt<T, E> {
    /// Reinterprets the result as an [`Outcome`] without touching either
    /// payload.
    fn into_outcome(self) -> Outcome<T, E>;

    /// Converts an `Err` into a [`Fault`] with the given message, keeping
    /// the original error as the fault's cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultline::traits::OutcomeExt;
    ///
    /// let result: Result<(), &str> = Err("disk full");
    /// let outcome = result.fault("writing snapshot");
    ///
    /// let fault = outcome.into_error().unwrap();
    /// assert_eq!(fault.message(), "writing snapshot");
    /// assert_eq!(fault.cause_as::<&str>(), Some(&"disk full"));
    /// ```
    fn fault<M: Into<String>>(self, message: M) -> Outcome<T, Fault>
    where
        E: Any + Send;

    /// Like [`fault`](OutcomeExt::fault), but the message is produced
    /// lazily and only on the error path.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultline::traits::OutcomeExt;
    ///
    /// let user_id = 7;
    /// let result: Result<(), &str> = Err("not found");
    /// let outcome = result.fault_with(|| format!("loading user {}", user_id));
    /// assert!(outcome.is_failure());
    /// ```
    fn fault_with<F>(self, f: F) -> Outcome<T, Fault>
    where
        F: FnOnce() -> String,
        E: Any + Send;
}

impl<T, E> OutcomeExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from_result(self)
    }

    #[inline]
    fn fault<M: Into<String>>(self, message: M) -> Outcome<T, Fault>
    where
        E: Any + Send,
    {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(Fault::with_cause(message, error)),
        }
    }

    #[inline]
    fn fault_with<F>(self, f: F) -> Outcome<T, Fault>
    where
        F: FnOnce() -> String,
        E: Any + Send,
    {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(Fault::with_cause(f(), error)),
        }
    }
}
