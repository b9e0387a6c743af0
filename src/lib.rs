//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `faultline::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Explicit Outcomes
//!
//! ```
//! use faultline::{Fault, Outcome};
//!
//! let outcome = Outcome::<i32>::failure(Fault::new("lookup failed"));
//!
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.error().map(Fault::message), Some("lookup failed"));
//! ```
//!
//! ## Absorbing Panics
//!
//! ```
//! use faultline::bridge;
//!
//! let outcome = bridge::catch(|| 2 + 2);
//! assert_eq!(outcome.into_value(), Some(4));
//!
//! let outcome: faultline::Outcome<i32> = bridge::catch(|| panic!("boom"));
//! assert_eq!(outcome.error().map(faultline::Fault::message), Some("Unknown error"));
//! ```
//!
//! ## Grouping a Batch
//!
//! ```
//! use faultline::{group_outcomes, Fault, Outcome};
//!
//! let (values, faults) = group_outcomes(vec![
//!     Outcome::success(1),
//!     Outcome::failure(Fault::new("skipped")),
//!     Outcome::success(2),
//! ]);
//!
//! assert_eq!(values, vec![1, 2]);
//! assert_eq!(faults.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between outcomes, plain results, and grouped batches
pub mod convert;
/// Macros for fault construction and panic capture
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for fault conversion and result adaptation
pub mod traits;
/// Fault, Exception, and Outcome value types
pub mod types;

/// Panic interop: absorbing raised values into outcomes and raising them back
/// (requires the `std` feature)
#[cfg(feature = "std")]
pub mod bridge;

// Re-export common items at the root, but encourage using the prelude or
// the focused modules.
pub use convert::*;
pub use traits::*;
pub use types::{Caught, Exception, ExceptionKind, Fault, FaultVec, Grouped, Outcome};

#[cfg(feature = "std")]
pub use bridge::{catch, catch_only, caught_to_fault, fault_to_exception};
