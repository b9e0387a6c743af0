//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick
//! starts. Import everything with:
//!
//! ```
//! use faultline::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fault!`], [`catching!`](crate::catching) (std)
//! - **Types**: [`Fault`], [`Exception`], [`ExceptionKind`], [`Outcome`]
//! - **Traits**: [`IntoFault`], [`OutcomeExt`]
//! - **Functions**: [`group_outcomes`], plus the bridge entry points when
//!   `std` is enabled
//!
//! # Examples
//!
//! ```
//! use faultline::prelude::*;
//!
//! fn quota(remaining: i32) -> Outcome<i32> {
//!     if remaining >= 0 {
//!         Outcome::success(remaining)
//!     } else {
//!         Outcome::failure(fault!("quota exceeded by {}", -remaining))
//!     }
//! }
//!
//! assert!(quota(-3).is_failure());
//! ```

// Macros
pub use crate::fault;

#[cfg(feature = "std")]
pub use crate::catching;

// Core types
pub use crate::types::{Caught, Exception, ExceptionKind, Fault, FaultVec, Grouped, Outcome};

// Traits
pub use crate::traits::{IntoFault, OutcomeExt};

// Batch helpers
pub use crate::convert::{collect_faults, group_outcomes, group_results};

// Bridge entry points
#[cfg(feature = "std")]
pub use crate::bridge::{catch, catch_only, caught_to_fault, fault_to_exception};
