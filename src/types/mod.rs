//! Core value types.
//!
//! This module provides the crate's error-value vocabulary: [`Fault`] for
//! structural error values, [`Exception`] for raisable kind-tagged faults,
//! and [`Outcome`] as the explicit success/failure union.
//!
//! # Examples
//!
//! ```
//! use faultline::types::{Fault, Outcome};
//!
//! let fault = Fault::with_cause("config rejected", "missing key");
//! let outcome = Outcome::<(), Fault>::failure(fault);
//!
//! assert!(outcome.is_failure());
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod exception;
pub mod fault;
pub mod outcome;

pub use exception::*;
pub use fault::*;
pub use outcome::*;

/// SmallVec-backed collection used for accumulating grouped failures.
///
/// Uses inline storage for up to 1 element to avoid heap allocations in the
/// common case where a batch produces few failures.
pub type FaultVec<E> = SmallVec<[E; 1]>;

/// Ordered success and failure sequences produced by grouping a batch of
/// outcomes.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The failure value type
pub type Grouped<T, E> = (alloc_type::Vec<T>, FaultVec<E>);
