//! Core traits for fault conversion and result adaptation.
//!
//! - [`IntoFault`]: conversion of message-carrying values into [`Fault`](crate::types::Fault)
//! - [`OutcomeExt`]: ergonomic adaptation of `std::result::Result` into
//!   [`Outcome`](crate::types::Outcome)
//!
//! # Examples
//!
//! ```
//! use faultline::traits::{IntoFault, OutcomeExt};
//!
//! let fault = "connection refused".into_fault();
//! assert_eq!(fault.message(), "connection refused");
//!
//! let result: Result<i32, &str> = Err("timed out");
//! let outcome = result.fault("fetching quota");
//! assert!(outcome.is_failure());
//! ```

pub mod into_fault;
pub mod outcome_ext;

pub use into_fault::IntoFault;
pub use outcome_ext::OutcomeExt;
