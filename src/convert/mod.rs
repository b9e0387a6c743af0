//! Conversion helpers between `Outcome`, plain `Result`, and grouped
//! batches.
//!
//! These adapters make it straightforward to adopt outcomes incrementally:
//! wrap legacy results at the edges, process batches with a single
//! partition pass, and flatten back to core types when calling external
//! APIs.
//!
//! # Examples
//!
//! ```
//! use faultline::convert::*;
//! use faultline::Outcome;
//!
//! let outcome = result_to_outcome::<i32, &str>(Ok(42));
//! assert!(outcome.is_success());
//!
//! let (values, faults) = group_outcomes(vec![
//!     Outcome::<_, &str>::success("a"),
//!     Outcome::failure("dropped"),
//! ]);
//! assert_eq!(values, vec!["a"]);
//! assert_eq!(faults.len(), 1);
//! ```

use crate::types::alloc_type::Vec;
use crate::types::{FaultVec, Grouped, Outcome};

/// Partitions a sequence of outcomes into ordered success and failure
/// sequences.
///
/// Runs in a single pass. Relative order is preserved within each group,
/// and the partition is total: every input element lands in exactly one of
/// the two sequences, none dropped, none duplicated.
///
/// # Arguments
///
/// * `outcomes` - The outcomes to partition
///
/// # Returns
///
/// A `(successes, failures)` pair; failures accumulate in a
/// [`FaultVec`](crate::types::FaultVec) with inline capacity for the
/// common low-failure case.
///
/// # Examples
///
/// ```
/// use faultline::convert::group_outcomes;
/// use faultline::Outcome;
///
/// let (values, faults) = group_outcomes(vec![
///     Outcome::<_, &str>::success(1),
///     Outcome::failure("e1"),
///     Outcome::success(2),
///     Outcome::failure("e2"),
/// ]);
///
/// assert_eq!(values, vec![1, 2]);
/// assert_eq!(faults.as_slice(), ["e1", "e2"]);
/// ```
pub fn group_outcomes<T, E, I>(outcomes: I) -> Grouped<T, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let outcomes = outcomes.into_iter();
    let mut values = Vec::with_capacity(outcomes.size_hint().0);
    let mut faults = FaultVec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => faults.push(error),
        }
    }
    (values, faults)
}

/// Partitions a sequence of plain results the same way
/// [`group_outcomes`] partitions outcomes.
///
/// # Examples
///
/// ```
/// use faultline::convert::group_results;
///
/// let (values, faults) = group_results(vec![Ok(1), Err("e"), Ok(2)]);
/// assert_eq!(values, vec![1, 2]);
/// assert_eq!(faults.as_slice(), ["e"]);
/// ```
pub fn group_results<T, E, I>(results: I) -> Grouped<T, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    group_outcomes(results.into_iter().map(Outcome::from_result))
}

/// Converts an `Outcome` to a `Result`.
///
/// # Examples
///
/// ```
/// use faultline::convert::outcome_to_result;
/// use faultline::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::success(7)), Ok(7));
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::failure("no")), Err("no"));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Converts a `Result` to an `Outcome`.
///
/// # Examples
///
/// ```
/// use faultline::convert::result_to_outcome;
///
/// let outcome = result_to_outcome::<i32, &str>(Err("stale"));
/// assert!(outcome.is_failure());
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    Outcome::from_result(result)
}

/// Collects loose errors into a single outcome.
///
/// # Returns
///
/// * `Success(())` if the iterator yields no errors
/// * `Failure(errors)` with all errors, in order, otherwise
///
/// # Examples
///
/// ```
/// use faultline::convert::collect_faults;
///
/// assert!(collect_faults::<&str, _>([]).is_success());
///
/// let failed = collect_faults(["e1", "e2"]);
/// assert_eq!(failed.into_error().map(|e| e.len()), Some(2));
/// ```
pub fn collect_faults<E, I>(errors: I) -> Outcome<(), FaultVec<E>>
where
    I: IntoIterator<Item = E>,
{
    let errors: FaultVec<E> = errors.into_iter().collect();
    if errors.is_empty() {
        Outcome::Success(())
    } else {
        Outcome::Failure(errors)
    }
}
