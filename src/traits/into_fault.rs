//! Conversion trait for building [`Fault`] values from message-carrying
//! inputs.

use crate::types::alloc_type::String;
use crate::types::{Exception, Fault};

/// Converts a value into a [`Fault`].
///
/// Passthrough is part of the contract: converting something that already
/// is a fault (or contains one, like [`Exception`]) moves the existing
/// value and never clones or re-allocates it.
///
/// # Examples
///
/// ```
/// use faultline::traits::IntoFault;
/// use faultline::Fault;
///
/// let direct = Fault::new("boom").into_fault();
/// assert_eq!(direct.message(), "boom");
///
/// let from_text = String::from("bad header").into_fault();
/// assert_eq!(from_text.message(), "bad header");
/// ```
pub trait IntoFault {
    /// Performs the conversion.
    fn into_fault(self) -> Fault;
}

impl IntoFault for Fault {
    #[inline]
    fn into_fault(self) -> Fault {
        self
    }
}

impl IntoFault for Exception {
    #[inline]
    fn into_fault(self) -> Fault {
        Exception::into_fault(self)
    }
}

impl IntoFault for String {
    #[inline]
    fn into_fault(self) -> Fault {
        Fault::new(self)
    }
}

impl IntoFault for &str {
    #[inline]
    fn into_fault(self) -> Fault {
        Fault::new(self)
    }
}
