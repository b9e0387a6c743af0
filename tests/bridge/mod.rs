use std::panic::{self, AssertUnwindSafe};

use faultline::bridge::{self, UNKNOWN_MESSAGE};
use faultline::{catching, Exception, ExceptionKind, Fault, Outcome};

const AUTH: ExceptionKind = ExceptionKind::new("Auth");
const PARSE: ExceptionKind = ExceptionKind::new("Parse");

#[test]
fn catch_returns_success_for_normal_returns() {
    let outcome = bridge::catch(|| "foo");
    assert_eq!(outcome.into_value(), Some("foo"));
}

#[test]
fn catch_absorbs_foreign_payloads_as_unknown() {
    let outcome: Outcome<()> = bridge::catch(|| panic::panic_any("junk"));

    let fault = outcome.into_error().unwrap();
    assert_eq!(fault.message(), UNKNOWN_MESSAGE);
    assert_eq!(fault.cause_as::<&str>(), Some(&"junk"));
}

#[test]
fn catch_treats_ordinary_panic_messages_as_foreign() {
    // panic! raises a &'static str payload; the bridge does not interpret it.
    let outcome: Outcome<()> = bridge::catch(|| panic!("whoops"));

    let fault = outcome.into_error().unwrap();
    assert_eq!(fault.message(), UNKNOWN_MESSAGE);
    assert_eq!(fault.cause_as::<&str>(), Some(&"whoops"));
}

#[test]
fn catch_passes_raised_faults_through() {
    let outcome: Outcome<()> = bridge::catch(|| panic::panic_any(Fault::new("boom")));

    let fault = outcome.into_error().unwrap();
    assert_eq!(fault.message(), "boom");
    assert!(fault.cause().is_none());
}

#[test]
fn catch_flattens_raised_exceptions_to_their_fault() {
    let outcome: Outcome<()> = bridge::catch(|| {
        Exception::from_fault(AUTH, Fault::with_cause("token expired", 401u16)).raise()
    });

    let fault = outcome.into_error().unwrap();
    assert_eq!(fault.message(), "token expired");
    assert_eq!(fault.cause_as::<u16>(), Some(&401));
}

#[test]
fn caught_to_fault_is_idempotent_on_fault_shaped_input() {
    let first = bridge::caught_to_fault(Box::new(Fault::with_cause("boom", "detail")));
    let second = bridge::caught_to_fault(Box::new(first));

    // No extra wrapping level appears on re-conversion.
    assert_eq!(second.message(), "boom");
    assert_eq!(second.cause_as::<&str>(), Some(&"detail"));
}

#[test]
fn conversion_round_trip_is_lossless() {
    let raised: faultline::Caught = Box::new("exotic");
    let fault = bridge::caught_to_fault(raised);
    let exception = bridge::fault_to_exception(fault, PARSE);

    assert!(exception.is_kind(PARSE));
    assert_eq!(exception.message(), UNKNOWN_MESSAGE);
    assert_eq!(exception.fault().cause_as::<&str>(), Some(&"exotic"));
}

#[test]
fn catch_only_absorbs_the_handled_kind() {
    let outcome: Outcome<()> = bridge::catch_only(AUTH, || {
        Exception::new(AUTH, "token expired").raise()
    });

    let fault = outcome.into_error().unwrap();
    assert_eq!(fault.message(), "token expired");
}

#[test]
fn catch_only_reraises_other_kinds_unchanged() {
    let caught = panic::catch_unwind(AssertUnwindSafe(|| {
        let _: Outcome<()> = bridge::catch_only(AUTH, || {
            Exception::new(PARSE, "bad digit").raise()
        });
    }))
    .unwrap_err();

    let exception = caught.downcast::<Exception>().unwrap();
    assert!(exception.is_kind(PARSE));
    assert_eq!(exception.message(), "bad digit");
}

#[test]
fn catch_only_reraises_foreign_payloads_unchanged() {
    let caught = panic::catch_unwind(AssertUnwindSafe(|| {
        let _: Outcome<()> = bridge::catch_only(AUTH, || panic::panic_any(42i32));
    }))
    .unwrap_err();

    assert_eq!(caught.downcast_ref::<i32>(), Some(&42));
}

#[test]
fn unwrap_returns_the_success_value() {
    assert_eq!(bridge::unwrap(Outcome::success(3)), 3);
}

#[test]
fn unwrap_raises_failures_as_generic_exceptions() {
    let caught = panic::catch_unwind(|| {
        bridge::unwrap(Outcome::<i32>::failure(Fault::new("failed")))
    })
    .unwrap_err();

    let exception = caught.downcast::<Exception>().unwrap();
    assert!(exception.is_kind(ExceptionKind::GENERIC));
    assert_eq!(exception.message(), "failed");
}

#[test]
fn unwrap_as_uses_the_requested_kind() {
    let caught = panic::catch_unwind(|| {
        bridge::unwrap_as(Outcome::<i32>::failure(Fault::new("bad digit")), PARSE)
    })
    .unwrap_err();

    let exception = caught.downcast::<Exception>().unwrap();
    assert!(exception.is_kind(PARSE));
}

#[test]
fn unwrap_after_catch_preserves_the_original_failure_data() {
    let outcome: Outcome<i32> = bridge::catch(|| panic::panic_any("junk"));

    let caught = panic::catch_unwind(AssertUnwindSafe(|| bridge::unwrap(outcome))).unwrap_err();
    let exception = caught.downcast::<Exception>().unwrap();

    assert_eq!(exception.message(), UNKNOWN_MESSAGE);
    assert_eq!(exception.fault().cause_as::<&str>(), Some(&"junk"));
}

#[test]
fn catching_macro_captures_surrounding_state() {
    let mut calls = 0;
    let counter = &mut calls;
    let outcome = catching! {
        *counter += 1;
        *counter
    };

    assert_eq!(outcome.into_value(), Some(1));
    assert_eq!(calls, 1);
}

#[test]
fn catching_macro_absorbs_panics() {
    let outcome: Outcome<i32> = catching! {
        Exception::new(AUTH, "nope").raise()
    };

    assert_eq!(outcome.into_error().map(|f| f.message().to_string()), Some("nope".into()));
}
