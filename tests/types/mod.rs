use faultline::{Fault, Outcome};


#[test]
fn fault_chain_survives_outcome_transport() {
    let inner = Fault::new("connection reset");
    let outer = Fault::with_cause("sync failed", inner);

    let outcome = Outcome::<(), Fault>::failure(outer);
    let fault = outcome.into_error().unwrap();

    assert_eq!(fault.chain_text(), "sync failed -> connection reset");
}
