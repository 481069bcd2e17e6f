mod common;

use hostwallet_binding_core::switch_transition;

use common::two_chains;

#[test]
fn known_target_produces_transition() {
    let chains = two_chains();
    let (descriptor, transition) =
        switch_transition("1", "137", &chains).expect("configured target");
    assert_eq!(descriptor.id, "137");
    assert_eq!(descriptor.rpc_url.as_deref(), Some("https://b"));
    assert_eq!(transition.from, "1");
    assert_eq!(transition.to, "137");
}

#[test]
fn unknown_target_is_rejected() {
    let chains = two_chains();
    let err = switch_transition("1", "999", &chains).expect_err("must fail");
    assert_eq!(err.code, -32602);
    assert!(err.message.contains("not configured"));
}

#[test]
fn switching_to_active_chain_is_legal() {
    let chains = two_chains();
    let (descriptor, transition) =
        switch_transition("1", "1", &chains).expect("reconstruction on same chain");
    assert_eq!(descriptor.id, "1");
    assert_eq!(transition.from, transition.to);
}
