//! # Events Tests
//!
//! Issued, Renewed and Revoked notifications carry the documented payloads
//! under their indexed topics, appear in call order, and are never emitted
//! by a rejected call.

use crate::events::{
    InitializedEvent, TOPIC_CERTIFICATE_ISSUED, TOPIC_CERTIFICATE_RENEWED,
    TOPIC_CERTIFICATE_REVOKED, TOPIC_INITIALIZED,
};
use crate::test::*;
use crate::{
    CertificateError, CertificateIssuedEvent, CertificateRenewedEvent, CertificateRevokedEvent,
};
use soroban_sdk::testutils::{Address as _, Events as _};
use soroban_sdk::{Address, Symbol, TryFromVal, Val, Vec};

/// Topics and payload of the most recent event.
fn last_event(test: &TestEnv) -> (Vec<Val>, Val) {
    let (contract, topics, data) = test.env.events().all().last().unwrap();
    assert_eq!(contract, test.client.address);
    (topics, data)
}

fn topic_symbol(test: &TestEnv, topics: &Vec<Val>) -> Symbol {
    Symbol::try_from_val(&test.env, &topics.get(0).unwrap()).unwrap()
}

fn topic_id(test: &TestEnv, topics: &Vec<Val>) -> u64 {
    u64::try_from_val(&test.env, &topics.get(1).unwrap()).unwrap()
}

/// Number of recorded events published under `topic`.
fn count_topic(test: &TestEnv, topic: &Symbol) -> u32 {
    let mut count = 0;
    for (_, topics, _) in test.env.events().all().iter() {
        if topic_symbol(test, &topics) == *topic {
            count += 1;
        }
    }
    count
}

#[test]
fn test_constructor_emits_event() {
    let test = TestEnv::new();
    let (topics, data) = last_event(&test);

    assert_eq!(topic_symbol(&test, &topics), TOPIC_INITIALIZED);
    let event = InitializedEvent::try_from_val(&test.env, &data).unwrap();
    assert_eq!(event.authority, test.authority);
}

#[test]
fn test_issue_emits_event() {
    let test = TestEnv::new();
    let holder = Address::generate(&test.env);
    let id = test.issue_to(&holder, 365);

    let (topics, data) = last_event(&test);
    assert_eq!(topic_symbol(&test, &topics), TOPIC_CERTIFICATE_ISSUED);
    let topic_holder = Address::try_from_val(&test.env, &topics.get(1).unwrap()).unwrap();
    assert_eq!(topic_holder, holder);

    let event = CertificateIssuedEvent::try_from_val(&test.env, &data).unwrap();
    assert_eq!(
        event,
        CertificateIssuedEvent {
            id,
            holder,
            company_name: test.str("Organic Coffee Co."),
            expiration_date: GENESIS + 365 * DAY,
        }
    );
}

#[test]
fn test_renew_emits_event() {
    let test = TestEnv::new();
    let holder = Address::generate(&test.env);
    let id = test.issue_to(&holder, 365);

    test.client.renew(&test.authority, &id, &180u64);

    let (topics, data) = last_event(&test);
    assert_eq!(topic_symbol(&test, &topics), TOPIC_CERTIFICATE_RENEWED);
    assert_eq!(topic_id(&test, &topics), id);

    let event = CertificateRenewedEvent::try_from_val(&test.env, &data).unwrap();
    assert_eq!(event.id, id);
    assert_eq!(event.new_expiration_date, GENESIS + 545 * DAY);
}

#[test]
fn test_revoke_emits_event() {
    let test = TestEnv::new();
    let holder = Address::generate(&test.env);
    test.issue_to(&holder, 365);
    let id = test.issue_to(&holder, 365);
    let reason = test.str("Compliance violation");

    test.client.revoke(&test.authority, &id, &reason);

    let (topics, data) = last_event(&test);
    assert_eq!(topic_symbol(&test, &topics), TOPIC_CERTIFICATE_REVOKED);
    assert_eq!(topic_id(&test, &topics), id);

    let event = CertificateRevokedEvent::try_from_val(&test.env, &data).unwrap();
    assert_eq!(event, CertificateRevokedEvent { id, reason });
}

#[test]
fn test_each_issue_emits_its_own_event() {
    let test = TestEnv::new();
    let holder = Address::generate(&test.env);

    for expected in 0..3u64 {
        let id = test.issue_to(&holder, 30);
        assert_eq!(id, expected);

        let (topics, data) = last_event(&test);
        assert_eq!(topic_symbol(&test, &topics), TOPIC_CERTIFICATE_ISSUED);
        let event = CertificateIssuedEvent::try_from_val(&test.env, &data).unwrap();
        assert_eq!(event.id, expected);
    }
}

#[test]
fn test_lifecycle_events_follow_call_order() {
    let test = TestEnv::new();
    let holder = Address::generate(&test.env);
    let mut seen = Vec::<Symbol>::new(&test.env);

    let id = test.issue_to(&holder, 365);
    let (topics, _) = last_event(&test);
    seen.push_back(topic_symbol(&test, &topics));

    test.client.renew(&test.authority, &id, &30u64);
    let (topics, _) = last_event(&test);
    assert_eq!(topic_id(&test, &topics), id);
    seen.push_back(topic_symbol(&test, &topics));

    test.client
        .revoke(&test.authority, &id, &test.str("Compliance violation"));
    let (topics, _) = last_event(&test);
    assert_eq!(topic_id(&test, &topics), id);
    seen.push_back(topic_symbol(&test, &topics));

    assert_eq!(
        seen,
        soroban_sdk::vec![
            &test.env,
            TOPIC_CERTIFICATE_ISSUED,
            TOPIC_CERTIFICATE_RENEWED,
            TOPIC_CERTIFICATE_REVOKED
        ]
    );
}

// ════════════════════════════════════════════════════════════════════
//  Rejected calls publish nothing
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_unauthorized_issue_emits_no_event() {
    let test = TestEnv::new();
    let outsider = Address::generate(&test.env);

    let result = test.client.try_issue(
        &outsider,
        &Address::generate(&test.env),
        &test.str("Organic Coffee Co."),
        &test.str("12345-ABCDE"),
        &365u64,
        &test.str("ipfs://QmExample"),
    );
    assert_eq!(result, Err(Ok(CertificateError::Unauthorized)));
    assert_eq!(count_topic(&test, &TOPIC_CERTIFICATE_ISSUED), 0);
}

#[test]
fn test_invalid_renewal_emits_no_event() {
    let test = TestEnv::new();
    let holder = Address::generate(&test.env);
    let id = test.issue_to(&holder, 365);

    assert_eq!(
        test.client.try_renew(&test.authority, &id, &0u64),
        Err(Ok(CertificateError::InvalidInput))
    );
    assert_eq!(count_topic(&test, &TOPIC_CERTIFICATE_RENEWED), 0);
}

#[test]
fn test_revoke_unknown_id_emits_no_event() {
    let test = TestEnv::new();

    assert_eq!(
        test.client
            .try_revoke(&test.authority, &9u64, &test.str("No such certificate")),
        Err(Ok(CertificateError::NotFound))
    );
    assert_eq!(count_topic(&test, &TOPIC_CERTIFICATE_REVOKED), 0);
}
