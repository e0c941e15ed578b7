//! Tests for error messages and classification

use oplookup_core::{ClientError, ConfigError, LookupError, Segment};
use proptest::prelude::*;

// ============================================================================
// LookupError Tests
// ============================================================================

#[test]
fn malformed_coordinate_shows_pattern_and_input() {
    let msg = LookupError::MalformedCoordinate("vault/item".to_string()).to_string();
    assert!(msg.contains("<vault>/<item>/<field>"));
    assert!(msg.contains("vault/item"));
}

#[test]
fn unsupported_batch_shows_count() {
    let msg = LookupError::UnsupportedBatch(3).to_string();
    assert!(msg.contains('3'));
}

#[test]
fn transport_keeps_source() {
    let err = LookupError::from_client(ClientError::Server(502), Segment::Item, "MySQL Database");
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("Connect server error: status 502"));
}

#[test]
fn config_errors_name_env_vars() {
    assert!(
        ConfigError::MissingHost("OP_CONNECT_HOST")
            .to_string()
            .contains("OP_CONNECT_HOST")
    );
    assert!(
        ConfigError::MissingToken("OP_CONNECT_TOKEN")
            .to_string()
            .contains("OP_CONNECT_TOKEN")
    );
}

// ========== Strategies ==========

fn arb_segment() -> impl Strategy<Value = Segment> {
    prop_oneof![
        Just(Segment::Vault),
        Just(Segment::Item),
        Just(Segment::Section),
        Just(Segment::Field),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn not_found_names_segment_and_reference(
        segment in arb_segment(),
        reference in "[A-Za-z0-9 ]{1,20}",
    ) {
        let err = LookupError::not_found(segment, reference.clone());
        let msg = err.to_string();
        prop_assert!(msg.starts_with(segment.as_str()));
        prop_assert!(msg.contains(&reference));
        prop_assert!(err.is_not_found());
    }

    #[test]
    fn client_not_found_keeps_segment(segment in arb_segment(), reference in "[a-z]{1,10}") {
        let err = LookupError::from_client(ClientError::NotFound("x".into()), segment, &reference);
        let keeps_segment = matches!(err, LookupError::NotFound { segment: s, .. } if s == segment);
        prop_assert!(keeps_segment);
    }

    #[test]
    fn other_statuses_are_transport(status in 400u16..600) {
        prop_assume!(status != 404);
        let client = ClientError::from_status(status, "vault");
        let err = LookupError::from_client(client, Segment::Vault, "vault");
        let is_transport = matches!(err, LookupError::Transport { segment: Segment::Vault, .. });
        prop_assert!(is_transport);
        prop_assert!(!err.is_not_found());
        prop_assert!(err.to_string().starts_with("vault 'vault'"));
    }
}
