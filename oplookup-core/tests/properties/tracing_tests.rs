//! Property-based tests for tracing configuration

use oplookup_core::{TracingConfig, TracingLevel, TracingOutput, span_names};
use proptest::prelude::*;

// ========== Strategies ==========

/// Strategy for generating tracing levels
fn arb_tracing_level() -> impl Strategy<Value = TracingLevel> {
    prop_oneof![
        Just(TracingLevel::Error),
        Just(TracingLevel::Warn),
        Just(TracingLevel::Info),
        Just(TracingLevel::Debug),
        Just(TracingLevel::Trace),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn level_display_parses_back(level in arb_tracing_level()) {
        prop_assert_eq!(level.to_string().parse::<TracingLevel>(), Ok(level));
    }

    #[test]
    fn default_directive_uses_level(level in arb_tracing_level()) {
        let directive = TracingConfig::new().with_level(level).filter_directive();
        let expected = format!("oplookup_core={level}");
        prop_assert!(directive.contains(&expected));
    }

    #[test]
    fn verbosity_never_goes_below_warn(count in any::<u8>()) {
        let level = TracingLevel::from_verbosity(count);
        prop_assert_ne!(level, TracingLevel::Error);
    }
}

#[test]
fn default_config_writes_to_stderr() {
    let config = TracingConfig::new();
    assert_eq!(config.output, TracingOutput::Stderr);
    assert_eq!(config.level, TracingLevel::Warn);
    assert!(config.filter.is_none());
}

#[test]
fn span_names_are_namespaced() {
    for name in [
        span_names::LOOKUP_RESOLVE,
        span_names::STORE_VAULT_BY_NAME,
        span_names::STORE_ITEM_BY_ID,
        span_names::STORE_ITEM_BY_NAME,
    ] {
        assert!(name.starts_with("lookup.") || name.starts_with("store."));
    }
}
