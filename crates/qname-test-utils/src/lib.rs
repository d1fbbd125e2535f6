//! Testing utilities for the qname workspace
//!
//! Shared proptest strategies, fixtures and a tracing initializer.

#![allow(missing_docs)]

use std::sync::Once;

use proptest::prelude::*;
use qname::{NameFormat, QualifiedName};
use serde_json::{json, Value};

/// Arbitrary non-empty segment, biased towards separator and escape characters
pub fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9_]{0,7}",
        r"[a-z./\\:%-]{1,6}",
        any::<String>().prop_filter("segments are non-empty", |s| !s.is_empty()),
    ]
}

/// Sequence of segments (possibly empty)
pub fn segments(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment(), 0..=max_len)
}

/// Qualified name of up to `max_len` segments
pub fn name(max_len: usize) -> impl Strategy<Value = QualifiedName> {
    segments(max_len).prop_map(QualifiedName::of_all)
}

/// Valid name formats, including multi-character tokens
pub fn format() -> impl Strategy<Value = NameFormat> {
    prop_oneof![
        Just((".", "\\")),
        Just(("/", "\\")),
        Just(("::", "\\")),
        Just(("->", "%")),
        Just(("|", "^^")),
        Just((".", "\\\\")),
    ]
    .prop_map(|(separator, escape)| {
        NameFormat::new(separator, escape).expect("fixture formats are valid")
    })
}

/// `a.b.c.d.e.f`
#[must_use]
pub fn abcdef() -> QualifiedName {
    QualifiedName::of_all(["a", "b", "c", "d", "e", "f"])
}

/// Name from string slices
#[must_use]
pub fn name_of(segments: &[&str]) -> QualifiedName {
    QualifiedName::from(segments)
}

/// A small configuration document for resolve tests
#[must_use]
pub fn sample_config() -> Value {
    json!({
        "server": {
            "http": {"port": 8080, "host": "0.0.0.0"},
            "tls": {"enabled": false}
        },
        "db": {
            "primary": {"host": "10.0.0.1", "pool": 16},
            "replicas": ["10.0.0.2", "10.0.0.3"]
        },
        "a.b": {"c": "dotted key"}
    })
}

/// Install a fmt subscriber honouring `RUST_LOG`, once per test binary
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
