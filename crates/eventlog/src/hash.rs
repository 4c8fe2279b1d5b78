// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical JSON and the event hash chain.

use ac_core::EventEnvelope;
use sha2::{Digest, Sha256};

/// Canonical JSON of a value: keys sorted lexicographically at every depth,
/// no insignificant whitespace, minimal-form numbers.
///
/// `serde_json::Value`'s map type is a `BTreeMap` in this workspace (the
/// `preserve_order` feature is never enabled), so a plain compact
/// serialization already iterates object keys in sorted order at every
/// depth — no custom key-sorting serializer is needed.
pub fn canonical_json(value: &serde_json::Value) -> String {
    // `to_string` never fails for a `Value` that round-tripped through
    // `serde_json::to_value`; a failure here would mean an non-UTF8 string
    // snuck into the tree, which `serde_json::Value` cannot represent.
    serde_json::to_string(value).unwrap_or_default()
}

fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

/// `event_hash = sha256(canonical_json(envelope without event_hash))`, hex-encoded.
pub fn event_hash(envelope: &EventEnvelope) -> String {
    let canon = canonical_json(&envelope.hashable_value());
    let mut hasher = Sha256::new();
    hasher.update(canon.as_bytes());
    hex_encode(&hasher.finalize())
}

#[cfg(test)]
#[path = "hash_tests.rs"]
mod tests;
