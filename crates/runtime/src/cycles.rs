// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Context-compaction ("cycle") signal detection (spec §4.F).
//!
//! Every streamed line and provider protocol notification is scanned for
//! keys matching `/compact|compaction|context.?window|cycle/` case
//! insensitively. Integer values contribute their magnitude; booleans and
//! matching strings contribute 1. Signals are deduplicated by
//! `(source, signal_type, count)` before being summed.

use ac_core::{ContextCycles, CycleSource};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

#[allow(clippy::expect_used)]
fn cycle_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)compact|compaction|context.?window|cycle").expect("constant regex pattern is valid")
    })
}

/// One deduplicated context-cycle signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Signal {
    source: &'static str,
    signal_type: String,
    count: u64,
}

fn value_magnitude(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f.max(0.0).round() as u64)),
        serde_json::Value::Bool(true) => Some(1),
        serde_json::Value::Bool(false) => None,
        serde_json::Value::String(s) if cycle_key_pattern().is_match(s) => Some(1),
        _ => None,
    }
}

fn scan_object(obj: &serde_json::Map<String, serde_json::Value>, source: &'static str, out: &mut Vec<Signal>) {
    for (key, value) in obj {
        if cycle_key_pattern().is_match(key) {
            if let Some(count) = value_magnitude(value) {
                out.push(Signal { source, signal_type: key.clone(), count });
            }
        }
        match value {
            serde_json::Value::Object(nested) => scan_object(nested, source, out),
            serde_json::Value::Array(items) => {
                for item in items {
                    if let serde_json::Value::Object(nested) = item {
                        scan_object(nested, source, out);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Accumulates context-cycle signals across every line/notification
/// observed for a run.
#[derive(Debug, Default)]
pub struct CycleDetector {
    signals: Vec<Signal>,
    seen: HashSet<(&'static str, String, u64)>,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one streamed JSON line.
    pub fn observe_line(&mut self, value: &serde_json::Value) {
        if let serde_json::Value::Object(obj) = value {
            self.push_deduped(scan_value(obj, "provider_signal"));
        }
    }

    /// Feed one provider protocol notification: `{method, params}`. If
    /// `params` carries no explicit signal but `method` itself matches the
    /// cycle pattern, emit one signal of count 1 for the method name.
    pub fn observe_notification(&mut self, method: &str, params: Option<&serde_json::Value>) {
        let mut found = Vec::new();
        if let Some(serde_json::Value::Object(obj)) = params {
            scan_object(obj, "provider_signal", &mut found);
        }
        if found.is_empty() && cycle_key_pattern().is_match(method) {
            found.push(Signal { source: "provider_signal", signal_type: method.to_string(), count: 1 });
        }
        self.push_deduped(found);
    }

    fn push_deduped(&mut self, found: Vec<Signal>) {
        for signal in found {
            let key = (signal.source, signal.signal_type.clone(), signal.count);
            if self.seen.insert(key) {
                self.signals.push(signal);
            }
        }
    }

    /// Sum every deduplicated signal's count. `source` is
    /// `provider_signal` if any signal was observed, else `unavailable`.
    pub fn finalize(self) -> ContextCycles {
        if self.signals.is_empty() {
            return ContextCycles::unavailable();
        }
        let count: u64 = self.signals.iter().map(|s| s.count).sum();
        ContextCycles { count, source: CycleSource::ProviderSignal }
    }
}

fn scan_value(obj: &serde_json::Map<String, serde_json::Value>, source: &'static str) -> Vec<Signal> {
    let mut out = Vec::new();
    scan_object(obj, source, &mut out);
    out
}

#[cfg(test)]
#[path = "cycles_tests.rs"]
mod tests;
