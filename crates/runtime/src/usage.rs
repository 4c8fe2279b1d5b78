// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token-usage extraction from provider stream lines (spec §4.F).
//!
//! Each streamed line is parsed as JSON (if possible) and walked for
//! "usage candidate" objects: any node containing at least one of the
//! well-known token-count keys. Candidates are normalized, deduplicated by
//! their normalized signature, and the one with the highest `total` wins.
//! When a run produces no candidates at all, usage is estimated from
//! character counts instead.

use ac_core::{TokenUsage, UsageConfidence, UsageSource};
use std::collections::HashSet;

/// How deep into a JSON value [`find_usage_candidates`] will recurse.
const MAX_DEPTH: usize = 8;

const USAGE_KEYS: &[&str] =
    &["total_tokens", "input_tokens", "output_tokens", "prompt_tokens", "completion_tokens"];

fn as_u64(v: &serde_json::Value) -> Option<u64> {
    v.as_u64().or_else(|| v.as_f64().map(|f| f.max(0.0).round() as u64))
}

/// One normalized token-usage reading pulled out of a single JSON node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Candidate {
    input: u64,
    cached_input: u64,
    output: u64,
    reasoning_output: u64,
    total: u64,
}

impl Candidate {
    fn signature(&self) -> (u64, u64, u64, u64, u64) {
        (self.input, self.cached_input, self.output, self.reasoning_output, self.total)
    }
}

fn node_to_candidate(obj: &serde_json::Map<String, serde_json::Value>) -> Candidate {
    let prompt = obj.get("prompt_tokens").and_then(as_u64);
    let input_tokens = obj.get("input_tokens").and_then(as_u64);
    let input = input_tokens.or(prompt).unwrap_or(0);

    let completion = obj.get("completion_tokens").and_then(as_u64);
    let output_tokens = obj.get("output_tokens").and_then(as_u64);
    let output = output_tokens.or(completion).unwrap_or(0);

    let cached_input = obj
        .get("cached_input_tokens")
        .or_else(|| obj.get("cache_read_input_tokens"))
        .and_then(as_u64)
        .unwrap_or(0);
    let reasoning_output = obj
        .get("reasoning_output_tokens")
        .or_else(|| obj.get("reasoning_tokens"))
        .and_then(as_u64)
        .unwrap_or(0);

    let total = obj
        .get("total_tokens")
        .and_then(as_u64)
        .unwrap_or_else(|| TokenUsage::total_from_parts(input, cached_input, output, reasoning_output));

    Candidate { input, cached_input, output, reasoning_output, total }
}

fn is_usage_node(obj: &serde_json::Map<String, serde_json::Value>) -> bool {
    USAGE_KEYS.iter().any(|k| obj.contains_key(*k))
}

/// Walk `value` up to [`MAX_DEPTH`], collecting one [`Candidate`] per object
/// node that looks like a usage reading, deduplicated by normalized
/// signature.
fn find_usage_candidates(value: &serde_json::Value, depth: usize, out: &mut Vec<Candidate>, seen: &mut HashSet<(u64, u64, u64, u64, u64)>) {
    if depth > MAX_DEPTH {
        return;
    }
    match value {
        serde_json::Value::Object(obj) => {
            if is_usage_node(obj) {
                let candidate = node_to_candidate(obj);
                if seen.insert(candidate.signature()) {
                    out.push(candidate);
                }
            }
            for v in obj.values() {
                find_usage_candidates(v, depth + 1, out, seen);
            }
        }
        serde_json::Value::Array(items) => {
            for v in items {
                find_usage_candidates(v, depth + 1, out, seen);
            }
        }
        _ => {}
    }
}

/// Accumulates usage candidates across every line streamed for a run.
#[derive(Debug, Default)]
pub struct UsageExtractor {
    candidates: Vec<Candidate>,
    seen: HashSet<(u64, u64, u64, u64, u64)>,
}

impl UsageExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one streamed line. `raw` is the line already parsed as JSON, or
    /// `None` if the line wasn't valid JSON (non-JSON lines carry no usage).
    pub fn observe_line(&mut self, raw: Option<&serde_json::Value>) {
        if let Some(value) = raw {
            find_usage_candidates(value, 0, &mut self.candidates, &mut self.seen);
        }
    }

    /// Resolve the final [`TokenUsage`] for the run: the highest-`total`
    /// observed candidate, or a character-count estimate if none arrived.
    pub fn finalize(self, stdin_chars: usize, stdout_stderr_chars: usize) -> TokenUsage {
        if let Some(best) = self.candidates.into_iter().max_by_key(|c| c.total) {
            return TokenUsage {
                input: best.input,
                cached_input: best.cached_input,
                output: best.output,
                reasoning_output: best.reasoning_output,
                total: best.total,
                source: UsageSource::ProviderReported,
                confidence: None,
                cost_usd: None,
                cost_source: None,
            };
        }
        estimate_from_chars(stdin_chars, stdout_stderr_chars)
    }
}

fn div_ceil4(chars: usize) -> u64 {
    ((chars as u64) + 3) / 4
}

/// `input = ceil(stdin_chars/4)`, `output = ceil((stdout+stderr)_chars/4)`.
pub fn estimate_from_chars(stdin_chars: usize, stdout_stderr_chars: usize) -> TokenUsage {
    let input = div_ceil4(stdin_chars);
    let output = div_ceil4(stdout_stderr_chars);
    TokenUsage {
        input,
        cached_input: 0,
        output,
        reasoning_output: 0,
        total: input + output,
        source: UsageSource::EstimatedChars,
        confidence: Some(UsageConfidence::Low),
        cost_usd: None,
        cost_source: None,
    }
}

/// Apply a [`ac_core::RateCard`] to `usage`, filling in `cost_usd`/`cost_source`.
/// `cached_input`/`reasoning_output` fall back to the `input`/`output` rate
/// per spec §4.F when the card carries no dedicated rate for them.
pub fn apply_rate_card(usage: &mut TokenUsage, provider: &str, card: &ac_core::RateCard) {
    let per_1k = |tokens: u64, rate: f64| (tokens as f64 / 1000.0) * rate;
    let cost = per_1k(usage.input, card.input)
        + per_1k(usage.cached_input, card.cached_input_rate())
        + per_1k(usage.output, card.output)
        + per_1k(usage.reasoning_output, card.reasoning_output_rate());
    // Round to the nearest 1e-9 USD per spec §4.F.
    let rounded = (cost * 1e9).round() / 1e9;
    usage.cost_usd = Some(rounded);
    usage.cost_source = Some(provider.to_string());
}

#[cfg(test)]
#[path = "usage_tests.rs"]
mod tests;
