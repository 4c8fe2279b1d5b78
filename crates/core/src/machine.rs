// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `.local/machine.yaml`: machine-local configuration (provider binaries,
//! repo roots, optional pricing) that is never replicated across workspaces.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// One provider's per-1k-token rate card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateCard {
    pub input: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_input: Option<f64>,
    pub output: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_output: Option<f64>,
}

impl RateCard {
    /// `cached_input`/`reasoning_output` fall back to the `input`/`output`
    /// rate respectively when the card doesn't carry a dedicated rate.
    pub fn cached_input_rate(&self) -> f64 {
        self.cached_input.unwrap_or(self.input)
    }

    pub fn reasoning_output_rate(&self) -> f64 {
        self.reasoning_output.unwrap_or(self.output)
    }
}

/// `.local/machine.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineConfig {
    pub schema_version: u32,
    #[serde(rename = "type")]
    pub kind: MachineConfigKind,
    #[serde(default)]
    pub repo_roots: HashMap<String, PathBuf>,
    #[serde(default)]
    pub provider_bins: HashMap<String, PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_pricing_usd_per_1k_tokens: Option<HashMap<String, RateCard>>,
}

/// The literal discriminant this file's `type` field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineConfigKind {
    Machine,
}

impl MachineConfig {
    pub const CURRENT_SCHEMA_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            schema_version: Self::CURRENT_SCHEMA_VERSION,
            kind: MachineConfigKind::Machine,
            repo_roots: HashMap::new(),
            provider_bins: HashMap::new(),
            provider_pricing_usd_per_1k_tokens: None,
        }
    }

    /// Resolve the rate card for `provider`, trying the provider's canonical
    /// alias (see [`canonical_provider_alias`]) then falling back to the
    /// `"default"` entry.
    pub fn rate_card_for(&self, provider: &str) -> Option<&RateCard> {
        let pricing = self.provider_pricing_usd_per_1k_tokens.as_ref()?;
        let canonical = canonical_provider_alias(provider);
        pricing.get(canonical).or_else(|| pricing.get("default"))
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a driver-specific provider identifier to the canonical name used to
/// key `provider_pricing_usd_per_1k_tokens`. Unknown providers pass through
/// unchanged.
pub fn canonical_provider_alias(provider: &str) -> &str {
    match provider {
        "codex_app_server" => "codex",
        "claude_code" => "claude",
        other => other,
    }
}

#[cfg(test)]
#[path = "machine_tests.rs"]
mod tests;
