// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Final-text computation (spec §4.F): "compute final text (either from
//! `final_text_file_abs` if present, else by running the provider-specific
//! final-text parser over captured output)".
//!
//! Provider-specific stream-JSON parsing is explicitly out of scope here
//! (spec §1 Non-goals); [`BuiltCommand::final_text_parser`] carries only the
//! dispatch key. A driver registers its parser by name via [`register`];
//! an unregistered name (or none at all) falls back to the captured
//! stdout, trimmed, which is the generic contract every provider satisfies.

use std::collections::HashMap;
use std::sync::OnceLock;
use std::sync::RwLock;

/// A provider-specific parser: captured stdout in, final answer text out.
pub type FinalTextParser = fn(&str) -> String;

fn registry() -> &'static RwLock<HashMap<String, FinalTextParser>> {
    static REGISTRY: OnceLock<RwLock<HashMap<String, FinalTextParser>>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Register a named final-text parser. Call sites outside this crate own
/// concrete provider parsers; this crate only dispatches by name.
pub fn register(name: impl Into<String>, parser: FinalTextParser) {
    registry().write().unwrap_or_else(|e| e.into_inner()).insert(name.into(), parser);
}

/// Resolve the final answer text for a session: the contents of
/// `final_text_file_abs` if present, else the named parser's output over
/// `captured_stdout`, else `captured_stdout` trimmed.
pub fn compute_final_text(
    final_text_file_abs: Option<&std::path::Path>,
    final_text_parser: Option<&str>,
    captured_stdout: &str,
) -> Result<String, crate::error::RuntimeError> {
    if let Some(path) = final_text_file_abs {
        return std::fs::read_to_string(path)
            .map_err(|source| crate::error::RuntimeError::FinalTextFile { path: path.to_path_buf(), source });
    }
    if let Some(name) = final_text_parser {
        if let Some(parser) = registry().read().unwrap_or_else(|e| e.into_inner()).get(name) {
            return Ok(parser(captured_stdout));
        }
    }
    Ok(captured_stdout.trim().to_string())
}

#[cfg(test)]
#[path = "finalize_text_tests.rs"]
mod tests;
