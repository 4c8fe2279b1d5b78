// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The launch-time description of a provider CLI invocation, and the
//! capabilities a driver declares about how it can be run.

use std::path::PathBuf;

/// A fully-resolved subprocess invocation, ready to spawn. Building the
/// argv (resolving the provider binary, assembling flags, choosing a
/// working directory) is the caller's job; this crate only spawns and
/// drives what it's handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltCommand {
    pub argv: Vec<String>,
    pub stdin_text: Option<String>,
    /// If the driver writes its final answer to a file rather than (or in
    /// addition to) stdout, its absolute path.
    pub final_text_file_abs: Option<PathBuf>,
    /// Name of the provider-specific parser [`crate::finalize`] should run
    /// over captured stdout when `final_text_file_abs` is absent. Parsing
    /// itself is out of scope here; only the dispatch key is carried.
    pub final_text_parser: Option<String>,
}

impl BuiltCommand {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv, stdin_text: None, final_text_file_abs: None, final_text_parser: None }
    }

    pub fn stdin_text(mut self, text: impl Into<String>) -> Self {
        self.stdin_text = Some(text.into());
        self
    }

    pub fn final_text_file_abs(mut self, path: impl Into<PathBuf>) -> Self {
        self.final_text_file_abs = Some(path.into());
        self
    }

    pub fn final_text_parser(mut self, name: impl Into<String>) -> Self {
        self.final_text_parser = Some(name.into());
        self
    }
}

/// What a driver is able to do. Declared per driver, not inferred from the
/// command; the runtime consults it to decide whether e.g. cancellation or
/// resumption is meaningful for a given session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DriverCapabilities {
    pub streaming: bool,
    pub resumable: bool,
    pub token_usage: bool,
    pub patch_export: bool,
    pub worktree_isolation_required: bool,
}
