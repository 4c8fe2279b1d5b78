// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Append-only, hash-chained JSONL event logs for AgentCompany runs.
//!
//! One `events.jsonl` file per run. Appends are serialized by a per-file
//! advisory lock held by [`Appender`] for its lifetime; replay never fails
//! on a corrupt or torn line, instead reporting it alongside the events that
//! did parse. This crate owns the event-log file format only — callers
//! (`ac-storage`) decide *when* it is legal to append, e.g. by checking the
//! owning run's recorded status before calling [`Appender::append`].

pub mod appender;
pub mod error;
pub mod hash;
pub mod reader;

pub use appender::{Appender, NewEvent};
pub use error::EventLogError;
pub use hash::{canonical_json, event_hash};
pub use reader::{replay, replay_verified, ParseIssue, ReplayResult, VerificationIssue, VerificationIssueCode};
