// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ac-runtime: the subprocess session runtime (spec §4.F) and the
//! process-wide session registry (spec §4.L).
//!
//! A session is one provider-CLI subprocess invocation bound to a single
//! run. [`session::begin_run`] starts the run record; [`session::drive_session`]
//! spawns the child, streams its output into `provider.raw` events while
//! feeding the usage/cycle extractors, and finalizes the run on exit or
//! cancellation. [`registry::SessionRegistry`] is the process-local,
//! channel-driven map of sessions that callers launch/poll/collect/stop
//! through rather than touching directly.

pub mod command;
pub mod cycles;
pub mod error;
pub mod finalize_text;
pub mod registry;
pub mod session;
pub mod usage;

pub use command::{BuiltCommand, DriverCapabilities};
pub use error::RuntimeError;
pub use finalize_text::{register as register_final_text_parser, FinalTextParser};
pub use registry::{SessionRegistry, SessionStatus};
pub use session::{begin_run, drive_session, SessionOutcome, SessionParams};
