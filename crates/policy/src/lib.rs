// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ac-policy: the pure policy evaluator and its write-time enforcement gate.
//!
//! [`decision::evaluate_policy`] is total and side-effect-free — the same
//! `(actor, action, resource)` triple always yields the same decision.
//! [`gate::enforce`] wraps it for write paths: on denial it makes a
//! best-effort attempt to record a `policy.denied` audit event before
//! returning the error, and a logging failure there never masks the denial.

pub mod decision;
pub mod gate;

pub use decision::{evaluate_policy, Action, Actor, PolicyDecision, Resource};
pub use gate::{enforce, PolicyDenied};
