// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace lifecycle: init, validate, doctor.

use crate::prelude::*;

#[test]
fn init_creates_a_workspace_validate_and_doctor_pass() {
    let ws = Workspace::empty();
    ws.ac().args(["workspace", "init", "--name", "Acme"]).passes().stdout_has("Acme");

    ws.ac().args(["workspace", "validate"]).passes().stdout_has("valid");
    ws.ac().args(["workspace", "doctor"]).passes();
}

#[test]
fn init_twice_without_force_fails() {
    let ws = Workspace::empty();
    ws.ac().args(["workspace", "init", "--name", "Acme"]).passes();
    ws.ac().args(["workspace", "init", "--name", "Acme"]).fails_with(1);
}

#[test]
fn init_twice_with_force_succeeds() {
    let ws = Workspace::empty();
    ws.ac().args(["workspace", "init", "--name", "Acme"]).passes();
    ws.ac().args(["workspace", "init", "--name", "Acme", "--force"]).passes();
}

#[test]
fn validate_on_an_uninitialized_directory_reports_issues() {
    let ws = Workspace::empty();
    ws.ac().args(["workspace", "validate"]).fails_with(2);
}
