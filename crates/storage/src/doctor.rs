// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace `doctor` (spec §4.I): operational health checks beyond schema
//! validation — binaries resolve, the index opens, event logs replay.

use crate::layout::{projects_dir, runs_dir, REQUIRED_FILES};
use crate::machine::read_machine_config;
use ac_core::ProjectId;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorCheck {
    pub name: &'static str,
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct DoctorReport {
    pub checks: Vec<DoctorCheck>,
}

impl DoctorReport {
    pub fn ok(&self) -> bool {
        self.checks.iter().all(|c| c.ok)
    }
}

fn push(report: &mut DoctorReport, name: &'static str, ok: bool, message: impl Into<String>) {
    report.checks.push(DoctorCheck { name, ok, message: message.into() });
}

/// Run every doctor check against `root`.
pub fn doctor(root: &Path) -> DoctorReport {
    let mut report = DoctorReport::default();

    check_required_files(&mut report, root);
    check_provider_binaries(&mut report, root);
    check_index_opens(&mut report, root);
    check_event_logs_replayable(&mut report, root);

    report
}

fn check_required_files(report: &mut DoctorReport, root: &Path) {
    let missing: Vec<&str> = REQUIRED_FILES.iter().filter(|f| !root.join(f).is_file()).copied().collect();
    if missing.is_empty() {
        push(report, "required_files", true, "all required files present");
    } else {
        push(report, "required_files", false, format!("missing: {}", missing.join(", ")));
    }
}

fn check_provider_binaries(report: &mut DoctorReport, root: &Path) {
    let config = match read_machine_config(root) {
        Ok(c) => c,
        Err(e) => {
            push(report, "provider_binaries", false, format!("machine.yaml unreadable: {e}"));
            return;
        }
    };
    if config.provider_bins.is_empty() {
        push(report, "provider_binaries", true, "no provider binaries configured");
        return;
    }
    let mut unresolved = Vec::new();
    for (provider, bin) in &config.provider_bins {
        let resolves = bin.is_absolute() && bin.is_file() || which::which(bin).is_ok();
        if !resolves {
            unresolved.push(provider.clone());
        }
    }
    if unresolved.is_empty() {
        push(report, "provider_binaries", true, "all configured provider binaries resolve");
    } else {
        push(report, "provider_binaries", false, format!("unresolved: {}", unresolved.join(", ")));
    }
}

fn check_index_opens(report: &mut DoctorReport, root: &Path) {
    match ac_index::Index::open_for_workspace(root) {
        Ok(_) => push(report, "index_db", true, "index database opens"),
        Err(e) => push(report, "index_db", false, format!("index database did not open: {e}")),
    }
}

fn check_event_logs_replayable(report: &mut DoctorReport, root: &Path) {
    let mut parse_errors = 0usize;
    let mut logs_checked = 0usize;

    let Ok(projects) = std::fs::read_dir(projects_dir(root)) else {
        push(report, "event_logs", true, "no projects yet");
        return;
    };
    for project in projects.filter_map(|e| e.ok()) {
        let project_id = ProjectId::from_string(project.file_name().to_string_lossy());
        let Ok(runs) = std::fs::read_dir(runs_dir(root, project_id)) else { continue };
        for run in runs.filter_map(|e| e.ok()) {
            let events_path = run.path().join("events.jsonl");
            if !events_path.is_file() {
                continue;
            }
            logs_checked += 1;
            match ac_eventlog::replay(&events_path) {
                Ok(result) => parse_errors += result.parse_issues.len(),
                Err(_) => parse_errors += 1,
            }
        }
    }

    if parse_errors == 0 {
        push(report, "event_logs", true, format!("{logs_checked} event log(s) replay cleanly"));
    } else {
        push(report, "event_logs", false, format!("{parse_errors} parse issue(s) across {logs_checked} log(s)"));
    }
}

#[cfg(test)]
#[path = "doctor_tests.rs"]
mod tests;
