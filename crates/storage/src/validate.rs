// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace `validate` (spec §4.I): parse every persisted entity against
//! its schema and collect every issue found, rather than failing fast (per
//! the resolved open question in spec §9).

use crate::layout::{agents_dir, company_yaml_path, context_packs_dir, projects_dir, runs_dir, teams_dir};
use ac_core::{parse_front_matter, Agent, Artifact, Company, ContextPack, MachineConfig, Project, Review, Run, Task, Team, ValidationReport};
use std::path::{Path, PathBuf};

fn read_dirs(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .map(|entries| entries.filter_map(|e| e.ok()).map(|e| e.path()).filter(|p| p.is_dir()).collect())
        .unwrap_or_default()
}

fn read_files_with_ext(dir: &Path, ext: &str) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(ext))
                .collect()
        })
        .unwrap_or_default()
}

fn check_yaml<T: serde::de::DeserializeOwned>(report: &mut ValidationReport, path: &Path) {
    let Ok(raw) = std::fs::read_to_string(path) else {
        report.push(path, "could not read file");
        return;
    };
    if let Err(e) = serde_yaml::from_str::<T>(&raw) {
        report.push(path, format!("schema error: {e}"));
    }
}

/// Validate every entity under `root`, returning every issue found.
pub fn validate(root: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();

    let company_path = company_yaml_path(root);
    if company_path.is_file() {
        check_yaml::<Company>(&mut report, &company_path);
    } else {
        report.push(&company_path, "missing required file");
    }

    let machine_path = crate::layout::machine_yaml_path(root);
    if machine_path.is_file() {
        check_yaml::<MachineConfig>(&mut report, &machine_path);
    } else {
        report.push(&machine_path, "missing required file");
    }

    for team_dir in read_dirs(&teams_dir(root)) {
        check_yaml::<Team>(&mut report, &team_dir.join("team.yaml"));
    }

    for agent_dir in read_dirs(&agents_dir(root)) {
        check_yaml::<Agent>(&mut report, &agent_dir.join("agent.yaml"));
    }

    for project_dir in read_dirs(&projects_dir(root)) {
        check_yaml::<Project>(&mut report, &project_dir.join("project.yaml"));
        let project_id = project_dir.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();

        for task_path in read_files_with_ext(&project_dir.join("tasks"), "md") {
            validate_front_matter::<Task>(&mut report, &task_path);
        }
        for artifact_path in read_files_with_ext(&project_dir.join("artifacts"), "md") {
            validate_artifact(&mut report, &artifact_path);
        }
        for ctx_dir in read_dirs(&context_packs_dir(root, ac_core::ProjectId::from_string(&project_id))) {
            check_yaml::<ContextPack>(&mut report, &ctx_dir.join("manifest.yaml"));
        }
        for run_dir in read_dirs(&runs_dir(root, ac_core::ProjectId::from_string(&project_id))) {
            check_yaml::<Run>(&mut report, &run_dir.join("run.yaml"));

            let events_path = run_dir.join("events.jsonl");
            if events_path.is_file() {
                if let Ok(result) = ac_eventlog::replay(&events_path) {
                    for issue in &result.parse_issues {
                        report.push(&events_path, format!("event parse error at line {}: {}", issue.seq, issue.error));
                    }
                }
            }
        }
    }

    for review_path in read_files_with_ext(&crate::layout::reviews_dir(root), "yaml") {
        check_yaml::<Review>(&mut report, &review_path);
    }

    report
}

fn validate_front_matter<T: serde::de::DeserializeOwned>(report: &mut ValidationReport, path: &Path) {
    let Ok(raw) = std::fs::read_to_string(path) else {
        report.push(path, "could not read file");
        return;
    };
    if let Err(e) = parse_front_matter::<T>(&raw) {
        report.push(path, format!("schema error: {e}"));
    }
}

fn validate_artifact(report: &mut ValidationReport, path: &Path) {
    let Ok(raw) = std::fs::read_to_string(path) else {
        report.push(path, "could not read file");
        return;
    };
    match parse_front_matter::<Artifact>(&raw) {
        Ok((artifact, body)) => {
            if let Err(e) = artifact.validate_body(&body) {
                report.push(path, format!("schema error: {e}"));
            }
        }
        Err(e) => report.push(path, format!("schema error: {e}")),
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
