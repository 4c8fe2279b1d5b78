// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Full rebuild: walk every run, event log, artifact, and review under a
//! workspace and replace the index's contents wholesale, in one transaction.
//!
//! Rebuild never mutates truth files — it only reads `run.yaml`,
//! `events.jsonl`, `artifacts/*.md`, and `inbox/reviews/*.yaml`.

use ac_core::{Artifact, Review, Run};
use rusqlite::{params, Connection};
use std::collections::HashMap;
use std::path::Path;

use crate::db::Index;
use crate::error::IndexError;

struct ArtifactRow {
    project_id: String,
    kind: String,
    visibility: String,
    created_at: String,
    produced_by: String,
}

fn read_dir_names(dir: &Path) -> Vec<std::path::PathBuf> {
    std::fs::read_dir(dir)
        .map(|entries| entries.filter_map(|e| e.ok()).map(|e| e.path()).collect())
        .unwrap_or_default()
}

fn ms_to_rfc3339(ms: u64) -> String {
    chrono::DateTime::<chrono::Utc>::from_timestamp_millis(ms as i64)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}

/// Rebuild the entire index from the truth tree rooted at `workspace_root`.
pub fn rebuild(index: &Index, workspace_root: &Path) -> Result<(), IndexError> {
    index.with_conn_mut(|conn| rebuild_inner(conn, workspace_root))
}

fn rebuild_inner(conn: &mut Connection, workspace_root: &Path) -> Result<(), IndexError> {
    let projects_dir = workspace_root.join("work").join("projects");
    let tx = conn.transaction()?;

    tx.execute("DELETE FROM runs", [])?;
    tx.execute("DELETE FROM events", [])?;
    tx.execute("DELETE FROM event_parse_errors", [])?;
    tx.execute("DELETE FROM reviews", [])?;
    tx.execute("DELETE FROM pending_reviews", [])?;
    tx.execute("DELETE FROM context_cycles", [])?;
    tx.execute("DELETE FROM run_usage", [])?;

    let mut artifacts_by_id: HashMap<String, ArtifactRow> = HashMap::new();

    for project_dir in read_dir_names(&projects_dir) {
        if !project_dir.is_dir() {
            continue;
        }
        let project_id = project_dir.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();

        index_runs(&tx, &project_id, &project_dir)?;
        index_artifacts(&project_id, &project_dir, &mut artifacts_by_id);
    }

    index_reviews(&tx, workspace_root, &artifacts_by_id)?;
    index_pending_reviews(&tx, &artifacts_by_id)?;

    tx.commit()?;
    Ok(())
}

fn index_runs(tx: &rusqlite::Transaction<'_>, project_id: &str, project_dir: &Path) -> Result<(), IndexError> {
    let runs_dir = project_dir.join("runs");
    for run_dir in read_dir_names(&runs_dir) {
        if !run_dir.is_dir() {
            continue;
        }
        let run_yaml_path = run_dir.join("run.yaml");
        let Ok(raw) = std::fs::read_to_string(&run_yaml_path) else { continue };
        let Ok(run) = serde_yaml::from_str::<Run>(&raw) else { continue };

        tx.execute(
            "INSERT INTO runs (project_id, run_id, created_at, status, provider, agent_id, context_pack_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                project_id,
                run.id.as_str(),
                ms_to_rfc3339(run.created_at_ms),
                run.status.to_string(),
                run.provider,
                run.agent_id.as_str(),
                run.context_pack_id.as_str(),
            ],
        )?;

        if let Some(usage) = &run.usage {
            tx.execute(
                "INSERT INTO run_usage (project_id, run_id, total_tokens, cost_usd, cost_source, provider)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![project_id, run.id.as_str(), usage.total as i64, usage.cost_usd, usage.cost_source, run.provider],
            )?;
        }
        if let Some(cycles) = &run.context_cycles {
            tx.execute(
                "INSERT INTO context_cycles (project_id, run_id, count, source) VALUES (?1, ?2, ?3, ?4)",
                params![project_id, run.id.as_str(), cycles.count as i64, cycles.source.to_string()],
            )?;
        }

        let events_path = run_dir.join("events.jsonl");
        let replay = ac_eventlog::replay(&events_path).map_err(|e| IndexError::Io {
            path: events_path.clone(),
            source: std::io::Error::other(e.to_string()),
        })?;
        for (seq, envelope) in replay.events.iter().enumerate() {
            tx.execute(
                "INSERT INTO events (project_id, run_id, seq, ts_wallclock, type, actor, visibility)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    project_id,
                    run.id.as_str(),
                    (seq + 1) as i64,
                    envelope.ts_wallclock.to_rfc3339(),
                    envelope.kind.type_name(),
                    envelope.actor,
                    envelope.visibility.to_string(),
                ],
            )?;
        }
        for issue in &replay.parse_issues {
            tx.execute(
                "INSERT INTO event_parse_errors (project_id, run_id, seq, raw, error) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![project_id, run.id.as_str(), issue.seq as i64, issue.raw, issue.error],
            )?;
        }
    }
    Ok(())
}

fn index_artifacts(project_id: &str, project_dir: &Path, out: &mut HashMap<String, ArtifactRow>) {
    let artifacts_dir = project_dir.join("artifacts");
    for path in read_dir_names(&artifacts_dir) {
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let Ok(raw) = std::fs::read_to_string(&path) else { continue };
        let Ok((artifact, _body)) = ac_core::parse_front_matter::<Artifact>(&raw) else { continue };
        out.insert(
            artifact.id.as_str().to_string(),
            ArtifactRow {
                project_id: project_id.to_string(),
                kind: artifact.kind.to_string(),
                visibility: artifact.visibility.to_string(),
                created_at: ms_to_rfc3339(artifact.created_at_ms),
                produced_by: artifact.produced_by.as_str().to_string(),
            },
        );
    }
}

fn index_reviews(
    tx: &rusqlite::Transaction<'_>,
    workspace_root: &Path,
    artifacts_by_id: &HashMap<String, ArtifactRow>,
) -> Result<(), IndexError> {
    let reviews_dir = workspace_root.join("inbox").join("reviews");
    for path in read_dir_names(&reviews_dir) {
        if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
            continue;
        }
        let Ok(raw) = std::fs::read_to_string(&path) else { continue };
        let Ok(review) = serde_yaml::from_str::<Review>(&raw) else { continue };
        let subject = review.subject.as_str();
        let Some(artifact) = artifacts_by_id.get(subject) else { continue };

        tx.execute(
            "INSERT OR REPLACE INTO reviews
                (project_id, artifact_id, kind, decision, decided_at, actor_id, actor_role)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                artifact.project_id,
                subject,
                artifact.kind,
                review.decision.to_string(),
                ms_to_rfc3339(review.created_at_ms),
                review.actor_id,
                review.actor_role.to_string(),
            ],
        )?;
    }
    Ok(())
}

fn index_pending_reviews(
    tx: &rusqlite::Transaction<'_>,
    artifacts_by_id: &HashMap<String, ArtifactRow>,
) -> Result<(), IndexError> {
    for (artifact_id, row) in artifacts_by_id {
        let requires_review = ac_core::REVIEW_REQUIRED_ARTIFACT_TYPES.iter().any(|k| k.to_string() == row.kind);
        if !requires_review {
            continue;
        }
        let decided: i64 = tx.query_row(
            "SELECT COUNT(*) FROM reviews WHERE artifact_id = ?1",
            params![artifact_id],
            |r| r.get(0),
        )?;
        if decided > 0 {
            continue;
        }
        tx.execute(
            "INSERT INTO pending_reviews (project_id, artifact_id, kind, visibility, created_at, produced_by)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![row.project_id, artifact_id, row.kind, row.visibility, row.created_at, row.produced_by],
        )?;
    }
    Ok(())
}
