// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read queries over the derived projection. Never mutate truth files; if
//! the database is missing or stale, callers should `sync_workspace` first
//! (most callers go through [`crate::ensure_synced`]).

use rusqlite::params;

use crate::db::Index;
use crate::error::IndexError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReview {
    pub project_id: String,
    pub artifact_id: String,
    pub kind: String,
    pub visibility: String,
    pub created_at: String,
    pub produced_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDecisionRow {
    pub project_id: String,
    pub artifact_id: String,
    pub kind: String,
    pub decision: String,
    pub decided_at: String,
    pub actor_id: String,
    pub actor_role: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunUsageRow {
    pub project_id: String,
    pub run_id: String,
    pub total_tokens: u64,
    pub cost_usd: Option<f64>,
    pub cost_source: Option<String>,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRow {
    pub project_id: String,
    pub run_id: String,
    pub created_at: String,
    pub status: String,
    pub provider: String,
    pub agent_id: String,
    pub context_pack_id: String,
}

impl Index {
    /// Artifacts awaiting a decision, ordered oldest first.
    pub fn pending_reviews(&self, project_id: Option<&str>) -> Result<Vec<PendingReview>, IndexError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT project_id, artifact_id, kind, visibility, created_at, produced_by
                 FROM pending_reviews
                 WHERE ?1 IS NULL OR project_id = ?1
                 ORDER BY created_at ASC",
            )?;
            let rows = stmt
                .query_map(params![project_id], |r| {
                    Ok(PendingReview {
                        project_id: r.get(0)?,
                        artifact_id: r.get(1)?,
                        kind: r.get(2)?,
                        visibility: r.get(3)?,
                        created_at: r.get(4)?,
                        produced_by: r.get(5)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Decided reviews, most recent first.
    pub fn recent_decisions(&self, project_id: Option<&str>, limit: u32) -> Result<Vec<ReviewDecisionRow>, IndexError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT project_id, artifact_id, kind, decision, decided_at, actor_id, actor_role
                 FROM reviews
                 WHERE ?1 IS NULL OR project_id = ?1
                 ORDER BY decided_at DESC
                 LIMIT ?2",
            )?;
            let rows = stmt
                .query_map(params![project_id, limit], |r| {
                    Ok(ReviewDecisionRow {
                        project_id: r.get(0)?,
                        artifact_id: r.get(1)?,
                        kind: r.get(2)?,
                        decision: r.get(3)?,
                        decided_at: r.get(4)?,
                        actor_id: r.get(5)?,
                        actor_role: r.get(6)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn run_usage(&self, project_id: &str, run_id: &str) -> Result<Option<RunUsageRow>, IndexError> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT project_id, run_id, total_tokens, cost_usd, cost_source, provider
                 FROM run_usage WHERE project_id = ?1 AND run_id = ?2",
                params![project_id, run_id],
                |r| {
                    Ok(RunUsageRow {
                        project_id: r.get(0)?,
                        run_id: r.get(1)?,
                        total_tokens: r.get::<_, i64>(2)? as u64,
                        cost_usd: r.get(3)?,
                        cost_source: r.get(4)?,
                        provider: r.get(5)?,
                    })
                },
            )
            .map(Some)
            .or_else(|e| if e == rusqlite::Error::QueryReturnedNoRows { Ok(None) } else { Err(e.into()) })
        })
    }

    pub fn runs_for_project(&self, project_id: &str) -> Result<Vec<RunRow>, IndexError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT project_id, run_id, created_at, status, provider, agent_id, context_pack_id
                 FROM runs WHERE project_id = ?1 ORDER BY created_at DESC",
            )?;
            let rows = stmt
                .query_map(params![project_id], |r| {
                    Ok(RunRow {
                        project_id: r.get(0)?,
                        run_id: r.get(1)?,
                        created_at: r.get(2)?,
                        status: r.get(3)?,
                        provider: r.get(4)?,
                        agent_id: r.get(5)?,
                        context_pack_id: r.get(6)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn event_parse_error_count(&self, project_id: &str, run_id: &str) -> Result<u64, IndexError> {
        self.with_conn(|conn| {
            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM event_parse_errors WHERE project_id = ?1 AND run_id = ?2",
                params![project_id, run_id],
                |r| r.get(0),
            )?;
            Ok(count as u64)
        })
    }
}
