// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! DDL for the derived SQLite projection. Every table is rebuilt wholesale
//! by [`crate::rebuild::rebuild`]; none of it is the source of truth.

use rusqlite::Connection;

pub fn migrate(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS runs (
            project_id TEXT NOT NULL,
            run_id TEXT NOT NULL PRIMARY KEY,
            created_at TEXT NOT NULL,
            status TEXT NOT NULL,
            provider TEXT NOT NULL,
            agent_id TEXT NOT NULL,
            context_pack_id TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS events (
            project_id TEXT NOT NULL,
            run_id TEXT NOT NULL,
            seq INTEGER NOT NULL,
            ts_wallclock TEXT NOT NULL,
            type TEXT NOT NULL,
            actor TEXT NOT NULL,
            visibility TEXT NOT NULL,
            PRIMARY KEY (project_id, run_id, seq)
        );

        CREATE TABLE IF NOT EXISTS event_parse_errors (
            project_id TEXT NOT NULL,
            run_id TEXT NOT NULL,
            seq INTEGER NOT NULL,
            raw TEXT NOT NULL,
            error TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS reviews (
            project_id TEXT NOT NULL,
            artifact_id TEXT NOT NULL,
            kind TEXT NOT NULL,
            decision TEXT NOT NULL,
            decided_at TEXT NOT NULL,
            actor_id TEXT NOT NULL,
            actor_role TEXT NOT NULL,
            PRIMARY KEY (project_id, artifact_id)
        );

        CREATE TABLE IF NOT EXISTS pending_reviews (
            project_id TEXT NOT NULL,
            artifact_id TEXT NOT NULL,
            kind TEXT NOT NULL,
            visibility TEXT NOT NULL,
            created_at TEXT NOT NULL,
            produced_by TEXT NOT NULL,
            PRIMARY KEY (project_id, artifact_id)
        );

        CREATE TABLE IF NOT EXISTS context_cycles (
            project_id TEXT NOT NULL,
            run_id TEXT NOT NULL PRIMARY KEY,
            count INTEGER NOT NULL,
            source TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS run_usage (
            project_id TEXT NOT NULL,
            run_id TEXT NOT NULL PRIMARY KEY,
            total_tokens INTEGER NOT NULL,
            cost_usd REAL,
            cost_source TEXT,
            provider TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS sources (
            path TEXT NOT NULL PRIMARY KEY,
            mtime_ms INTEGER NOT NULL,
            size INTEGER NOT NULL
        );
        ",
    )
}
