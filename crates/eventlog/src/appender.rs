// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locked, hash-chained appender for a single run's `events.jsonl`.
//!
//! Opening an appender recovers the chain tip by scanning the file for the
//! last well-formed line. A torn trailing line (the expected shape of a
//! crash mid-write) is tolerated here exactly as it is by the replay reader
//! in [`crate::reader`]: it is never rewritten or dropped, only skipped when
//! recovering the hash to chain the next append from.

use crate::error::EventLogError;
use crate::hash::event_hash;
use ac_core::{EventEnvelope, EventId, EventKind, RunId, Visibility};
use chrono::{DateTime, Utc};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// The caller-supplied parts of a new event; the appender fills in
/// `event_id`, `schema_version`, `prev_event_hash`, and `event_hash`.
pub struct NewEvent {
    pub correlation_id: String,
    pub causation_id: Option<String>,
    pub session_ref: Option<String>,
    pub actor: String,
    pub visibility: Visibility,
    pub kind: EventKind,
}

/// An open, lockedevents.jsonl file positioned for the next append.
pub struct Appender {
    file: File,
    path: PathBuf,
    last_event_hash: Option<String>,
    ends_with_newline: bool,
}

fn io_err(path: &Path, source: std::io::Error) -> EventLogError {
    EventLogError::Io { path: path.to_owned(), source }
}

impl Appender {
    /// Open (creating if absent) the events file at `path`, acquire an
    /// exclusive advisory lock for the lifetime of this handle, and recover
    /// the hash-chain tip by scanning existing content.
    pub fn open(path: &Path) -> Result<Self, EventLogError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| io_err(path, e))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(path)
            .map_err(|e| io_err(path, e))?;
        file.try_lock_exclusive().map_err(|e| EventLogError::Locked { path: path.to_owned(), source: e })?;

        let (last_event_hash, ends_with_newline) = Self::recover(path)?;

        Ok(Self { file, path: path.to_owned(), last_event_hash, ends_with_newline })
    }

    /// Scan the file for the hash of the last well-formed line, tolerating
    /// a torn (unparseable, or missing a trailing newline) final line.
    fn recover(path: &Path) -> Result<(Option<String>, bool), EventLogError> {
        let read_handle = OpenOptions::new().read(true).open(path).map_err(|e| io_err(path, e))?;
        let mut reader = BufReader::new(read_handle);
        let mut last_hash = None;
        let mut ends_with_newline = true;
        let mut raw = Vec::new();

        loop {
            raw.clear();
            let n = reader.read_until(b'\n', &mut raw).map_err(|e| io_err(path, e))?;
            if n == 0 {
                break;
            }
            let had_newline = raw.last() == Some(&b'\n');
            ends_with_newline = had_newline;
            let line = if had_newline { &raw[..raw.len() - 1] } else { &raw[..] };
            if line.is_empty() {
                continue;
            }
            match std::str::from_utf8(line).ok().and_then(|s| serde_json::from_str::<EventEnvelope>(s).ok()) {
                Some(envelope) => last_hash = Some(envelope.event_hash),
                None => {
                    // Torn or corrupt line: leave it untouched, don't chain from it.
                    continue;
                }
            }
        }

        Ok((last_hash, ends_with_newline))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn last_event_hash(&self) -> Option<&str> {
        self.last_event_hash.as_deref()
    }

    /// Append one event, chaining it from the current tip, and fsync before
    /// returning. The run-terminal-state check is the caller's
    /// responsibility (only the owner of `run.yaml` can answer it).
    pub fn append(
        &mut self,
        run_id: RunId,
        new_event: NewEvent,
        ts_wallclock: DateTime<Utc>,
        ts_monotonic_ms: u64,
    ) -> Result<EventEnvelope, EventLogError> {
        let mut envelope = EventEnvelope {
            schema_version: EventEnvelope::CURRENT_SCHEMA_VERSION,
            event_id: EventId::new(),
            correlation_id: new_event.correlation_id,
            causation_id: new_event.causation_id,
            ts_wallclock,
            ts_monotonic_ms,
            run_id,
            session_ref: new_event.session_ref,
            actor: new_event.actor,
            visibility: new_event.visibility,
            kind: new_event.kind,
            prev_event_hash: self.last_event_hash.clone(),
            event_hash: String::new(),
        };
        envelope.event_hash = event_hash(&envelope);

        let mut line = serde_json::to_vec(&envelope)?;
        line.push(b'\n');

        if !self.ends_with_newline {
            self.file.write_all(b"\n").map_err(|e| io_err(&self.path, e))?;
        }
        self.file.write_all(&line).map_err(|e| io_err(&self.path, e))?;
        self.file.sync_all().map_err(|e| io_err(&self.path, e))?;

        self.ends_with_newline = true;
        self.last_event_hash = Some(envelope.event_hash.clone());
        Ok(envelope)
    }
}

impl Drop for Appender {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

#[cfg(test)]
#[path = "appender_tests.rs"]
mod tests;
