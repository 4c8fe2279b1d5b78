// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A long-lived connection to `.local/index.sqlite`, opened in WAL mode and
//! guarded by a mutex so the one short exclusive-write transaction per
//! rebuild/sync never races a concurrent reader connection opened elsewhere.

use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

use crate::error::IndexError;
use crate::schema;

pub struct Index {
    path: PathBuf,
    conn: Mutex<Connection>,
}

impl Index {
    /// Open (creating if absent) the index database at `path`, enable WAL
    /// journaling, and ensure the schema exists.
    pub fn open(path: &Path) -> Result<Self, IndexError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| IndexError::Io { path: path.to_owned(), source: e })?;
        }
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        schema::migrate(&conn)?;
        Ok(Self { path: path.to_owned(), conn: Mutex::new(conn) })
    }

    /// Open an index rooted at `<workspace>/.local/index.sqlite`.
    pub fn open_for_workspace(workspace_root: &Path) -> Result<Self, IndexError> {
        Self::open(&workspace_root.join(".local").join("index.sqlite"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> Result<T, IndexError>) -> Result<T, IndexError> {
        let conn = self.conn.lock();
        f(&conn)
    }

    pub(crate) fn with_conn_mut<T>(
        &self,
        f: impl FnOnce(&mut Connection) -> Result<T, IndexError>,
    ) -> Result<T, IndexError> {
        let mut conn = self.conn.lock();
        f(&mut conn)
    }
}
