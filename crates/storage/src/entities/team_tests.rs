// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

#[test]
fn create_then_read_roundtrips() {
    let dir = tempdir().unwrap();
    let team = create_team(dir.path(), "Payments", 1_000).unwrap();

    let loaded = read_team(dir.path(), team.id).unwrap();
    assert_eq!(loaded.name, "Payments");
    assert_eq!(loaded.id, team.id);
}
