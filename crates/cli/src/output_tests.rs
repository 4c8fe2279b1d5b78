// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn format_time_ago_handles_zero_as_dash() {
    assert_eq!(format_time_ago(0), "-");
}

#[test]
fn format_time_ago_buckets_by_unit() {
    let now_ms =
        std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH).unwrap().as_millis() as u64;
    assert_eq!(format_time_ago(now_ms - 5_000), "5s");
    assert_eq!(format_time_ago(now_ms - 120_000), "2m");
    assert_eq!(format_time_ago(now_ms - 7_200_000), "2h");
    assert_eq!(format_time_ago(now_ms - 2 * 86_400_000), "2d");
}

#[derive(serde::Serialize)]
struct Row {
    name: String,
}

#[test]
fn handle_list_prints_empty_message_for_text() {
    let items: Vec<Row> = Vec::new();
    handle_list(OutputFormat::Text, &items, "nothing here", |_, _| {
        panic!("render_text should not be called for an empty list")
    })
    .unwrap();
}

#[test]
fn handle_list_calls_render_text_when_nonempty() {
    let items = vec![Row { name: "a".into() }];
    let mut rendered = false;
    handle_list(OutputFormat::Text, &items, "nothing here", |rows, _| {
        rendered = rows.len() == 1;
    })
    .unwrap();
    assert!(rendered);
}
