// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn sample_envelope(kind: EventKind) -> EventEnvelope {
    EventEnvelope {
        schema_version: EventEnvelope::CURRENT_SCHEMA_VERSION,
        event_id: EventId::new(),
        correlation_id: "corr-1".to_string(),
        causation_id: None,
        ts_wallclock: DateTime::parse_from_rfc3339("2026-07-28T00:00:00Z").unwrap().with_timezone(&Utc),
        ts_monotonic_ms: 42,
        run_id: RunId::new(),
        session_ref: None,
        actor: "agent_01ARZ3NDEKTSV4RRFFQ69G5FAV".to_string(),
        visibility: Visibility::Team,
        kind,
        prev_event_hash: None,
        event_hash: "deadbeef".to_string(),
    }
}

#[test]
fn type_and_payload_serialize_as_sibling_keys() {
    let envelope = sample_envelope(EventKind::ProviderRaw(ProviderRawPayload {
        raw: serde_json::json!({"chunk": "first"}),
    }));
    let value = serde_json::to_value(&envelope).unwrap();
    assert_eq!(value["type"], "provider_raw");
    assert_eq!(value["payload"]["raw"]["chunk"], "first");
}

#[test]
fn hashable_value_omits_event_hash() {
    let envelope = sample_envelope(EventKind::RunStarted(RunStartedPayload {}));
    let value = envelope.hashable_value();
    assert!(value.get("event_hash").is_none());
    assert_eq!(value["correlation_id"], "corr-1");
}

#[test]
fn unknown_type_deserializes_to_other_without_erroring() {
    let json = serde_json::json!({
        "schema_version": 1,
        "event_id": "evt_01ARZ3NDEKTSV4RRFFQ69G5FAV",
        "correlation_id": "corr-1",
        "ts_wallclock": "2026-07-28T00:00:00Z",
        "ts_monotonic_ms": 42,
        "run_id": "run_01ARZ3NDEKTSV4RRFFQ69G5FAV",
        "actor": "human",
        "visibility": "team",
        "type": "some_future_event",
        "payload": {"anything": "goes"},
        "prev_event_hash": null,
        "event_hash": "deadbeef"
    });
    let envelope: EventEnvelope = serde_json::from_value(json).unwrap();
    assert_eq!(envelope.kind.type_name(), "other");
}

#[test]
fn type_name_matches_serialized_tag() {
    let envelope = sample_envelope(EventKind::PolicyDenied(PolicyDeniedPayload {
        action: "read".to_string(),
        resource_id: "art_1".to_string(),
        rule_id: "vis.team.mismatch".to_string(),
        reason: "team_mismatch".to_string(),
    }));
    assert_eq!(envelope.kind.type_name(), "policy.denied");
}
