use serde_json::json;

use super::*;
use crate::model::JsonKind;

fn scan(document: &Value) -> (Option<ScoreBreakdownHit<'_>>, ScanStats) {
    let out = run_stage2(document).unwrap();
    (out.hit, out.stats)
}

#[test]
fn test_single_match_reports_all_fields() {
    let doc = json!({"blueprint": {"blocks": [{
        "blockId": "b1",
        "individualCandidates": {"c1": {"exercises": [
            {"name": "Squat", "scoreBreakdown": {"form": 8}}
        ]}}
    }]}});

    let (hit, stats) = scan(&doc);
    let hit = hit.unwrap();
    assert_eq!(hit.block_index, 0);
    assert_eq!(hit.block_id, Some(&json!("b1")));
    assert_eq!(hit.client_id, "c1");
    assert_eq!(hit.exercise_index, 0);
    assert_eq!(hit.exercise_name, Some(&json!("Squat")));
    assert_eq!(hit.score_breakdown, &json!({"form": 8}));
    assert_eq!(
        hit.path,
        "$.blueprint.blocks[0].individualCandidates[\"c1\"].exercises[0]"
    );
    assert_eq!(
        stats,
        ScanStats {
            blocks: 1,
            candidates: 1,
            exercises: 1
        }
    );
}

#[test]
fn test_first_match_wins_across_blocks() {
    let doc = json!({"blueprint": {"blocks": [
        {"blockId": "A", "individualCandidates": {"c1": {"exercises": [
            {"name": "Lunge"},
            {"name": "Deadlift", "scoreBreakdown": {"total": 4}}
        ]}}},
        {"blockId": "B", "individualCandidates": {"c1": {"exercises": [
            {"name": "Squat", "scoreBreakdown": {"total": 9}}
        ]}}}
    ]}});

    let (hit, stats) = scan(&doc);
    let hit = hit.unwrap();
    assert_eq!(hit.block_id, Some(&json!("A")));
    assert_eq!(hit.exercise_name, Some(&json!("Deadlift")));
    assert_eq!(hit.exercise_index, 1);
    assert_eq!(stats.blocks, 1);
    assert_eq!(stats.exercises, 2);
}

#[test]
fn test_first_match_follows_candidate_key_order() {
    let doc: Value = serde_json::from_str(
        r#"{"blueprint":{"blocks":[{"blockId":"b1","individualCandidates":{
            "zoe":{"exercises":[{"name":"Row","scoreBreakdown":{"base":1}}]},
            "adam":{"exercises":[{"name":"Press","scoreBreakdown":{"base":2}}]}
        }}]}}"#,
    )
    .unwrap();

    let (hit, _) = scan(&doc);
    assert_eq!(hit.unwrap().client_id, "zoe");
}

#[test]
fn test_no_blueprint_is_not_found() {
    let doc = json!({});
    let (hit, stats) = scan(&doc);
    assert!(hit.is_none());
    assert_eq!(stats, ScanStats::default());
}

#[test]
fn test_empty_candidates_everywhere_is_not_found() {
    let doc = json!({"blueprint": {"blocks": [
        {"blockId": "b1", "individualCandidates": {}},
        {"blockId": "b2", "individualCandidates": {}}
    ]}});

    let (hit, stats) = scan(&doc);
    assert!(hit.is_none());
    assert_eq!(stats.blocks, 2);
    assert_eq!(stats.candidates, 0);
}

#[test]
fn test_exercises_without_breakdown_are_all_visited() {
    let doc = json!({"blueprint": {"blocks": [
        {"blockId": "b1", "individualCandidates": {
            "c1": {"exercises": [{"name": "A"}, {"name": "B"}]},
            "c2": {}
        }},
        {"blockId": "b2"}
    ]}});

    let (hit, stats) = scan(&doc);
    assert!(hit.is_none());
    assert_eq!(
        stats,
        ScanStats {
            blocks: 2,
            candidates: 2,
            exercises: 2
        }
    );
}

#[test]
fn test_malformed_data_after_match_is_not_visited() {
    let doc = json!({"blueprint": {"blocks": [
        {"blockId": "b1", "individualCandidates": {"c1": {"exercises": [
            {"name": "Squat", "scoreBreakdown": {}}
        ]}}},
        "not a block"
    ]}});

    let (hit, _) = scan(&doc);
    assert_eq!(hit.unwrap().block_id, Some(&json!("b1")));
}

#[test]
fn test_malformed_exercise_before_match_fails() {
    let doc = json!({"blueprint": {"blocks": [
        {"blockId": "b1", "individualCandidates": {"c1": {"exercises": [
            "Squat",
            {"name": "Row", "scoreBreakdown": {}}
        ]}}}
    ]}});

    let err = run_stage2(&doc).unwrap_err();
    assert_eq!(
        err.path,
        "$.blueprint.blocks[0].individualCandidates[\"c1\"].exercises[0]"
    );
    assert_eq!(err.expected, JsonKind::Object);
    assert_eq!(err.found, JsonKind::String);
}

#[test]
fn test_report_context_carries_hit_fields() {
    let doc = json!({"blueprint": {"blocks": [{"blockId": 12, "individualCandidates": {
        "c9": {"exercises": [{"scoreBreakdown": 3}]}
    }}]}});

    let (hit, _) = scan(&doc);
    let ctx = hit.unwrap().report_context();
    assert_eq!(ctx.block_id, Some(&json!(12)));
    assert_eq!(ctx.client_id, "c9");
    assert_eq!(ctx.exercise_name, None);
    assert_eq!(ctx.score_breakdown, &json!(3));
}
