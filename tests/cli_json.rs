mod common;

use common::*;
use serde_json::Value;

fn events(stdout: &str) -> Vec<Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("every line is a JSON object"))
        .collect()
}

#[test]
fn json_emits_ndjson_event_stream() {
    let env = TestEnv::new();
    env.write_file("servers.json", CLEAN_CONFIG);

    let result = env.run(&["--json", "servers.json"]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    let events = events(&result.stdout);
    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[0]["files"], 1);
    assert_eq!(events[1]["event"], "file_start");

    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["errors"], 0);
    assert_eq!(last["success"], true);

    assert!(events.iter().any(|e| e["event"] == "check"));
    assert!(events
        .iter()
        .any(|e| e["event"] == "file_complete" && e["success"] == true));
}

#[test]
fn json_failure_sets_exit_code_and_lists_errors() {
    let env = TestEnv::new();
    env.write_file("conflict.json", CONFLICT_CONFIG);

    let result = env.run(&["--json", "conflict.json"]);
    assert_eq!(result.exit_code, 1);

    let events = events(&result.stdout);
    let file_complete = events
        .iter()
        .find(|e| e["event"] == "file_complete")
        .unwrap();
    assert_eq!(file_complete["errors"].as_array().unwrap().len(), 2);

    let last = events.last().unwrap();
    assert_eq!(last["success"], false);
    assert_eq!(last["failed_files"], 1);
}

#[test]
fn json_output_has_no_text_report() {
    let env = TestEnv::new();
    env.write_file("servers.json", CLEAN_CONFIG);

    let result = env.run_with_env(&["--json", "servers.json"], &[("GITHUB_ACTIONS", "true")]);

    assert!(!result.stdout.contains("Summary:"));
    assert!(!result.stdout.contains("::"));
}
