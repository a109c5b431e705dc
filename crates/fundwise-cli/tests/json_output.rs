//! End-to-end tests for the `fundwise` binary's --json mode
//!
//! Log lines must never reach stdout, or the output stops being JSON.

use std::io::Write;
use std::process::Command;

const PROFILE: &str = r#"{
    "monthlyIncome": 20000,
    "monthlyExpenses": 19000,
    "goals": [
        {"id": "car", "name": "Car", "targetAmount": 100000, "currentAmount": 25000, "targetDate": "2027-10-18"}
    ]
}"#;

fn profile_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(PROFILE.as_bytes()).unwrap();
    file
}

/// Run the binary and parse stdout as JSON
fn run_json(args: &[&str]) -> serde_json::Value {
    let profile = profile_file();
    let output = Command::new(env!("CARGO_BIN_EXE_fundwise"))
        .arg("--profile")
        .arg(profile.path())
        .args(["--as-of", "2026-10-18", "--json"])
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run fundwise");

    assert!(
        output.status.success(),
        "fundwise {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout of fundwise {:?} is not JSON ({}): {}",
            args,
            e,
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

#[test]
fn test_goals_json_is_parseable() {
    let value = run_json(&["goals"]);
    assert_eq!(value["goals"][0]["goal_id"], "car");
    assert_eq!(value["goals"][0]["status"], "needs_action");
}

#[test]
fn test_json_survives_verbose_logging() {
    let value = run_json(&["--verbose", "afford", "--price", "50"]);
    assert_eq!(value["affordable"], true);
    assert_eq!(value["impact"], "low");
}

#[test]
fn test_plan_and_health_json_are_parseable() {
    let plan = run_json(&["plan", "--goal", "car"]);
    assert_eq!(plan["summary"]["goal_id"], "car");

    let health = run_json(&["health"]);
    assert!(health["score"].as_u64().unwrap() <= 100);
}
