/// CLI integration tests for cadence
///
/// These tests exercise the CLI commands as a black box: creating series,
/// backfilling missed occurrences, completing instances and reading the
/// series overview, including error handling and JSON output shapes.
use predicates::prelude::*;

mod helpers;
use helpers::CliTestHarness;

/// Test basic CLI help and version commands
#[test]
fn test_cli_help_and_version() {
    let harness = CliTestHarness::new();

    // Test help command
    harness
        .run_success(&["--help"])
        .stdout(predicate::str::contains("cadence"))
        .stdout(predicate::str::contains("backfill"));

    // Test version command
    harness
        .run_success(&["--version"])
        .stdout(predicate::str::contains("cadence"));

    // Test invalid command
    harness
        .run_failure(&["invalid-command"])
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_add_creates_series_with_seed_instance() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&[
            "add",
            "Weekly client report",
            "--every",
            "weekly",
            "--from",
            "2024-01-01",
            "--description",
            "Compile and send the weekly numbers",
            "--priority",
            "high",
        ])
        .stdout(predicate::str::contains("Created recurring task"))
        .stdout(predicate::str::contains("2024-01-01"))
        .stdout(predicate::str::contains("2024-01-08"));

    let summaries = harness.run_json(&["series", "--json"]);
    assert_eq!(summaries[0]["title"], "Weekly client report");
    assert_eq!(summaries[0]["recurringPattern"], "weekly");
    assert_eq!(summaries[0]["totalInstances"], 1);
    assert_eq!(summaries[0]["lastInstanceDateKey"], "2024-01-01");
    assert_eq!(summaries[0]["nextInstanceDateKey"], "2024-01-08");
}

#[test]
fn test_add_rejects_invalid_cadences() {
    let harness = CliTestHarness::new();

    // Zero interval never forms a valid rule
    harness
        .run_failure(&[
            "add", "Broken", "--every", "daily", "--interval", "0", "--from", "2024-01-01",
        ])
        .stderr(predicate::str::contains("Invalid input"));

    // End date must be strictly after the anchor
    harness
        .run_failure(&[
            "add", "Broken", "--every", "weekly", "--from", "2024-06-01", "--until", "2024-06-01",
        ])
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_backfill_materializes_missed_occurrences() {
    let harness = CliTestHarness::new();

    harness.run_success(&[
        "add",
        "Every other day",
        "--every",
        "daily",
        "--interval",
        "2",
        "--from",
        "2024-01-01",
    ]);

    // Bring the series up to Jan 9, then to Jan 15
    let report = harness.run_json(&["backfill", "--as-of", "2024-01-09", "--json"]);
    assert_eq!(report["seriesProcessed"], 1);
    assert_eq!(report["tasksCreated"], 4);

    let report = harness.run_json(&["backfill", "--as-of", "2024-01-15", "--json"]);
    assert_eq!(report["tasksCreated"], 3);

    // Running again with no state change creates nothing
    let report = harness.run_json(&["backfill", "--as-of", "2024-01-15", "--json"]);
    assert_eq!(report["seriesProcessed"], 1);
    assert_eq!(report["tasksCreated"], 0);

    let summaries = harness.run_json(&["series", "--json"]);
    assert_eq!(summaries[0]["totalInstances"], 8);
    assert_eq!(summaries[0]["lastInstanceDateKey"], "2024-01-15");
    assert_eq!(summaries[0]["nextInstanceDateKey"], "2024-01-17");
}

#[test]
fn test_backfill_single_series() {
    let harness = CliTestHarness::new();

    harness.run_success(&[
        "add", "Daily standup", "--every", "daily", "--from", "2024-03-01",
    ]);

    let summaries = harness.run_json(&["series", "--json"]);
    let series_id = summaries[0]["seriesId"].as_str().unwrap().to_string();

    let outcome = harness.run_json(&[
        "backfill",
        "--series",
        &series_id,
        "--as-of",
        "2024-03-04",
        "--json",
    ]);
    assert_eq!(outcome["created"], 3);
}

#[test]
fn test_backfill_stops_at_the_end_date() {
    let harness = CliTestHarness::new();

    harness.run_success(&[
        "add",
        "Short campaign",
        "--every",
        "weekly",
        "--from",
        "2024-05-25",
        "--until",
        "2024-06-01",
    ]);

    let report = harness.run_json(&["backfill", "--as-of", "2024-06-30", "--json"]);
    assert_eq!(report["seriesProcessed"], 1);
    assert_eq!(report["tasksCreated"], 0);

    let summaries = harness.run_json(&["series", "--json"]);
    assert_eq!(summaries[0]["nextInstanceDateKey"], serde_json::Value::Null);
}

#[test]
fn test_instance_lifecycle_and_counts() {
    let harness = CliTestHarness::new();

    harness.run_success(&[
        "add", "Monthly invoice", "--every", "monthly", "--from", "2024-01-31",
    ]);
    harness.run_success(&["backfill", "--as-of", "2024-03-31"]);

    let summaries = harness.run_json(&["series", "--json"]);
    // Monthly clamping: Jan 31 -> Feb 29 (leap year) -> Mar 31
    assert_eq!(summaries[0]["totalInstances"], 3);
    assert_eq!(summaries[0]["lastInstanceDateKey"], "2024-03-31");
    assert_eq!(summaries[0]["openInstances"], 3);

    // Complete the newest instance through the CLI
    let latest_id = summaries[0]["latestTask"]["id"].as_str().unwrap().to_string();
    harness
        .run_success(&["do", &latest_id])
        .stdout(predicate::str::contains("Completed"));

    let summaries = harness.run_json(&["series", "--json"]);
    assert_eq!(summaries[0]["completedInstances"], 1);
    assert_eq!(summaries[0]["openInstances"], 2);
    assert_eq!(summaries[0]["latestTask"]["status"], "completed");

    // Prefixes resolve too. Time-ordered ids share their leading digits, so
    // use a generous prefix to stay unambiguous.
    let prefix = &latest_id[..latest_id.len() - 4];
    harness
        .run_success(&["start", prefix])
        .stdout(predicate::str::contains("In progress"));
}

#[test]
fn test_list_filters_by_status() {
    let harness = CliTestHarness::new();

    harness.run_success(&[
        "add", "Visible task", "--every", "daily", "--from", "2024-02-01",
    ]);

    harness
        .run_success(&["list"])
        .stdout(predicate::str::contains("Visible task"));

    harness
        .run_success(&["list", "--status", "completed"])
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_series_are_ordered_by_title() {
    let harness = CliTestHarness::new();

    harness.run_success(&[
        "add", "Beta campaign", "--every", "weekly", "--from", "2024-01-01",
    ]);
    harness.run_success(&[
        "add", "Alpha campaign", "--every", "daily", "--from", "2024-01-01",
    ]);

    let summaries = harness.run_json(&["series", "--json"]);
    assert_eq!(summaries[0]["title"], "Alpha campaign");
    assert_eq!(summaries[1]["title"], "Beta campaign");
}

#[test]
fn test_unknown_instance_id_reports_not_found() {
    let harness = CliTestHarness::new();

    harness
        .run_failure(&["do", "zzzzzzz"])
        .stderr(predicate::str::contains("not found"));
}
