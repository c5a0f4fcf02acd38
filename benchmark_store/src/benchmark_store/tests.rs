//!
//! Tests for the benchmark store.
//!

#![cfg(test)]

use std::path::Path;

const OUTPUT_1: &str = r#"
BatchSpanProcessor process span x 1,431,759 ops/sec ±0.18% (92 runs sampled)
transform 1 span to OTLP x 12,044 ops/sec ±0.95% (90 runs sampled)
transform 100 spans to OTLP x 81.61 ops/sec ±1.70% (69 runs sampled)
"#;

const OUTPUT_2: &str = r#"
BatchSpanProcessor process span x 1,502,113 ops/sec ±0.21% (94 runs sampled)
transform 1 span to OTLP x 4,907 ops/sec ±2.10% (85 runs sampled)
"#;

const EVENT: &str = r#"{
    "ref": "refs/heads/main",
    "head_commit": {
        "author": { "email": "dev@example.com", "name": "Dév Éloper", "username": "dev" },
        "committer": { "email": "noreply@github.com", "name": "GitHub", "username": "web-flow" },
        "distinct": true,
        "id": "ID",
        "message": "perf(exporter): reuse buffers 🚀\n\n```ts\nconst x = 1;\n```",
        "timestamp": "2023-11-14T22:13:20+01:00",
        "tree_id": "fedcba9876543210fedcba9876543210fedcba98",
        "url": "https://github.com/open-telemetry/opentelemetry-js/commit/ID"
    }
}"#;

fn run(directory: &Path, id: &str, output: &str, date: i64) -> benchmark_store::Entry {
    let event_path = directory.join(format!("{id}.json"));
    std::fs::write(event_path.as_path(), EVENT.replace("ID", id)).expect("Writable");
    let commit = benchmark_store::Commit::try_from(event_path.as_path()).expect("Valid commit");

    let input = benchmark_store::Input::parse(benchmark_store::Tool::Benchmarkjs, output)
        .expect("Valid output");
    benchmark_store::Entry::new(commit, date, input.tool.to_string(), input.benches)
}

#[test]
fn append_and_compare() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let store = benchmark_store::Store::new(benchmark_store::StoreConfig::new(
        directory.path().join("benchmarks/data.js"),
        "https://github.com/open-telemetry/opentelemetry-js".to_owned(),
    ));

    let first = run(directory.path(), "1111111111", OUTPUT_1, 1_700_000_000_000);
    store
        .append_at(benchmark_store::DEFAULT_SUITE, first.clone(), 1_700_000_000_100)
        .expect("Appended");
    let second = run(directory.path(), "2222222222", OUTPUT_2, 1_700_000_100_000);
    let dataset = store
        .append_at(benchmark_store::DEFAULT_SUITE, second.clone(), 1_700_000_100_100)
        .expect("Appended");

    let reread = store.read().expect("Readable");
    assert_eq!(reread, dataset);
    assert_eq!(reread.suite(benchmark_store::DEFAULT_SUITE), [first, second]);
    assert_eq!(reread.last_update, 1_700_000_100_100);

    let history = reread.suite(benchmark_store::DEFAULT_SUITE);
    let comparison = benchmark_store::Comparison::new(
        Some(&history[0]),
        &history[1],
        benchmark_store::Threshold::default(),
    );
    let alerts = comparison
        .alerts()
        .map(|row| row.name)
        .collect::<Vec<&str>>();
    assert_eq!(alerts, vec!["transform 1 span to OTLP"]);
}

#[test]
fn script_is_loadable_by_the_dashboard() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let path = directory.path().join("data.js");
    let store = benchmark_store::Store::new(benchmark_store::StoreConfig::new(
        path.clone(),
        String::new(),
    ));
    let entry = run(directory.path(), "3333333333", OUTPUT_1, 1_700_000_000_000);
    store
        .append_at("Node.js", entry.clone(), 1_700_000_000_000)
        .expect("Appended");

    let script = std::fs::read_to_string(path).expect("Readable");
    let json = script
        .strip_prefix(benchmark_store::SCRIPT_PREFIX)
        .expect("Prefixed");
    let value: serde_json::Value = serde_json::from_str(json).expect("Valid JSON");

    assert_eq!(value["lastUpdate"], 1_700_000_000_000i64);
    assert_eq!(value["repoUrl"], "");
    assert_eq!(value["entries"]["Node.js"][0]["tool"], "benchmarkjs");
    assert_eq!(
        value["entries"]["Node.js"][0]["benches"][0]["value"],
        1_431_759
    );
    assert_eq!(
        value["entries"]["Node.js"][0]["commit"]["message"],
        entry.commit.message.as_str()
    );
    assert!(script.contains("Dév Éloper"));
    assert!(script.contains("🚀"));
}

#[test]
fn empty_run_is_stored() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let store = benchmark_store::Store::new(benchmark_store::StoreConfig::new(
        directory.path().join("data.js"),
        String::new(),
    ));
    let entry = run(directory.path(), "4444444444", "Beginning benchmark...\n", 1);
    let dataset = store
        .append_at(benchmark_store::DEFAULT_SUITE, entry, 1)
        .expect("Appended");

    assert!(dataset
        .latest(benchmark_store::DEFAULT_SUITE)
        .is_some_and(|entry| entry.benches.is_empty()));
}

fn append(
    directory: &Path,
    id: &str,
    output: &str,
    fail_on_alert: bool,
) -> benchmark_store::Append {
    let output_file = directory.join(format!("{id}.txt"));
    std::fs::write(output_file.as_path(), output).expect("Writable");
    let commit_file = directory.join(format!("{id}.json"));
    std::fs::write(commit_file.as_path(), EVENT.replace("ID", id)).expect("Writable");

    benchmark_store::Append {
        store: benchmark_store::StoreConfig::new(
            directory.join("benchmarks/data.js"),
            "https://github.com/open-telemetry/opentelemetry-js".to_owned(),
        ),
        suite: benchmark_store::DEFAULT_SUITE.to_owned(),
        tool: benchmark_store::Tool::Benchmarkjs,
        output_file,
        commit_file,
        threshold: benchmark_store::Threshold::default(),
        fail_on_alert,
        quiet: false,
    }
}

#[test]
fn append_compares_with_the_run_before() {
    colored::control::set_override(false);
    let directory = tempfile::tempdir().expect("Temporary directory");

    let mut output = Vec::new();
    let first = append(directory.path(), "1111111111", OUTPUT_1, true)
        .run_at(&mut output, 1_700_000_000_000)
        .expect("Appended");
    assert!(first
        .comparison(benchmark_store::Threshold::default())
        .is_some_and(|comparison| comparison.previous.is_none()));
    assert!(String::from_utf8_lossy(&output).contains("No previous run"));

    append(directory.path(), "2222222222", OUTPUT_1, true)
        .run_at(&mut Vec::new(), 1_700_000_100_000)
        .expect("Appended");
    let mut output = Vec::new();
    let third = append(directory.path(), "3333333333", OUTPUT_1, true)
        .run_at(&mut output, 1_700_000_200_000)
        .expect("Appended");

    let comparison = third
        .comparison(benchmark_store::Threshold::default())
        .expect("Non-empty suite");
    assert_eq!(
        comparison.previous.map(|entry| entry.commit.id.as_str()),
        Some("2222222222")
    );
    assert_eq!(comparison.current.commit.id, "3333333333");
    assert!(!comparison.has_alerts());
    assert!(String::from_utf8_lossy(&output).contains("Compared with 2222222"));
}

#[test]
fn alerting_run_is_stored_and_fails() {
    colored::control::set_override(false);
    let directory = tempfile::tempdir().expect("Temporary directory");
    append(directory.path(), "1111111111", OUTPUT_1, true)
        .run_at(&mut Vec::new(), 1_700_000_000_000)
        .expect("Appended");

    let mut output = Vec::new();
    let error = append(directory.path(), "2222222222", OUTPUT_2, true)
        .run_at(&mut output, 1_700_000_100_000)
        .expect_err("Regressed");
    assert!(error.to_string().contains("1 measurement(s) regressed beyond 200%"));
    assert!(String::from_utf8_lossy(&output).contains("Alert: 1 measurement(s)"));

    let store = benchmark_store::Store::new(benchmark_store::StoreConfig::new(
        directory.path().join("benchmarks/data.js"),
        String::new(),
    ));
    let dataset = store.read().expect("Readable");
    let history = dataset.suite(benchmark_store::DEFAULT_SUITE);
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].commit.id, "2222222222");
    assert_eq!(dataset.last_update, 1_700_000_100_000);
}

#[test]
fn alerting_run_succeeds_without_fail_on_alert() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    append(directory.path(), "1111111111", OUTPUT_1, false)
        .run_at(&mut Vec::new(), 1_700_000_000_000)
        .expect("Appended");

    let outcome = append(directory.path(), "2222222222", OUTPUT_2, false)
        .run_at(&mut Vec::new(), 1_700_000_100_000)
        .expect("Alerts are reported only");

    assert!(outcome
        .comparison(benchmark_store::Threshold::default())
        .is_some_and(|comparison| comparison.has_alerts()));
}

#[test]
fn empty_output_is_appended_with_warning() {
    colored::control::set_override(false);
    let directory = tempfile::tempdir().expect("Temporary directory");

    let mut output = Vec::new();
    let outcome = append(directory.path(), "4444444444", "Beginning benchmark...\n", true)
        .run_at(&mut output, 1)
        .expect("Appended");

    assert!(String::from_utf8_lossy(&output).contains("Warning: No measurements found"));
    assert!(outcome
        .dataset
        .latest(benchmark_store::DEFAULT_SUITE)
        .is_some_and(|entry| entry.benches.is_empty()));
}

#[test]
fn quiet_append_writes_nothing() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let mut command = append(directory.path(), "5555555555", "", true);
    command.quiet = true;

    let mut output = Vec::new();
    command.run_at(&mut output, 1).expect("Appended");

    assert!(output.is_empty());
}
