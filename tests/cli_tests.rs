use assert_cmd::Command;
use regex::Regex;

struct RunResult {
    stdout: String,
    stderr: String,
    code: Option<i32>,
}

fn run(args: &[&str]) -> RunResult {
    let output = Command::cargo_bin("handodds")
        .expect("binary should build")
        .args(args)
        .output()
        .expect("failed to run handodds");
    RunResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        code: output.status.code(),
    }
}

#[test]
fn test_categories_listing() {
    let result = run(&["categories"]);
    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("* High Roll - 0"));
    assert!(result.stdout.contains("* Two Pair - 2"));
    assert!(result.stdout.contains("* Jackpot - 9"));
}

#[test]
fn test_text_output_format() {
    let result = run(&["analyze", "--communal", "0", "--normal", "5", "--dice", "5", "-f", "text"]);
    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);

    let line = Regex::new(r"^(.+) - (\d+\.\d{4}) / 7776 \((\d+\.\d{4})%\)$").unwrap();
    let rows: Vec<_> = result
        .stdout
        .lines()
        .filter_map(|l| line.captures(l))
        .collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(&rows[0][1], "High Roll");
    assert_eq!(&rows[9][1], "Jackpot");
    assert_eq!(&rows[9][2], "6.0000");
}

#[test]
fn test_json_output() {
    let result = run(&["analyze", "--rerolls", "1", "-f", "json"]);
    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);

    let json: serde_json::Value = serde_json::from_str(&result.stdout).expect("valid JSON");
    assert_eq!(json["total"], 7776);
    assert_eq!(json["config"]["rerolls"], 1);
    let categories = json["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 10);
    assert_eq!(categories[0]["category"], "high_roll");
    assert_eq!(categories[0]["probability"], 1.0);
    assert!(json["filtered"].is_null());
}

#[test]
fn test_csv_output_with_filter() {
    let result = run(&["analyze", "-e", "pair", "-i", "5", "-f", "csv"]);
    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);

    let mut lines = result.stdout.lines();
    assert_eq!(
        lines.next(),
        Some("rank,category,count,reroll_odds,total,probability")
    );
    assert_eq!(lines.count(), 10);
}

#[test]
fn test_table_output_shows_filter_summary() {
    let result = run(&["analyze", "--exclude", "Pair", "--timing"]);
    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("HAND ODDS"));
    assert!(result.stdout.contains("Excluded: Pair"));
    assert!(result
        .stdout
        .contains("720.0000 of 7776 hands (9.2593%) after exclusions / inclusions"));
    assert!(result.stdout.contains("That took about"));
}

#[test]
fn test_empty_domain_prints_no_data() {
    let result = run(&["analyze", "--communal", "0", "--normal", "0", "--dice", "0"]);
    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout.trim(), "No data.");
}

#[test]
fn test_invalid_config_exits_with_error() {
    let result = run(&["analyze", "--extra", "3"]);
    assert_eq!(result.code, Some(1));
    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("Configuration Error"), "stderr: {}", result.stderr);
}

#[test]
fn test_reroll_budget_error() {
    let result = run(&["analyze", "--normal", "1", "--rerolls", "2"]);
    assert_eq!(result.code, Some(1));
}

#[test]
fn test_unknown_category_is_a_usage_error() {
    let result = run(&["analyze", "--exclude", "royal_flush"]);
    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("royal_flush"));
}
