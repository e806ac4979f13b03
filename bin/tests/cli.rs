//! End-to-end runs of the `tenet` binary against a prepared cache.

use std::{path::Path, process::Command};
use tenet_fmp::EquityCache;
use tenet_traits::{Date, Equity, StatementKind, StatementStore};

fn seed_cache(dir: &Path) {
    let income = StatementStore::builder(StatementKind::IncomeStatement)
        .periods([Date::from_ymd_opt(2023, 12, 31).unwrap()])
        .metric("Total Revenue", [Some(100.0)])
        .metric("Gross Profit", [Some(45.0)])
        .metric("Net Income", [Some(25.0)])
        .build()
        .unwrap();
    EquityCache::new(dir)
        .store(&Equity::new("ACME", "Acme Corp", 10.0).with_statement(income))
        .unwrap();
}

fn tenet(args: &[&str]) -> (String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_tenet"))
        .args(args)
        .env_remove("FMP_API_KEY")
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    (
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

#[test]
fn test_analyze_json_stdout_is_a_document() {
    let dir = tempfile::tempdir().unwrap();
    seed_cache(dir.path());
    let cache = dir.path().to_str().unwrap();

    let (stdout, stderr) = tenet(&[
        "analyze", "acme", "--cache-dir", cache, "-p", "buffett", "--format", "json",
    ]);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["symbol"], "ACME");
    assert_eq!(report["verdicts"][0]["score"], 10.0);
    assert_eq!(report["verdicts"][0]["band"], "meets_most");
    assert!(stderr.contains("Loading cached company's data..."));
}

#[test]
fn test_ratios_json_stdout_is_a_document() {
    let dir = tempfile::tempdir().unwrap();
    seed_cache(dir.path());
    let cache = dir.path().to_str().unwrap();

    let (stdout, _) = tenet(&["ratios", "ACME", "--cache-dir", cache, "--format", "json"]);
    let ratios: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(ratios["ratios"].is_array());
}

#[test]
fn test_analyze_text_reports_the_verdict() {
    let dir = tempfile::tempdir().unwrap();
    seed_cache(dir.path());
    let cache = dir.path().to_str().unwrap();

    let (stdout, _) = tenet(&["analyze", "ACME", "--cache-dir", cache, "-p", "buffett"]);
    assert!(stdout.contains("meets most of Warren Buffett's selection criteria"));
    assert!(stdout.contains("Recommendation 10.00/10"));
    assert!(!stdout.contains("Loading cached"));
}
