//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn benchrun() -> Command {
    let mut cmd = Command::cargo_bin("benchrun").expect("binary not found");
    cmd.env_remove("BENCHRUN_TARGET_TIME")
        .env_remove("BENCHRUN_CPU")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_flag() {
    benchrun()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("outlier"));
}

#[test]
fn version_flag() {
    benchrun()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchrun"));
}

#[test]
fn list_everything() {
    benchrun()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("BM_math_sqrt"))
        .stdout(predicate::str::contains("BM_memcpy/08"))
        .stdout(predicate::str::contains("BM_bigint_mul/1024"));
}

#[test]
fn list_filters_by_regex() {
    benchrun()
        .args(["--list", "^BM_memset/0"])
        .assert()
        .success()
        .stdout("BM_memset/08\n");
}

#[test]
fn no_match_lists_available_benchmarks() {
    benchrun()
        .arg("^does_not_exist$")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No matching benchmarks!"))
        .stderr(predicate::str::contains("BM_math_sqrt"));
}

#[test]
fn invalid_regex_is_rejected() {
    benchrun()
        .args(["BM_math", "(unclosed"])
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("couldn't compile \"(unclosed\""));
}

#[test]
fn invalid_target_time_is_rejected() {
    benchrun()
        .args(["--target-time", "soon", "BM_math_sqrt"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid target time"));
}

#[test]
fn runs_one_case_with_header() {
    benchrun()
        .args(["--target-time", "10ms", "^BM_math_sqrt$"])
        .assert()
        .success()
        .stdout(predicate::str::contains("iterations      ns/op"))
        .stdout(predicate::str::is_match(r"(?m)^BM_math_sqrt\s+\d+[KMGTPE]?\s+\d+$").unwrap());
}

#[test]
fn memory_case_reports_throughput() {
    benchrun()
        .args(["--target-time", "10ms", "^BM_memcpy/1024$"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GiB/s"));
}

#[test]
fn target_time_from_environment() {
    benchrun()
        .env("BENCHRUN_TARGET_TIME", "5ms")
        .arg("^BM_math_log10$")
        .assert()
        .success()
        .stdout(predicate::str::contains("BM_math_log10"));
}

#[test]
fn writes_json_report() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("results.json");
    benchrun()
        .args(["--target-time", "10ms", "--json"])
        .arg(&path)
        .arg("^BM_math_powf/")
        .assert()
        .success();

    let content = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["name"], "BM_math_powf/0.500000");
    assert!(records[0]["measurement"]["iterations"].as_u64().unwrap() > 0);
}

#[test]
fn completion_bash() {
    benchrun()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("benchrun"));
}
