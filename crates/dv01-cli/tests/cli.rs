//! End-to-end tests for the `dv01` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn dv01() -> Command {
    let mut cmd = Command::cargo_bin("dv01").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG").env_remove("DV01_CONFIG");
    cmd
}

#[test]
fn test_default_command_prints_reference_dv01() {
    dv01()
        .assert()
        .success()
        .stdout(predicate::str::contains("DV01 Results:"))
        .stdout(predicate::str::contains("5Y Fixed Bond DV01: $441.34"))
        .stdout(predicate::str::contains("5Y IRS Fixed Leg DV01: $61.65"));
}

#[test]
fn test_minimal_report_matches_classic_output() {
    dv01()
        .args(["report", "--format", "minimal"])
        .assert()
        .success()
        .stdout("DV01 Results:\n5Y Fixed Bond DV01: $441.34\n5Y IRS Fixed Leg DV01: $61.65\n");
}

#[test]
fn test_json_report() {
    let output = dv01().args(["--format", "json", "report"]).output().unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["kind"], "bond");
    assert_eq!(rows[1]["kind"], "swap_fixed_leg");

    let dv01 = rows[0]["dv01"].as_f64().unwrap();
    assert!((dv01 - 441.337_735_341_512_6).abs() < 1e-6);
}

#[test]
fn test_curve_csv() {
    dv01()
        .args(["curve", "--points", "5", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tenor,zero_rate,discount_factor\n"))
        .stdout(predicate::str::contains("\n0.5,0.05,"))
        .stdout(predicate::function(|s: &str| s.lines().count() == 6));
}

#[test]
fn test_plot_writes_svg() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curve.svg");

    dv01()
        .args(["plot", "--output"])
        .arg(&path)
        .args(["--format", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("curve.svg"));

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("Zero-Coupon Yield Curve"));
    assert!(svg.contains("Tenor (Years)"));
    assert!(svg.contains("Yield (%)"));
}

#[test]
fn test_config_file_changes_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("rates.toml");
    fs::write(
        &config,
        r#"
        [[instruments]]
        name = "10Y Semi Bond"
        kind = "bond"
        maturity = 10.0
        frequency = 2
        "#,
    )
    .unwrap();

    dv01()
        .arg("--config")
        .arg(&config)
        .args(["--format", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10Y Semi Bond DV01: $"))
        .stdout(predicate::str::contains("5Y Fixed Bond").not());
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "[curve]\npoints = [[1.0, 5.0]]\n").unwrap();

    dv01()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("curve.points"));
}

#[test]
fn test_fractional_schedule_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("frac.toml");
    fs::write(
        &config,
        r#"
        [[instruments]]
        name = "Odd Bond"
        kind = "bond"
        maturity = 2.5
        frequency = 1
        "#,
    )
    .unwrap();

    dv01()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("whole number of periods"));
}

#[test]
fn test_natural_boundary_flag() {
    dv01()
        .args(["--boundary", "natural", "--format", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5Y Fixed Bond DV01: $441.34"));
}
