use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn sitequote_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("sitequote"))
}

fn write_estimate(config_path: &std::path::Path, estimate: &str) {
    fs::write(config_path.join("estimate.toml"), estimate).unwrap();
}

#[test]
fn test_help() {
    sitequote_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Website project pricing estimator"));
}

#[test]
fn test_version() {
    sitequote_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sitequote"));
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("sitequote-config");

    sitequote_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized sitequote config"));

    assert!(config_path.join("estimate.toml").exists());
    assert!(config_path.join("output").is_dir());
}

#[test]
fn test_init_fails_if_exists() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("sitequote-config");

    sitequote_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    sitequote_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_show_without_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nonexistent");

    sitequote_cmd()
        .args(["-C", config_path.to_str().unwrap(), "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_show_with_template_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("sitequote-config");

    sitequote_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    // Template: 20h base, 5 pages, complexity 1.0, no add-ons
    // -> 20 + 4*2 = 28 hours, 28 * 35 EUR = 980
    sitequote_cmd()
        .args(["-C", config_path.to_str().unwrap(), "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HOURS"))
        .stdout(predicate::str::contains("28.0"))
        .stdout(predicate::str::contains("€980.00"))
        .stdout(predicate::str::contains("Estimated 28.0 hours"));
}

#[test]
fn test_show_full_breakdown() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("sitequote-config");

    sitequote_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    write_estimate(
        &config_path,
        r#"[project]
base_hours = 20.0
page_count = 6.0
complexity = 1.1

[rates]
currency = "eur"
hourly_rate = 35.0

[features]
design = "custom"
cms = "wp"
eshop = "none"
seo = "basic"
languages = 1
accessibility = true
performance = true
custom = ""

[recurring]
maintenance_monthly = 0.0
hosting_monthly = 0.0

[adjustments]
rush_percent = 0.0
discount_percent = 0.0
vat_percent = 0.0
"#,
    );

    // Worked example: 52.14 hours, subtotal 1824.90 EUR
    sitequote_cmd()
        .args(["-C", config_path.to_str().unwrap(), "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("52.1"))
        .stdout(predicate::str::contains("€1,824.90"));
}

#[test]
fn test_show_discount_renders_negative_line() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("sitequote-config");

    sitequote_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    write_estimate(
        &config_path,
        r#"[project]
base_hours = 10.0
page_count = 1.0
complexity = 1.0

[rates]
currency = "eur"
hourly_rate = 100.0

[adjustments]
discount_percent = 10.0
vat_percent = 21.0
"#,
    );

    // Subtotal 1000, discount -100, one-off 900, VAT 189, total 1089
    sitequote_cmd()
        .args(["-C", config_path.to_str().unwrap(), "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Discount"))
        .stdout(predicate::str::contains("€-100.00"))
        .stdout(predicate::str::contains("€900.00"))
        .stdout(predicate::str::contains("€189.00"))
        .stdout(predicate::str::contains("€1,089.00"));
}

#[test]
fn test_show_bad_toml_reports_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("sitequote-config");

    sitequote_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    write_estimate(&config_path, "this is not toml [");

    sitequote_cmd()
        .args(["-C", config_path.to_str().unwrap(), "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse estimate file"));
}

#[test]
fn test_currencies_list() {
    sitequote_cmd()
        .arg("currencies")
        .assert()
        .success()
        .stdout(predicate::str::contains("EUR"))
        .stdout(predicate::str::contains("CZK"))
        .stdout(predicate::str::contains("24.80"))
        .stdout(predicate::str::contains("not live rates"));
}

#[test]
fn test_export_writes_json_document() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("sitequote-config");
    let export_path = temp_dir.path().join("estimate.json");

    sitequote_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    sitequote_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "export",
            "--output",
            export_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported estimate"))
        .stdout(predicate::str::contains("Saved:"));

    let content = fs::read_to_string(&export_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["config"]["rates"]["hourly_rate"], 35.0);
    assert_eq!(value["hours"]["total"], 28.0);
    assert_eq!(value["price"]["subtotal"], 980.0);
    assert!(value["generated"].is_string());
}

#[test]
fn test_export_defaults_to_timestamped_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("sitequote-config");

    sitequote_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    sitequote_cmd()
        .args(["-C", config_path.to_str().unwrap(), "export"])
        .assert()
        .success();

    let exports: Vec<_> = fs::read_dir(config_path.join("output"))
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("ESTIMATE-") && name.ends_with(".json"))
        .collect();
    assert_eq!(exports.len(), 1);
}
