mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn inspect_required_vars_as_yaml() {
    let ctx = TestContext::new();

    let output = ctx
        .cli()
        .args(["inspect", "required-vars", "--metadata", "metadata.yml"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_yaml::Value = serde_yaml::from_slice(&output).unwrap();
    assert_eq!(parsed["hostname"], serde_yaml::Value::from(""));
    assert_eq!(parsed["users_0/username"], serde_yaml::Value::from(""));
}

#[test]
fn inspect_features_as_json() {
    let ctx = TestContext::new();

    let output = ctx
        .cli()
        .args(["inspect", "features", "-m", "metadata.yml", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let features = parsed.as_object().unwrap();
    assert!(features.contains_key("syslog-enabled"));
    assert!(features.contains_key("audit_targets_console"));
    assert_eq!(
        parsed["audit_targets_file"][0]["path"],
        "/product-properties/.properties.audit_targets?/value/-"
    );
}

#[test]
fn inspect_does_not_write_files() {
    let ctx = TestContext::new();

    ctx.cli().args(["inspect", "features", "-m", "metadata.yml"]).assert().success();
    assert!(!ctx.out_dir().join("example-product").exists());
}

#[test]
fn inspect_reports_malformed_metadata() {
    let ctx = TestContext::new();
    ctx.write("bad.yml", "name: example-product\nproduct_version: \"\"\n");

    ctx.cli()
        .args(["inspect", "required-vars", "-m", "bad.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed metadata"));
}

#[test]
fn unknown_inspect_target_is_a_usage_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["inspect", "defaults", "-m", "metadata.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
