//! Registry file integration tests

mod common;

use predicates::prelude::*;

const EXTRA_BUNDLES: &str = r"
bundles:
  lodash:
    src: node_modules/lodash
    include: [lodash.min.js]
    dest: vendor
  jquery:
    src: node_modules/jquery/dist
    include: [jquery.js]
    dest: vendor/jquery
";

#[test]
fn test_default_registry_file_is_picked_up() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("bundlemap.yaml", EXTRA_BUNDLES);

    common::bundlemap_cmd(&workspace)
        .args(["resolve", "lodash", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src: node_modules/lodash"));
}

#[test]
fn test_registry_file_overrides_builtin() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("bundlemap.yaml", EXTRA_BUNDLES);

    let output = common::bundlemap_cmd(&workspace)
        .args(["resolve", "jquery", "mocha"])
        .output()
        .expect("Failed to run bundlemap");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value[0]["dest"], "vendor/jquery");
    assert_eq!(value[1]["src"], "node_modules/mocha");
}

#[test]
fn test_registry_flag() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("config/extra.yaml", EXTRA_BUNDLES);

    common::bundlemap_cmd(&workspace)
        .args(["--registry", "config/extra.yaml", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered bundles (26)"))
        .stdout(predicate::str::contains("lodash"));
}

#[test]
fn test_registry_env_var() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("extra.yaml", EXTRA_BUNDLES);

    common::bundlemap_cmd(&workspace)
        .env("BUNDLEMAP_REGISTRY", workspace.path.join("extra.yaml"))
        .args(["show", "lodash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lodash.min.js"));
}

#[test]
fn test_missing_registry_file() {
    let workspace = common::TestWorkspace::new();

    common::bundlemap_cmd(&workspace)
        .args(["-r", "missing.yaml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Registry file not found"));
}

#[test]
fn test_invalid_registry_entry() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file(
        "bundlemap.yaml",
        "bundles:\n  broken:\n    src: node_modules/broken\n    dest: ''\n",
    );

    common::bundlemap_cmd(&workspace)
        .args(["resolve", "jquery"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid bundle 'broken'"));
}

#[test]
fn test_corrupted_registry_file() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("bundlemap.yaml", "bundles: [unclosed\n");

    common::bundlemap_cmd(&workspace)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse registry file"));
}

#[test]
fn test_misspelled_include_key_is_rejected() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file(
        "bundlemap.yaml",
        "bundles:\n  assets:\n    src: node_modules/assets\n    inclde: [app.js]\n    dest: vendor\n",
    );

    common::bundlemap_cmd(&workspace)
        .args(["resolve", "assets"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("bundle 'assets'"))
        .stderr(predicate::str::contains("inclde"));
}

#[test]
fn test_directory_as_registry_file() {
    let workspace = common::TestWorkspace::new();
    std::fs::create_dir_all(workspace.path.join("bundles.d")).expect("Failed to create directory");

    common::bundlemap_cmd(&workspace)
        .args(["--registry", "bundles.d", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read registry file"));
}

#[test]
fn test_empty_registry_file_keeps_builtin() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("bundlemap.yaml", "");

    common::bundlemap_cmd(&workspace)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered bundles (25)"));
}
