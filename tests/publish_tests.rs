//! Integration tests for the publish command

mod common;

use predicates::prelude::*;

fn publish(workspace: &common::TestWorkspace) {
    common::gameshell_cmd_for_workspace(&workspace.path)
        .arg("publish")
        .assert()
        .success()
        .stdout(predicate::str::contains("index.html"))
        .stdout(predicate::str::contains("404.html"))
        .stdout(predicate::str::contains("assets"));
}

#[test]
fn test_publish_layout() {
    let workspace = common::TestWorkspace::with_app_build();
    publish(&workspace);

    assert!(workspace.file_exists("docs/index.html"));
    assert!(workspace.file_exists("docs/404.html"));
    assert!(workspace.file_exists("docs/assets/index-4f2a.js"));
    assert!(workspace.file_exists("docs/assets/index-9c1d.css"));
    assert_eq!(
        workspace.read_file("docs/assets/index-4f2a.js"),
        common::APP_SCRIPT
    );
}

#[test]
fn test_index_and_fallback_are_identical() {
    let workspace = common::TestWorkspace::with_app_build();
    publish(&workspace);

    assert_eq!(
        workspace.read_bytes("docs/index.html"),
        workspace.read_bytes("docs/404.html")
    );
}

#[test]
fn test_no_root_relative_asset_references() {
    let workspace = common::TestWorkspace::with_app_build();
    publish(&workspace);

    let index = workspace.read_file("docs/index.html");
    assert!(!index.contains("\"/assets/"));
    assert!(index.contains(r#"src="./assets/index-4f2a.js""#));
    assert!(index.contains(r#"href="./assets/index-9c1d.css""#));
    assert!(index.contains(r#"href="./assets/favicon.svg""#));
}

#[test]
fn test_republish_drops_stale_assets() {
    let workspace = common::TestWorkspace::with_app_build();
    publish(&workspace);
    workspace.write_file("docs/assets/index-0ld.js", "stale build");

    publish(&workspace);
    assert!(!workspace.file_exists("docs/assets/index-0ld.js"));
    assert!(workspace.file_exists("docs/assets/index-4f2a.js"));
}

#[test]
fn test_missing_assets_fails() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("app/dist/index.html", common::APP_INDEX);

    common::gameshell_cmd_for_workspace(&workspace.path)
        .arg("publish")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Asset directory not found"));

    assert!(!workspace.file_exists("docs/index.html"));
}

#[test]
fn test_publish_out_override() {
    let workspace = common::TestWorkspace::with_app_build();

    common::gameshell_cmd_for_workspace(&workspace.path)
        .args(["publish", "--out", "site"])
        .assert()
        .success();

    assert!(workspace.file_exists("site/404.html"));
    assert!(!workspace.file_exists("docs"));
}

#[test]
fn test_parent_assets_dir_is_rejected_before_any_write() {
    let workspace = common::TestWorkspace::with_app_build();
    workspace.write_file("gameshell.yaml", "dist_dir: app/dist\nassets_dir: '..'\n");
    workspace.write_file("precious.txt", "keep me");
    workspace.write_file("docs/CNAME", "hoopz.example.com");

    common::gameshell_cmd_for_workspace(&workspace.path)
        .arg("publish")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));

    assert_eq!(workspace.read_file("precious.txt"), "keep me");
    assert!(workspace.file_exists("docs/CNAME"));
    assert!(workspace.file_exists("app/dist/assets/index-4f2a.js"));
}

#[test]
fn test_publish_into_build_output_is_refused() {
    let workspace = common::TestWorkspace::with_app_build();

    common::gameshell_cmd_for_workspace(&workspace.path)
        .args(["publish", "--out", "app/dist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("overlap the build assets"));

    assert_eq!(
        workspace.read_file("app/dist/assets/index-4f2a.js"),
        common::APP_SCRIPT
    );
    assert_eq!(workspace.read_file("app/dist/index.html"), common::APP_INDEX);
}
