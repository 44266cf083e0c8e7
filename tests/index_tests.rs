//! Bundle index pipeline through the binary

mod common;

use common::TestSandbox;
use predicates::prelude::*;

#[test]
fn test_index_prints_records() {
    let sandbox = TestSandbox::new();
    sandbox.write_tree_file(
        "bundle-index.txt",
        "Bundle index\n\tA\n\t\tB\n\t\t\tC\n\t\t\tD\n",
    );

    sandbox
        .cmd()
        .arg(&sandbox.tree)
        .arg("--index")
        .assert()
        .success()
        .stdout(predicate::str::contains("INFO> A / B / C"))
        .stdout(predicate::str::contains("INFO> A / B / D"))
        .stdout(predicate::str::contains(
            "finished, parsed 2 class(es), 0 unassignable.",
        ));
}

#[test]
fn test_index_reports_unassignable_class() {
    let sandbox = TestSandbox::new();
    sandbox.write_tree_file("bundle-index.txt", "\t\t\tC\n");

    sandbox
        .cmd()
        .arg(&sandbox.tree)
        .arg("--index")
        .assert()
        .success()
        .stderr(predicate::str::contains("ERROR> cannot assign class 'C'"))
        .stdout(predicate::str::contains(
            "finished, parsed 0 class(es), 1 unassignable.",
        ));
}

#[test]
fn test_index_missing_exits_minus_three() {
    let sandbox = TestSandbox::new();

    sandbox
        .cmd()
        .arg(&sandbox.tree)
        .arg("--index")
        .assert()
        .code(common::exit_status(-3))
        .stderr(predicate::str::contains("bundle index not found"));
}

#[test]
fn test_index_directory_exits_minus_three() {
    let sandbox = TestSandbox::new();
    std::fs::create_dir_all(sandbox.tree.join("bundle-index.txt")).unwrap();

    sandbox
        .cmd()
        .arg(&sandbox.tree)
        .arg("--index")
        .assert()
        .code(common::exit_status(-3))
        .stderr(predicate::str::contains("not a regular file"));
}

#[test]
fn test_index_does_not_touch_working_dir() {
    let sandbox = TestSandbox::new();
    sandbox.write_tree_file("bundle-index.txt", "\tA\n");
    sandbox.write_tree_file("a/foo.god", "old");
    sandbox.write_source("foo.god", "new");

    sandbox
        .cmd()
        .arg(&sandbox.tree)
        .arg("--index")
        .assert()
        .success();

    assert!(sandbox.work.join("foo.god").exists());
    assert!(!sandbox.cache_path().exists());
}
