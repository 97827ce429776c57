use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("select_core_cli").expect("binary builds");
    cmd.env("SELECT_CORE_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn pick_prints_listing_then_group_and_item() {
    let dir = tempdir().expect("tempdir");
    cli(dir.path())
        .args([
            "--plain",
            "--label",
            "Select a fruit",
            "--group",
            "A=banana,apple",
            "--group",
            "B=cherry",
            "--pick",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\nSelect a fruit:\n"))
        .stdout(predicate::str::contains("\t[1]\tapple\n"))
        .stdout(predicate::str::contains("\t[2]\tbanana\n"))
        .stdout(predicate::str::contains("\t[3]\tcherry\n"))
        .stdout(predicate::str::ends_with("A\tbanana\n"));
}

#[test]
fn out_of_range_pick_exits_with_error() {
    let dir = tempdir().expect("tempdir");
    cli(dir.path())
        .args(["--plain", "--group", "A=x", "--pick", "9"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("number 9 is out of range"));
}

#[test]
fn empty_selector_pick_is_always_out_of_range() {
    let dir = tempdir().expect("tempdir");
    cli(dir.path())
        .args(["--plain", "--pick", "1"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("number 1 is out of range"));
}

#[test]
fn bad_arguments_print_usage_and_fail() {
    let dir = tempdir().expect("tempdir");
    cli(dir.path())
        .args(["--plain", "--group", "missing-delimiter"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("invalid --group value"))
        .stdout(predicate::str::contains("usage: select_core_cli"));
}

#[test]
fn groups_print_sorted_case_insensitively() {
    let dir = tempdir().expect("tempdir");
    let assert = cli(dir.path())
        .args([
            "--plain",
            "--group",
            "Bravo=b",
            "--group",
            "alpha=a",
            "--pick",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("alpha\ta\n"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let alpha = stdout.find("\nalpha\n").expect("alpha heading");
    let bravo = stdout.find("\nBravo\n").expect("Bravo heading");
    assert!(alpha < bravo, "alpha sorts before Bravo:\n{stdout}");
}
