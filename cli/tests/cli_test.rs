use assert_cmd::Command;

#[test]
fn help_lists_both_subcommands() {
    let mut cmd = Command::cargo_bin("emrctl").unwrap();
    let output = cmd.arg("--help").output().unwrap();
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("cluster"));
    assert!(text.contains("info"));
}

#[test]
fn cluster_requires_a_name() {
    let mut cmd = Command::cargo_bin("emrctl").unwrap();
    cmd.arg("cluster");
    cmd.assert().failure();
}

#[test]
fn cluster_rejects_unknown_target_states() {
    let mut cmd = Command::cargo_bin("emrctl").unwrap();
    cmd.args(["cluster", "--name", "etl-", "--state", "paused"]);
    cmd.assert().failure();
}

#[test]
fn info_rejects_unknown_sort_orders() {
    let mut cmd = Command::cargo_bin("emrctl").unwrap();
    cmd.args(["info", "--sort-order", "sideways"]);
    cmd.assert().failure();
}
