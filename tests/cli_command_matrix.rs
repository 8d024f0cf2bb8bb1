use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

fn run_help(root: &TempDir, args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("css-guard");
    cmd.current_dir(root.path())
        .args(args)
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_cli_command_has_help_path() {
    let root = TempDir::new().expect("temp root");

    // top-level
    run_help(&root, &[]);

    run_help(&root, &["check"]);

    run_help(&root, &["content"]);
    run_help(&root, &["content", "show"]);
    run_help(&root, &["content", "files"]);
    run_help(&root, &["content", "export"]);
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let root = TempDir::new().expect("temp root");
    let mut cmd = cargo_bin_cmd!("css-guard");
    cmd.current_dir(root.path())
        .arg("bundle")
        .assert()
        .failure()
        .code(2);
}
