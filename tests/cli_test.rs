use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fired(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fired").unwrap();
    cmd.arg("--no-color").current_dir(dir.path());
    cmd
}

#[test]
fn help_exits_zero() {
    Command::cargo_bin("fired")
        .unwrap()
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn unknown_startup_argument_fails() {
    Command::cargo_bin("fired")
        .unwrap()
        .arg("ls")
        .assert()
        .failure();
}

#[test]
fn end_of_input_exits_zero() {
    let tmp = TempDir::new().unwrap();
    fired(&tmp)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Fired Terminal - File Manager\n"));
}

#[test]
fn exit_verb_exits_zero() {
    let tmp = TempDir::new().unwrap();
    fired(&tmp)
        .write_stdin("exit\npwd\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("/").not());
}

#[test]
fn unknown_verb_is_reported_and_loop_continues() {
    let tmp = TempDir::new().unwrap();
    fired(&tmp)
        .write_stdin("frobnicate\ntouch made.txt\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("command not recognized: frobnicate"));
    assert!(tmp.path().join("made.txt").exists());
}

#[test]
fn filesystem_error_goes_to_stderr() {
    let tmp = TempDir::new().unwrap();
    fired(&tmp)
        .write_stdin("mv nothing.txt other.txt\n")
        .assert()
        .success()
        .stderr(predicate::str::starts_with("error: failed to move"));
}

#[test]
fn touch_then_filtered_listing() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("skip.md"), "# x").unwrap();
    fired(&tmp)
        .write_stdin("touch a.txt\nls -ptxt\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("| a.txt                    |      0B"))
        .stdout(predicate::str::contains("skip.md").not());
}

#[test]
fn mkdir_and_cd_round_trip() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    let foo = root.join("foo");
    fired(&tmp)
        .write_stdin("mkdir foo\ncd foo\npwd\ncd ..\npwd\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{}\n", foo.display())))
        .stdout(predicate::str::contains(format!("> {}\n", root.display())));
}

#[test]
fn dir_flag_sets_start_directory() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join("start")).unwrap();
    std::fs::write(tmp.path().join("start/inside.txt"), "x").unwrap();
    fired(&tmp)
        .args(["--dir", "start"])
        .write_stdin("ls --sort\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("inside.txt"));
}

#[test]
fn json_listing() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("one.txt"), "12345").unwrap();
    fired(&tmp)
        .arg("--json")
        .write_stdin("ls\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"display_name\": \"one.txt\""))
        .stdout(predicate::str::contains("\"size_label\": \"5B\""));
}
