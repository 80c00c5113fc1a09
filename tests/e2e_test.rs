/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Runs the binary inside `dir` so config discovery and default paths stay isolated
fn cmd_in(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("line-reverser");
    cmd.current_dir(dir);
    cmd
}

fn write_input(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("in_file.txt");
    fs::write(&path, content).unwrap();
    path
}

fn reverse_file(content: &str) -> String {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), content);
    let output = temp_dir.path().join("out_file.txt");

    cmd_in(temp_dir.path())
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    fs::read_to_string(&output).unwrap()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("line-reverser")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("Usage"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("line-reverser")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("line-reverser")
            .arg("--invalid-option")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("--invalid-option"));
    }

    /// Exit code 2: Invalid trim value
    #[test]
    fn test_exit_code_invalid_trim() {
        cargo_bin_cmd!("line-reverser")
            .args(["--trim", "sideways"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - missing input file
    #[test]
    fn test_exit_code_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        cmd_in(temp_dir.path())
            .args(["-i", "missing.txt", "-o", "out.txt"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Input is unavailable"));
    }

    /// Exit code 3: Application error - output directory does not exist
    #[test]
    fn test_exit_code_unwritable_output() {
        let temp_dir = TempDir::new().unwrap();
        write_input(temp_dir.path(), "abc\n");
        cmd_in(temp_dir.path())
            .args(["-i", "in_file.txt", "-o", "no/such/dir/out.txt"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Output is unavailable"));
    }
}

#[test]
fn test_e2e_hello_world() {
    assert_eq!(reverse_file("hello\nworld\n"), "olleh\ndlrow\n");
}

#[test]
fn test_e2e_single_empty_line() {
    assert_eq!(reverse_file("\n"), "\n");
}

#[test]
fn test_e2e_palindrome() {
    assert_eq!(reverse_file("12321\n"), "12321\n");
}

#[test]
fn test_e2e_multibyte() {
    assert_eq!(reverse_file("café\n"), "éfac\n");
}

#[test]
fn test_e2e_old_mac_line_endings() {
    assert_eq!(reverse_file("ab\rcd\r\n\u{1f}ef\u{1f}\n"), "ba\ndc\nfe\n");
}

#[test]
fn test_e2e_missing_input_does_not_touch_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out_file.txt");
    fs::write(&output, "previous\n").unwrap();

    cmd_in(temp_dir.path())
        .arg("-i")
        .arg(temp_dir.path().join("missing.txt"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&output).unwrap(), "previous\n");
}

#[test]
fn test_e2e_missing_input_creates_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out_file.txt");

    cmd_in(temp_dir.path())
        .args(["-i", "missing.txt", "-o", "out_file.txt", "-q"])
        .assert()
        .failure();

    assert!(!output.exists());
}

#[test]
fn test_e2e_default_paths() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    fs::create_dir(&data_dir).unwrap();
    fs::write(data_dir.join("in_file.txt"), "abc\n").unwrap();

    cmd_in(temp_dir.path()).assert().success();

    assert_eq!(
        fs::read_to_string(data_dir.join("out_file.txt")).unwrap(),
        "cba\n"
    );
}

#[test]
fn test_e2e_trim_policy_flag() {
    let temp_dir = TempDir::new().unwrap();
    write_input(temp_dir.path(), "  ab \n");

    cmd_in(temp_dir.path())
        .args(["-i", "in_file.txt", "-o", "full.txt"])
        .assert()
        .success();
    cmd_in(temp_dir.path())
        .args(["-i", "in_file.txt", "-o", "kept.txt", "--trim", "terminator"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("full.txt")).unwrap(),
        "ba\n"
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("kept.txt")).unwrap(),
        " ba  \n"
    );
}

#[test]
fn test_e2e_progress_on_stderr_and_quiet() {
    let temp_dir = TempDir::new().unwrap();
    write_input(temp_dir.path(), "abc\n");

    cmd_in(temp_dir.path())
        .args(["-i", "in_file.txt", "-o", "out.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Read 1 line(s)"));

    cmd_in(temp_dir.path())
        .args(["-i", "in_file.txt", "-o", "out.txt", "--quiet"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_e2e_discovered_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("source.txt"), "  xyz\n").unwrap();
    fs::write(
        temp_dir.path().join("line-reverser.config.yml"),
        "input_path: source.txt\noutput_path: target.txt\ntrim: terminator\n",
    )
    .unwrap();

    cmd_in(temp_dir.path()).arg("-q").assert().success();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("target.txt")).unwrap(),
        "zyx  \n"
    );
}

#[test]
fn test_e2e_cli_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    write_input(temp_dir.path(), "abc\n");
    fs::write(
        temp_dir.path().join("custom.yml"),
        "input_path: in_file.txt\noutput_path: from_config.txt\n",
    )
    .unwrap();

    cmd_in(temp_dir.path())
        .args(["-c", "custom.yml", "-o", "from_cli.txt", "-q"])
        .assert()
        .success();

    assert!(temp_dir.path().join("from_cli.txt").exists());
    assert!(!temp_dir.path().join("from_config.txt").exists());
}

#[test]
fn test_e2e_explicit_config_must_exist() {
    let temp_dir = TempDir::new().unwrap();
    cmd_in(temp_dir.path())
        .args(["-c", "nope.yml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}
