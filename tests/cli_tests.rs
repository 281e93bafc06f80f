mod common;

use common::{run_meetflow, TestEnv};

#[test]
fn meetflow_help_shows_usage() {
    let output = run_meetflow(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("Commands:"));
    assert!(
        !stderr.contains("No config file found"),
        "--help should not log config fallback noise\nstderr:\n{}",
        stderr
    );
}

#[test]
fn meetflow_version_shows_version() {
    let output = run_meetflow(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--version should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("meetflow "));
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_meetflow(&["completions", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "completions bash should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(
        stdout.contains("meetflow"),
        "expected completion output to reference command name\nstdout:\n{}",
        stdout
    );
}

#[test]
fn sample_prints_parseable_transcript() {
    let output = run_meetflow(&["sample"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("[0-10s] Alex (Project Manager):"));
    assert!(stdout.contains("Sarah (Lead Developer)"));
    assert_eq!(stdout.lines().count(), 11);
}

#[test]
fn config_show_works() {
    let output = run_meetflow(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config show should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("[llm]"));
    assert!(stdout.contains("provider"));
    assert!(stdout.contains("[render]"));
}

#[test]
fn config_path_returns_valid_path() {
    let output = run_meetflow(&["config", "path"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_init_creates_file_and_respects_force() {
    let env = TestEnv::new();

    let output = env.run(&["config", "init"]);
    assert!(
        output.status.success(),
        "config init should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(env.config_path().exists());

    // A second init without --force must refuse to overwrite.
    let output = env.run(&["config", "init"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"));

    let output = env.run(&["config", "init", "--force"]);
    assert!(output.status.success());
}
