//! Integration tests running the `sfx` binary.
//!
//! Every run points `SFX_CONFIG` at a path inside a temp directory so a
//! user config file cannot change the output.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Run sfx with given args and config path, colorless unless `--color` is given
fn run_sfx(args: &[&str], config: &Path) -> (String, String, bool) {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sfx"));
    cmd.args(args);
    if !args.iter().any(|a| a.starts_with("--color")) {
        cmd.arg("--color=never");
    }

    let output = cmd
        .env("SFX_CONFIG", config)
        .env_remove("SFX_SAMPLES")
        .env_remove("SFX_COLOR")
        .env_remove("SFX_CASE_INSENSITIVE")
        .env_remove("SFX_MAX_INPUT_LEN")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run sfx");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn no_config() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    (dir, path)
}

#[test]
fn test_suffixes_listing() {
    let (_dir, config) = no_config();
    let (stdout, _, ok) = run_sfx(&["suffixes", "banana"], &config);

    assert!(ok);
    assert_eq!(
        stdout,
        "banana$\n\
         Suffix ID: 6, $\n\
         Suffix ID: 5, a$\n\
         Suffix ID: 3, ana$\n\
         Suffix ID: 1, anana$\n\
         Suffix ID: 0, banana$\n\
         Suffix ID: 4, na$\n\
         Suffix ID: 2, nana$\n"
    );
}

#[test]
fn test_suffixes_json() {
    let (_dir, config) = no_config();
    let (stdout, _, ok) = run_sfx(&["suffixes", "aab", "--json"], &config);

    assert!(ok);
    let ids: Vec<u64> = stdout
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["id"].as_u64().unwrap()
        })
        .collect();
    assert_eq!(ids, vec![3, 0, 1, 2]);
}

#[test]
fn test_demo_runs_default_samples() {
    let (_dir, config) = no_config();
    let (stdout, _, ok) = run_sfx(&[], &config);

    assert!(ok);
    let headers: Vec<_> = stdout.lines().filter(|l| l.ends_with('$') && !l.starts_with("Suffix")).collect();
    assert_eq!(headers.len(), 10);
    assert_eq!(headers[0], "abcabxabcyababcdaaaabc$");
    assert_eq!(headers[3], "banana$");
    assert_eq!(headers[9], "abacabad$");
}

#[test]
fn test_demo_uses_config_file() {
    let (_dir, config) = no_config();
    fs::write(&config, r#"{ "samples": ["ab", "ba"] }"#).unwrap();

    let (stdout, _, ok) = run_sfx(&["demo"], &config);
    assert!(ok);
    assert_eq!(
        stdout,
        "ab$\nSuffix ID: 2, $\nSuffix ID: 0, ab$\nSuffix ID: 1, b$\n\n\
         ba$\nSuffix ID: 2, $\nSuffix ID: 1, a$\nSuffix ID: 0, ba$\n\n"
    );
}

#[test]
fn test_invalid_input_fails() {
    let (_dir, config) = no_config();

    let (_, stderr, ok) = run_sfx(&["suffixes", "ab$cd"], &config);
    assert!(!ok);
    assert!(stderr.contains("terminal symbol"), "stderr: {}", stderr);

    let (_, stderr, ok) = run_sfx(&["suffixes", "Hello"], &config);
    assert!(!ok);
    assert!(stderr.contains("unsupported symbol"), "stderr: {}", stderr);
}

#[test]
fn test_ignore_case() {
    let (_dir, config) = no_config();
    let (stdout, _, ok) = run_sfx(&["-i", "suffixes", "AB"], &config);

    assert!(ok);
    assert!(stdout.starts_with("ab$\n"));
}

#[test]
fn test_find() {
    let (_dir, config) = no_config();

    let (stdout, _, ok) = run_sfx(&["find", "abracadabra", "abra"], &config);
    assert!(ok);
    assert_eq!(stdout, "0:abracadabra\n7:abracadabra\n");

    let (stdout, _, ok) = run_sfx(&["find", "abracadabra", "xyz"], &config);
    assert!(!ok);
    assert!(stdout.is_empty());
}

#[test]
fn test_stats_json() {
    let (_dir, config) = no_config();
    let (stdout, _, ok) = run_sfx(&["stats", "mississippi", "--json"], &config);

    assert!(ok);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["text"], "mississippi$");
    assert_eq!(value["leaves"], 12);
    assert_eq!(value["phases"], 12);
}

#[test]
fn test_check() {
    let (_dir, config) = no_config();
    let (stdout, _, ok) = run_sfx(&["check", "woolloomooloo"], &config);

    assert!(ok);
    assert!(stdout.starts_with("ok: "));
}

#[test]
fn test_color_always_when_piped() {
    let (_dir, config) = no_config();

    let (stdout, _, ok) = run_sfx(&["--color=always", "suffixes", "ab"], &config);
    assert!(ok);
    assert!(stdout.contains("\x1b["), "stdout: {:?}", stdout);

    let (stdout, _, ok) = run_sfx(&["--color=auto", "suffixes", "ab"], &config);
    assert!(ok);
    assert!(!stdout.contains("\x1b["));
}
