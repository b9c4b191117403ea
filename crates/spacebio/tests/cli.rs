//! CLI integration tests for spacebio commands.
//!
//! These tests focus on exit codes and JSON envelopes, not terminal formatting which may change.
//! Every run uses the fixed fallback or embedded corpus so no data directory is needed.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to run `spacebio` in `dir` with HOME isolated to it.
fn spacebio_in(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("spacebio").unwrap();
    cmd.env("HOME", dir)
        .env_remove("SPACEBIO_DATA_SOURCE")
        .env_remove("SPACEBIO_LOG")
        .current_dir(dir);
    cmd
}

/// Runs `args` against `source` and parses stdout as JSON.
fn json_output(dir: &Path, source: &str, args: &[&str]) -> Value {
    let output = spacebio_in(dir)
        .args(["--data-source", source])
        .args(args)
        .arg("--json")
        .output()
        .unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Strips ANSI escape sequences from a string.
fn strip_ansi(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            output.push(ch);
        }
    }

    output
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let dir = temp_dir();

        spacebio_in(dir.path()).arg("init").assert().success();

        let contents = fs::read_to_string(dir.path().join(".spacebio.toml")).unwrap();
        assert!(contents.contains("# [data]"));
    }

    #[test]
    fn fails_if_config_exists() {
        let dir = temp_dir();
        fs::write(dir.path().join(".spacebio.toml"), "existing").unwrap();

        spacebio_in(dir.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));

        let contents = fs::read_to_string(dir.path().join(".spacebio.toml")).unwrap();
        assert_eq!(contents, "existing");
    }

    #[test]
    fn force_overwrites() {
        let dir = temp_dir();
        fs::write(dir.path().join(".spacebio.toml"), "existing").unwrap();

        spacebio_in(dir.path())
            .args(["init", "--force"])
            .assert()
            .success();

        let contents = fs::read_to_string(dir.path().join(".spacebio.toml")).unwrap();
        assert_ne!(contents, "existing");
    }

    #[test]
    fn works_with_invalid_existing_config() {
        let dir = temp_dir();
        fs::write(dir.path().join(".spacebio.toml"), "not [valid toml").unwrap();

        spacebio_in(dir.path())
            .args(["init", "--force"])
            .assert()
            .success();
    }
}

mod search {
    use super::*;

    #[test]
    fn ranks_title_match_first() {
        let dir = temp_dir();
        let json = json_output(dir.path(), "fallback", &["search", "microgravity"]);

        assert_eq!(json["success"], true);
        assert_eq!(json["query"], "microgravity");
        assert_eq!(json["articles"][0]["id"], 1);
        assert_eq!(
            json["total"].as_u64().unwrap(),
            json["articles"].as_array().unwrap().len() as u64
        );
    }

    #[test]
    fn respects_limit() {
        let dir = temp_dir();
        let json = json_output(dir.path(), "embedded", &["search", "space", "-n", "2"]);
        assert_eq!(json["articles"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn filters_by_category() {
        let dir = temp_dir();
        let json = json_output(
            dir.path(),
            "fallback",
            &["search", "microgravity", "-c", "Plant Biology"],
        );
        let articles = json["articles"].as_array().unwrap();
        assert!(!articles.is_empty());
        for article in articles {
            let categories = article["categories"].as_array().unwrap();
            assert!(categories.iter().any(|c| c == "Plant Biology"));
        }
    }

    #[test]
    fn no_match_is_success() {
        let dir = temp_dir();
        let json = json_output(dir.path(), "fallback", &["search", "zzzqqq"]);
        assert_eq!(json["success"], true);
        assert_eq!(json["total"], 0);
    }

    #[test]
    fn requires_query() {
        let dir = temp_dir();
        spacebio_in(dir.path()).arg("search").assert().failure();
    }

    #[test]
    fn text_output_lists_titles() {
        let dir = temp_dir();
        let output = spacebio_in(dir.path())
            .args(["--data-source", "fallback", "search", "radiation"])
            .output()
            .unwrap();
        assert!(output.status.success());
        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("Molecular Biology of Radiation Exposure in Space"));
    }

    #[test]
    fn env_selects_data_source() {
        let dir = temp_dir();
        let output = spacebio_in(dir.path())
            .env("SPACEBIO_DATA_SOURCE", "embedded")
            .args(["stats", "--json"])
            .output()
            .unwrap();
        let json: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["data"]["totalArticles"], 30);
    }
}

mod get {
    use super::*;

    #[test]
    fn returns_article() {
        let dir = temp_dir();
        let json = json_output(dir.path(), "fallback", &["get", "3"]);
        assert_eq!(json["id"], 3);
        assert_eq!(
            json["title"],
            "Molecular Biology of Radiation Exposure in Space"
        );
    }

    #[test]
    fn missing_article_fails_with_envelope() {
        let dir = temp_dir();
        let output = spacebio_in(dir.path())
            .args(["--data-source", "fallback", "get", "999", "--json"])
            .output()
            .unwrap();
        assert!(!output.status.success());
        let json: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "article not found: 999");
    }

    #[test]
    fn missing_article_reports_on_stderr() {
        let dir = temp_dir();
        spacebio_in(dir.path())
            .args(["--data-source", "fallback", "get", "999"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error: article not found: 999"));
    }
}

mod publications {
    use super::*;

    #[test]
    fn lists_all_without_query() {
        let dir = temp_dir();
        let json = json_output(dir.path(), "embedded", &["publications"]);
        assert_eq!(json["success"], true);
        assert_eq!(json["total"], 30);
        assert!(
            json["publications"][0]["id"]
                .as_str()
                .unwrap()
                .starts_with("pub-")
        );
    }
}

mod stats {
    use super::*;

    #[test]
    fn overview_counts_fallback() {
        let dir = temp_dir();
        let json = json_output(dir.path(), "fallback", &["stats"]);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["totalArticles"], 5);
    }

    #[test]
    fn keywords_view() {
        let dir = temp_dir();
        let json = json_output(dir.path(), "embedded", &["stats", "--view", "keywords"]);
        assert!(json["data"]["topKeywords"].is_array());
    }

    #[test]
    fn rejects_unknown_view() {
        let dir = temp_dir();
        spacebio_in(dir.path())
            .args(["stats", "--view", "weekly"])
            .assert()
            .failure();
    }
}

mod insights {
    use super::*;

    #[test]
    fn filters_by_kind() {
        let dir = temp_dir();
        let json = json_output(dir.path(), "embedded", &["insights", "-k", "trend"]);
        assert_eq!(json["success"], true);
        for insight in json["insights"].as_array().unwrap() {
            assert_eq!(insight["type"], "trend");
        }
    }

    #[test]
    fn respects_limit() {
        let dir = temp_dir();
        let json = json_output(dir.path(), "embedded", &["insights", "-n", "1"]);
        assert!(json["insights"].as_array().unwrap().len() <= 1);
    }
}

mod shell {
    use super::*;

    #[test]
    fn answers_each_line_until_quit() {
        let dir = temp_dir();
        let output = spacebio_in(dir.path())
            .args(["--data-source", "fallback", "shell", "--json"])
            .write_stdin("microgravity\n\nquit\nradiation\n")
            .output()
            .unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("\"query\": \"microgravity\""));
        assert!(!stdout.contains("\"query\": \"radiation\""));
    }
}

mod check {
    use super::*;

    #[test]
    fn missing_data_root_fails() {
        let dir = temp_dir();
        spacebio_in(dir.path())
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("data root does not exist"));
    }

    #[test]
    fn embedded_source_passes() {
        let dir = temp_dir();
        spacebio_in(dir.path())
            .args(["--data-source", "embedded", "check"])
            .assert()
            .success();
    }
}

mod status {
    use super::*;

    #[test]
    fn reports_defaults_without_config() {
        let dir = temp_dir();
        let output = spacebio_in(dir.path()).arg("status").output().unwrap();
        assert!(output.status.success());
        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("none, using defaults"));
        assert!(stdout.contains("auto -> embedded"));
    }
}

mod config {
    use super::*;

    #[test]
    fn shows_local_override() {
        let dir = temp_dir();
        fs::write(
            dir.path().join(".spacebio.toml"),
            "[search]\nlimit = 7\n",
        )
        .unwrap();

        let output = spacebio_in(dir.path()).arg("config").output().unwrap();
        assert!(output.status.success());
        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("limit = 7"));
    }

    #[test]
    fn invalid_config_fails() {
        let dir = temp_dir();
        fs::write(dir.path().join(".spacebio.toml"), "not [valid toml").unwrap();

        spacebio_in(dir.path())
            .arg("config")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }
}
