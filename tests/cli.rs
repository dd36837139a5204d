// SPDX-License-Identifier: MIT

//! CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lintrc() -> Command {
    Command::cargo_bin("lintrc").expect("binary builds")
}

#[test]
fn init_writes_standard_config() {
    let dir = TempDir::new().unwrap();

    lintrc()
        .current_dir(dir.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created lintrc.toml"));

    let content = std::fs::read_to_string(dir.path().join("lintrc.toml")).unwrap();
    assert!(content.contains("conventional"));
    assert!(content.contains("header-max-length"));
    assert!(content.contains("150"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("lintrc.toml"), "extends = []\n").unwrap();

    lintrc()
        .current_dir(dir.path())
        .args(["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    lintrc()
        .current_dir(dir.path())
        .args(["init", "--force", "--preset", "relaxed"])
        .assert()
        .success();

    let content = std::fs::read_to_string(dir.path().join("lintrc.toml")).unwrap();
    assert!(content.contains("200"));
}

#[test]
fn audit_passes_on_generated_config() {
    let dir = TempDir::new().unwrap();

    lintrc()
        .current_dir(dir.path())
        .args(["init", "--preset", "automation"])
        .assert()
        .success();

    lintrc()
        .current_dir(dir.path())
        .args(["audit", "lintrc.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clean"));
}

#[test]
fn audit_fails_on_unknown_ruleset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "extends = [\"angular\"]\n").unwrap();

    lintrc()
        .current_dir(dir.path())
        .args(["audit", "bad.toml"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("extends-unknown"));
}

#[test]
fn audit_strict_promotes_warnings() {
    let dir = TempDir::new().unwrap();
    // Extending nothing is legal but yields a warning.
    std::fs::write(dir.path().join("warn.toml"), "extends = []\n").unwrap();

    lintrc()
        .current_dir(dir.path())
        .args(["audit", "warn.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("extends-empty"));

    lintrc()
        .current_dir(dir.path())
        .args(["audit", "warn.toml", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("0 errors, 1 warnings"));
}

#[test]
fn ignored_exempts_brew_cask_update() {
    let dir = TempDir::new().unwrap();

    lintrc()
        .current_dir(dir.path())
        .args(["init", "--preset", "automation"])
        .assert()
        .success();

    lintrc()
        .current_dir(dir.path())
        .args(["ignored", "Brew cask update v1.2.3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exempt"));

    lintrc()
        .current_dir(dir.path())
        .args(["ignored", "feat: add widget"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("subject to linting"));
}

#[test]
fn show_prints_resolved_rules() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lintrc.toml");
    std::fs::write(
        &path,
        "extends = [\"conventional\"]\n\n[rules]\n\"header-max-length\" = [2, \"always\", 200]\n",
    )
    .unwrap();

    lintrc()
        .current_dir(dir.path())
        .args(["show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("header-max-length"))
        .stdout(predicate::str::contains("200"))
        // Inherited from the conventional base ruleset.
        .stdout(predicate::str::contains("type-enum"));
}

#[test]
fn show_json_is_machine_readable() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("lintrc.toml"),
        "extends = [\"conventional\"]\n",
    )
    .unwrap();

    let output = lintrc()
        .current_dir(dir.path())
        .args(["show", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["extends"][0], "conventional");
    assert!(json["rules"]["header-max-length"].is_array());
}

#[test]
fn home_config_is_discovered() {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("lintrc.toml"),
        "extends = [\"conventional\"]\n\n[rules]\n\"header-max-length\" = [2, \"always\", 177]\n",
    )
    .unwrap();

    lintrc()
        .current_dir(cwd.path())
        .env("HOME", home.path())
        .args(["show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("177"));
}

#[test]
fn xdg_config_is_discovered() {
    // Home is checked first, so it must stay empty here.
    let home = TempDir::new().unwrap();
    let xdg = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    let app_dir = xdg.path().join("lintrc");
    std::fs::create_dir_all(&app_dir).unwrap();
    std::fs::write(
        app_dir.join("config.toml"),
        "extends = [\"conventional\"]\n\n[rules]\n\"header-max-length\" = [2, \"always\", 188]\n",
    )
    .unwrap();

    lintrc()
        .current_dir(cwd.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", xdg.path())
        .args(["show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("188"));
}

#[test]
fn rulesets_lists_conventional() {
    lintrc()
        .args(["rulesets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("conventional"));
}

#[test]
fn config_flag_overrides_discovery() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(
        &path,
        "extends = [\"conventional\"]\n\n[[ignores]]\nprefix = \"Brew cask update\"\n",
    )
    .unwrap();

    lintrc()
        .current_dir(dir.path())
        .args([
            "--config",
            "custom.toml",
            "ignored",
            "Brew cask update v1.2.3",
        ])
        .assert()
        .success();
}
