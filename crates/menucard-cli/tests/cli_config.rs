use assert_cmd::Command;
use menucard_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_config_path_uses_env_override() {
    let world = TestWorld::new();
    let result = world.run(&["config", "path"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(
        result.stdout().trim(),
        world.config_path().display().to_string()
    );
}

#[test]
fn test_config_flag_beats_env() {
    let world = TestWorld::new();
    let explicit = world.temp_dir().join("elsewhere.toml");
    let explicit = explicit.to_str().unwrap();

    let result = world
        .run(&["--config", explicit, "config", "path"])
        .unwrap();

    assert!(result.success());
    assert_eq!(result.stdout().trim(), explicit);
}

#[test]
fn test_config_show_json_without_file_uses_defaults() {
    let world = TestWorld::new();
    let result = world.run(&["config", "show", "--format", "json"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().unwrap();
    assert_eq!(json["content"]["exists"], false);
    assert_eq!(json["content"]["title"], "Tonight's Dining Selection");
    assert_eq!(json["content"]["currency_label"], "R");
    assert_eq!(json["content"]["tick_rate_ms"], 250);
    assert_eq!(json["badge"]["level"], "info");
    assert_eq!(json["suggestions"][0]["command"], "menucard config init");
}

#[test]
fn test_config_show_merges_partial_file_with_defaults() {
    let world = TestWorld::new().with_config(
        r#"
[display]
title = "Chef's Specials"
"#,
    );

    let result = world.run(&["config", "show", "--format", "json"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().unwrap();
    assert_eq!(json["content"]["exists"], true);
    assert_eq!(json["content"]["title"], "Chef's Specials");
    assert_eq!(json["content"]["currency_label"], "R");
    assert!(json.get("badge").is_none());
}

#[test]
fn test_config_show_plain_lists_keys() {
    let world = TestWorld::new();
    let result = world.run(&["config", "show"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("currency_label = R"));
    assert!(result.stdout().contains("menucard config init"));
}

#[test]
fn test_config_init_refuses_to_overwrite_without_force() {
    let world = TestWorld::new();

    let first = world.run(&["config", "init"]).unwrap();
    assert!(first.success(), "stderr: {}", first.stderr());
    assert!(world.config_path().exists());
    assert!(first.stdout().contains("Config file written"));

    let written = std::fs::read_to_string(world.config_path()).unwrap();
    assert!(written.contains("[display]"));
    assert!(written.contains("tick_rate_ms = 250"));

    let second = world.run(&["config", "init"]).unwrap();
    assert!(!second.success());
    assert!(second.stderr().contains("Error: Config file already exists"));

    let forced = world.run(&["config", "init", "--force"]).unwrap();
    assert!(forced.success(), "stderr: {}", forced.stderr());
}

#[test]
fn test_invalid_config_is_reported() {
    let world = TestWorld::new().with_config("[display\ntitle = ");
    let result = world.run(&["config", "show"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Failed to parse config"));
}

#[test]
fn test_log_file_receives_json_events() {
    let world = TestWorld::new();
    let log_path = world.temp_dir().join("logs").join("menucard.log");

    let result = world
        .run(&[
            "--log-file",
            log_path.to_str().unwrap(),
            "config",
            "init",
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let log = std::fs::read_to_string(&log_path).unwrap();
    let events: Vec<serde_json::Value> = log
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert!(
        events
            .iter()
            .any(|e| e["fields"]["event"] == "cli.config.initialized")
    );
}

#[test]
#[allow(deprecated)]
fn test_help_lists_subcommands() {
    Command::cargo_bin("menucard")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("config"));
}

#[test]
#[allow(deprecated)]
fn test_unknown_format_is_rejected() {
    let world = TestWorld::new();
    let mut cmd = Command::cargo_bin("menucard").unwrap();
    world
        .configure_command(&mut cmd)
        .args(["config", "show", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
