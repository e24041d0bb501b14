use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

use stepdeck::test_utils::fixtures::DeckFixture;

/// Fixture with the sample deck and an empty explicit config, so the
/// developer's own config files never leak into a run.
fn setup() -> DeckFixture {
    let fixture = DeckFixture::new();
    fixture.sample_deck();
    fixture.write("empty-config.toml", "");
    fixture
}

fn stepdeck(fixture: &DeckFixture) -> Command {
    let mut cmd = Command::cargo_bin("stepdeck").unwrap();
    cmd.current_dir(&fixture.root)
        .env("STEPDECK_CONFIG", fixture.root.join("empty-config.toml"))
        .env_remove("STEPDECK_OUTPUT_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("stepdeck").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("present"))
        .stdout(predicate::str::contains("outline"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("stepdeck").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_validate_plain() {
    let fixture = setup();
    stepdeck(&fixture)
        .args(["--plain", "validate", "talk.toml"])
        .assert()
        .success()
        .stdout("ok talk.toml: 3 slides, 3 reveal units, 6 states\n");
}

#[test]
fn test_validate_json() {
    let fixture = setup();
    let json = json_stdout(stepdeck(&fixture).args(["-m", "validate", "talk.toml"]));
    assert_eq!(json["status"], "ok");
    assert_eq!(json["data"]["slides"], 3);
    assert_eq!(json["data"]["reveal_units"], 3);
    assert_eq!(json["data"]["total_states"], 6);
    assert_eq!(json["data"]["format"], "toml");
}

#[test]
fn test_outline_plain() {
    let fixture = setup();
    stepdeck(&fixture)
        .args(["--plain", "outline", "talk.toml"])
        .assert()
        .success()
        .stdout("  1. Why test? (+2 steps)\n  2. Tools\n  3. <js code> (+1 step)\n");
}

#[test]
fn test_show_reveals_prefix_only() {
    let fixture = setup();
    stepdeck(&fixture)
        .args(["--plain", "show", "talk.toml", "--slide", "1", "--step", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("In working application"))
        .stdout(predicate::str::contains("When doing refactoring").not())
        .stdout(predicate::str::contains("(1 more to reveal)"));
}

#[test]
fn test_show_human_output() {
    let fixture = setup();
    stepdeck(&fixture)
        .args(["show", "talk.toml", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Why test?"))
        .stdout(predicate::str::contains("When doing refactoring"));
}

#[test]
fn test_show_step_saturates() {
    let fixture = setup();
    let json = json_stdout(stepdeck(&fixture).args(["-m", "show", "talk.toml", "--step", "99"]));
    assert_eq!(json["data"]["position"]["slide"], 1);
    assert_eq!(json["data"]["position"]["step"], 2);
    assert_eq!(json["data"]["visible"]["hidden"], 0);
}

#[test]
fn test_show_last_slide_all() {
    let fixture = setup();
    let json = json_stdout(stepdeck(&fixture).args(["-m", "show", "talk.toml", "-s", "3", "--all"]));
    assert_eq!(json["data"]["is_last"], true);
    assert_eq!(json["data"]["progress"], 1.0);
    assert_eq!(json["data"]["visible"]["revealed"][0]["content"]["kind"], "link");
}

#[test]
fn test_show_out_of_range() {
    let fixture = setup();
    stepdeck(&fixture)
        .args(["show", "talk.toml", "--slide", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"))
        .stderr(predicate::str::contains("valid: 1-3"));
}

#[test]
fn test_show_out_of_range_json_error() {
    let fixture = setup();
    let mut cmd = stepdeck(&fixture);
    cmd.args(["-m", "show", "talk.toml", "--slide", "9"]);
    cmd.assert().failure();
    let json = json_stdout(&mut cmd);
    assert_eq!(json["status"]["error"]["code"], "OUT_OF_RANGE");
    assert_eq!(json["status"]["error"]["numeric_code"], 101);
    assert_eq!(json["status"]["error"]["context"]["len"], 3);
}

#[test]
fn test_missing_deck() {
    let fixture = setup();
    stepdeck(&fixture)
        .args(["validate", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Deck not found: nowhere"));
}

#[test]
fn test_bare_name_uses_default_extension() {
    let fixture = setup();
    stepdeck(&fixture)
        .args(["--plain", "validate", "talk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 slides"));
}

#[test]
fn test_invalid_deck_reports_parse_error() {
    let fixture = setup();
    fixture.write("broken.yaml", "slides:\n  - content:\n      - kind: hologram\n");
    stepdeck(&fixture)
        .args(["validate", "broken.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Deck parse error"));
}

#[test]
fn test_empty_deck_fails() {
    let fixture = setup();
    fixture.write("empty.json", r#"{"title": "nothing", "slides": []}"#);
    stepdeck(&fixture)
        .args(["validate", "empty.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Deck has no slides"));
}

#[test]
fn test_present_requires_terminal() {
    let fixture = setup();
    stepdeck(&fixture)
        .args(["present", "talk.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Interactive terminal required"));
}

#[test]
fn test_config_file_sets_output_format() {
    let fixture = setup();
    let config = fixture.write("json.toml", "[output]\nformat = \"json\"\n");
    let json = json_stdout(
        stepdeck(&fixture)
            .arg("--config")
            .arg(&config)
            .args(["outline", "talk.toml"]),
    );
    assert_eq!(json["status"], "ok");
    assert_eq!(json["data"]["slides"][1]["title"], "Tools");
}

#[test]
fn test_env_overrides_output_format() {
    let fixture = setup();
    let json = json_stdout(
        stepdeck(&fixture)
            .env("STEPDECK_OUTPUT_FORMAT", "json")
            .args(["validate", "talk.toml"]),
    );
    assert_eq!(json["data"]["slides"], 3);
}

#[test]
fn test_invalid_config_fails() {
    let fixture = setup();
    let config = fixture.write("bad.toml", "[presenter]\ntick_ms = 0\n");
    stepdeck(&fixture)
        .arg("--config")
        .arg(&config)
        .args(["validate", "talk.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn test_show_progress_disabled_in_config() {
    let fixture = setup();
    let config = fixture.write("quiet.toml", "[presenter]\nshow_progress = false\n");
    stepdeck(&fixture)
        .arg("--config")
        .arg(&config)
        .args(["--plain", "show", "talk.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Why test?"))
        .stdout(predicate::str::contains("%").not())
        .stdout(predicate::str::contains("[---").not());
}

#[test]
fn test_show_progress_style_from_config() {
    let fixture = setup();
    let config = fixture.write("number.toml", "[presenter]\nprogress_style = \"number\"\n");
    stepdeck(&fixture)
        .arg("--config")
        .arg(&config)
        .args(["--plain", "show", "talk.toml", "-s", "3", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("6/6\n"));
}

#[test]
fn test_empty_slide_warning_only_in_report() {
    let fixture = setup();
    fixture.write(
        "blank.toml",
        "[[slides]]\ncontent = [{ kind = \"text\", text = \"hi\" }]\n\n[[slides]]\n",
    );
    stepdeck(&fixture)
        .args(["--plain", "validate", "blank.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning: slide 2 has no content"))
        .stderr(predicate::str::contains("no content").not());
}
