use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const RECT_SCRIPT: &str = r#"
[[step]]
action = "select"
tool = "rect-outline"

[[step]]
action = "down"
x = 10.0
y = 10.0

[[step]]
action = "move"
x = 30.0
y = 20.0

[[step]]
action = "up"
x = 50.0
y = 30.0
"#;

fn strokepad_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("strokepad").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn strokepad_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    strokepad_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Replay drawing gestures on a headless canvas",
        ));
}

#[test]
fn rect_script_prints_committed_outline() {
    let temp = TempDir::new().unwrap();
    let script = write(&temp, "rect.toml", RECT_SCRIPT);
    let config = write(&temp, "config.toml", "[drawing]\ncolor = \"red\"\n");

    strokepad_cmd(temp.path())
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"rect-outline\""))
        .stdout(predicate::str::contains("\"x\": 50.0"))
        .stdout(predicate::str::contains("\"a\": 0.8"));
}

#[test]
fn press_outside_narrow_canvas_commits_nothing() {
    let temp = TempDir::new().unwrap();
    let script = write(&temp, "rect.toml", RECT_SCRIPT);

    strokepad_cmd(temp.path())
        .arg(&script)
        .args(["--width", "5", "--height", "5"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn declined_clear_keeps_content() {
    let temp = TempDir::new().unwrap();
    let script = write(
        &temp,
        "clear.toml",
        &format!(
            "{RECT_SCRIPT}{}{}",
            "\n[[step]]\naction = \"select\"\ntool = \"clear\"\n",
            "\n[[step]]\naction = \"answer\"\nreply = \"no\"\n",
        ),
    );

    strokepad_cmd(temp.path())
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("rect-outline"));
}

#[test]
fn missing_script_fails_with_path() {
    let temp = TempDir::new().unwrap();
    strokepad_cmd(temp.path())
        .arg(temp.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn answer_without_prompt_fails() {
    let temp = TempDir::new().unwrap();
    let script = write(&temp, "bad.toml", "[[step]]\naction = \"answer\"\nreply = \"yes\"\n");

    strokepad_cmd(temp.path())
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no confirmation is waiting"));
}

#[test]
fn config_schema_lists_sections() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("freehand_threshold"))
        .stdout(predicate::str::contains("polyline"));
}

#[test]
fn bundled_demo_replays() {
    let temp = TempDir::new().unwrap();
    let demo = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/polyline.toml");

    strokepad_cmd(temp.path())
        .arg(&demo)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"rect-outline\""))
        .stdout(predicate::str::contains("\"kind\": \"polyline\""));
}

#[test]
fn init_config_writes_example_once() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("strokepad").join("config.toml");

    strokepad_cmd(temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    let written = std::fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("freehand_threshold = 20.0"));

    strokepad_cmd(temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn script_is_required_without_init_config() {
    let temp = TempDir::new().unwrap();
    strokepad_cmd(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("required arguments were not provided"));
}
