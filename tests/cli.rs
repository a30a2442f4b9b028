use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary against an empty config home so user settings never leak in.
fn pixelboard_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pixelboard").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn pixelboard_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    pixelboard_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Headless driver for a multi-frame, multi-layer pixel-art editor",
        ));
}

#[test]
fn print_config_shows_defaults_and_overrides() {
    let temp = TempDir::new().unwrap();
    pixelboard_cmd(&temp)
        .args(["--print-config", "--width", "16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("width = 16"))
        .stdout(predicate::str::contains("height = 32"))
        .stdout(predicate::str::contains("max_depth = 50"));
}

#[test]
fn script_from_stdin_prints_projection() {
    let temp = TempDir::new().unwrap();
    let script = concat!(
        r##"{"type": "set_color", "color": "#FF0000"}"##,
        "\n",
        r##"{"type": "set_pixel", "frame": 0, "layer": "layer-2", "x": 3, "y": 3, "color": "#000000"}"##,
        "\n",
        r#"{"pointer": "press", "x": 4, "y": 4}"#,
        "\n",
        r#"{"pointer": "release", "x": 4, "y": 4}"#,
        "\n",
    );

    pixelboard_cmd(&temp)
        .args(["--width", "8", "--height", "8"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(r##""color": "#FF0000""##))
        .stdout(predicate::str::contains(r#""undo_depth": 2"#))
        .stdout(predicate::str::contains(r#""x": 3"#));
}

#[test]
fn script_file_and_config_file_are_used() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("custom.toml");
    std::fs::write(
        &config_path,
        "[canvas]\nwidth = 4\nheight = 4\n\n[drawing]\ndefault_tool = \"fill\"\n",
    )
    .unwrap();
    let script_path = temp.path().join("fill.jsonl");
    std::fs::write(
        &script_path,
        "# fill everything\n{\"pointer\": \"press\", \"x\": 1, \"y\": 1}\n",
    )
    .unwrap();

    let output = pixelboard_cmd(&temp)
        .arg("--config")
        .arg(&config_path)
        .arg(&script_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["tool"], "fill");
    assert_eq!(value["projection"]["width"], 4);
    let cells = value["projection"]["layers"][0]["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 16);
}

#[test]
fn bad_script_line_fails_with_line_number() {
    let temp = TempDir::new().unwrap();
    pixelboard_cmd(&temp)
        .write_stdin("{\"type\": \"add_frame\"}\n{\"type\": \"nope\"}\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn keep_going_skips_bad_lines() {
    let temp = TempDir::new().unwrap();
    pixelboard_cmd(&temp)
        .arg("--keep-going")
        .write_stdin("garbage\n{\"type\": \"add_frame\"}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""frames": 2"#));
}

#[test]
fn missing_config_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    pixelboard_cmd(&temp)
        .args(["--config", "/nonexistent/pixelboard.toml"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn dump_config_schema_prints_json() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"history\""));
}
