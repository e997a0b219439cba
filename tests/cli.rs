use assert_cmd::Command;
use predicates::prelude::*;

fn scrawl_cmd() -> Command {
    Command::cargo_bin("scrawl").expect("binary exists")
}

#[test]
fn help_prints_about_line() {
    scrawl_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand sketch surface for Wayland compositors",
        ));
}

#[test]
fn startup_requires_wayland_env() {
    scrawl_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY not set"));
}

#[test]
fn invalid_shape_mode_is_rejected_before_startup() {
    scrawl_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .args(["--shape", "squiggle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shape mode 'squiggle'"));
}
