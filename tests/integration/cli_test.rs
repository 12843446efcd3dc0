//! The `jobboard` binary driven end to end.

use std::process::Output;

use tokio::process::Command;

use crate::helpers::{PASSWORD, TestApp};

async fn run(app: &TestApp, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jobboard"))
        .args(["--config", "does/not/exist"])
        .args(args)
        .env("JOBBOARD__API__BASE_URL", &app.backend.base_url)
        .env(
            "JOBBOARD__SESSION__STORAGE_PATH",
            app.session_path.display().to_string(),
        )
        .env("RUST_LOG", "off")
        .output()
        .await
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[tokio::test]
async fn test_config_show_reflects_environment() {
    let app = TestApp::new().await;

    let output = run(&app, &["--format", "json", "config", "show"]).await;

    assert!(output.status.success());
    let config: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(config["api"]["base_url"], app.backend.base_url.as_str());
    assert_eq!(
        config["session"]["storage_path"],
        app.session_path.display().to_string()
    );
}

#[tokio::test]
async fn test_login_then_whoami_across_processes() {
    let app = TestApp::new().await;

    let login = run(
        &app,
        &["auth", "login", "--email", "boss@example.com", "--password", PASSWORD],
    )
    .await;
    assert!(login.status.success());
    assert!(stdout(&login).contains("Login successful!"));

    let whoami = run(&app, &["--format", "json", "auth", "whoami"]).await;
    assert!(whoami.status.success());
    assert!(stdout(&whoami).contains("boss@example.com"));
    assert!(stdout(&whoami).contains("employer"));
}

#[tokio::test]
async fn test_protected_command_prompts_for_login() {
    let app = TestApp::new().await;

    let output = run(&app, &["jobs", "mine"]).await;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Please log in to access /job-dashboard"));
}

#[tokio::test]
async fn test_seeker_is_denied_employer_command() {
    let app = TestApp::new().await;
    run(
        &app,
        &["auth", "login", "--email", "dev@example.com", "--password", PASSWORD],
    )
    .await;

    let output = run(&app, &["jobs", "mine"]).await;

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Access Denied"));
    assert!(text.contains("restricted to employers only"));
}

#[tokio::test]
async fn test_failed_login_exits_nonzero() {
    let app = TestApp::new().await;

    let output = run(
        &app,
        &["auth", "login", "--email", "boss@example.com", "--password", "nope"],
    )
    .await;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid email or password"));
}
