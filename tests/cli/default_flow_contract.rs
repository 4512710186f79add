use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn starts_server_then_runs_utilities_in_order() {
    let ctx = TestContext::new();

    ctx.cli()
        .assert()
        .success()
        .stdout(predicate::str::contains("Server started: http://127.0.0.1:8005"));

    let calls = ctx.calls();
    let server = ctx.prefix().join("server.py");
    assert_eq!(
        calls,
        [
            "tmux has-session -t =flask_server".to_string(),
            format!("tmux new-session -d -s flask_server sh {}", server.display()),
            "edit.py".to_string(),
            "redact.py".to_string(),
            "split.py".to_string(),
        ]
    );
    assert!(ctx.tmux().has_session("flask_server"));
}

#[test]
fn running_session_is_reused() {
    let ctx = TestContext::new();
    ctx.tmux().start_session("flask_server");

    ctx.cli()
        .assert()
        .success()
        .stdout(predicate::str::contains("flask_server session active"));

    assert!(ctx.calls().iter().all(|line| !line.starts_with("tmux new-session")));
    assert_eq!(ctx.program_calls(), ["edit.py", "redact.py", "split.py"]);
}

#[test]
fn session_name_comes_from_config() {
    let ctx = TestContext::new();
    ctx.write_config("[launcher]\ninterpreter = \"sh\"\nsession_name = \"patronus-web\"\n");

    ctx.cli().assert().success();

    assert!(ctx.tmux().has_session("patronus-web"));
    assert!(!ctx.tmux().has_session("flask_server"));
}

#[test]
fn seeded_placeholders_are_removed() {
    let ctx = TestContext::new();
    ctx.install_bundle();

    ctx.cli()
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied static files"))
        .stdout(predicate::str::contains(".gitkeep"));

    for dir in ctx.artifact_dirs() {
        assert!(dir.is_dir());
        assert!(!dir.join(".gitkeep").exists());
    }
    assert!(ctx.static_dir().join("templates").join("index.html").exists());
}

#[test]
fn failing_utility_stops_the_sequence() {
    let ctx = TestContext::new();
    ctx.install_program(&ctx.prefix().join("redact.py"), 4);

    ctx.cli().assert().code(4);

    assert_eq!(ctx.program_calls(), ["edit.py", "redact.py"]);
}

#[test]
fn missing_session_tool_aborts_before_utilities() {
    let ctx = TestContext::new();
    ctx.write_config(
        "[launcher]\ninterpreter = \"sh\"\nsession_tool = \"/nonexistent/tmux\"\n",
    );

    ctx.cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to start session 'flask_server'"));

    assert!(ctx.program_calls().is_empty());
}
