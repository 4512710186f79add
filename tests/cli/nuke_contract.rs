use crate::harness::TestContext;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::symlink;

#[test]
fn nuke_empties_artifact_directories() {
    let ctx = TestContext::new();
    ctx.cli().arg("--nuke").assert().success();

    let outside = assert_fs::TempDir::new().unwrap();
    outside.child("keep.txt").write_str("keep").unwrap();

    let dirs = ctx.artifact_dirs();
    fs::write(dirs[0].join("recording.cast"), "cast").unwrap();
    fs::create_dir_all(dirs[1].join("nested/deeper")).unwrap();
    fs::write(dirs[1].join("nested/deeper/redacted.cast"), "cast").unwrap();
    symlink(outside.path(), dirs[2].join("linked")).unwrap();

    ctx.cli()
        .arg("--nuke")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nuked all contents from"));

    for dir in &dirs {
        assert!(dir.is_dir(), "{} should survive nuke", dir.display());
        assert_eq!(fs::read_dir(dir).unwrap().count(), 0, "{} should be empty", dir.display());
    }
    outside.child("keep.txt").assert("keep");
}

#[test]
fn nuke_runs_no_programs() {
    let ctx = TestContext::new();

    ctx.cli().arg("--nuke").assert().success();

    assert!(ctx.calls().is_empty());
}

#[test]
fn toggle_wins_over_nuke() {
    let ctx = TestContext::new();
    ctx.cli().arg("--nuke").assert().success();
    let artifact = ctx.artifact_dirs()[0].join("keep.cast");
    fs::write(&artifact, "cast").unwrap();

    ctx.cli().args(["--nuke", "on"]).assert().success();

    assert!(artifact.exists(), "toggle mode must not wipe the workspace");
    assert_eq!(ctx.program_calls(), ["configure.sh"]);
}
