//! Shared testing harness for `patronus` integration tests.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fake_tmux::FakeTmux;

/// Programs the launcher resolves, in the order they are installed.
pub(crate) const PROGRAMS: [&str; 5] =
    ["configure.sh", "edit.py", "redact.py", "split.py", "server.py"];

/// Testing harness providing an isolated `$HOME`, installation prefix, and `tmux`.
///
/// Every stub program appends `<file name> <args>` to a shared log. Python stubs are
/// plain shell scripts; the workspace `config.toml` sets the interpreter to `sh`.
pub(crate) struct TestContext {
    root: TempDir,
    home: PathBuf,
    prefix: PathBuf,
    log_file: PathBuf,
    tmux: FakeTmux,
}

impl TestContext {
    /// Create an environment with every program installed in the flat layout.
    pub(crate) fn new() -> Self {
        let ctx = Self::bare();
        for program in PROGRAMS {
            ctx.install_program(&ctx.prefix.join(program), 0);
        }
        ctx
    }

    /// Create an environment with no programs installed.
    pub(crate) fn bare() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let home = root.path().join("home");
        let prefix = root.path().join("prefix").join("bin");
        let log_file = root.path().join("calls.log");
        fs::create_dir_all(&home).expect("Failed to create home");
        fs::create_dir_all(&prefix).expect("Failed to create prefix");
        fs::write(&log_file, "").expect("Failed to create call log");

        let tmux = FakeTmux::install(root.path(), &log_file);
        let ctx = Self { root, home, prefix, log_file, tmux };
        ctx.write_config("[launcher]\ninterpreter = \"sh\"\n");
        ctx
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        &self.home
    }

    /// Installation root handed to the launcher via `PATRONUS_PREFIX`.
    pub(crate) fn prefix(&self) -> &Path {
        &self.prefix
    }

    pub(crate) fn tmux(&self) -> &FakeTmux {
        &self.tmux
    }

    /// `$HOME/.local/.patronus`.
    pub(crate) fn workspace_root(&self) -> PathBuf {
        self.home.join(".local").join(".patronus")
    }

    pub(crate) fn static_dir(&self) -> PathBuf {
        self.workspace_root().join("static")
    }

    pub(crate) fn artifact_dirs(&self) -> Vec<PathBuf> {
        ["full", "redacted_full", "splits"].iter().map(|d| self.static_dir().join(d)).collect()
    }

    /// Package-managed site directory under the prefix.
    pub(crate) fn site_dir(&self) -> PathBuf {
        self.prefix
            .join("lib")
            .join(format!("patronus-{}", env!("CARGO_PKG_VERSION")))
            .join("site")
    }

    /// Template bundle location inside the site directory.
    pub(crate) fn bundle_dir(&self) -> PathBuf {
        self.site_dir().join("static")
    }

    pub(crate) fn write_config(&self, content: &str) {
        fs::create_dir_all(self.workspace_root()).expect("Failed to create workspace root");
        fs::write(self.workspace_root().join("config.toml"), content)
            .expect("Failed to write config.toml");
    }

    /// Write a logging stub at `path` that exits with `exit_code`.
    pub(crate) fn install_program(&self, path: &Path, exit_code: i32) {
        let name = path.file_name().expect("program path has a file name").to_string_lossy();
        let script = format!(
            "#!/bin/sh\necho \"{} $*\" >> \"{}\"\nexit {}\n",
            name,
            self.log_file.display(),
            exit_code
        );
        fs::create_dir_all(path.parent().expect("program path has a parent"))
            .expect("Failed to create program dir");
        fs::write(path, script).expect("Failed to write program stub");
        fs::set_permissions(path, fs::Permissions::from_mode(0o644))
            .expect("Failed to set permissions");
    }

    /// Populate the template bundle with markers and a sample asset.
    pub(crate) fn install_bundle(&self) {
        let bundle = self.bundle_dir();
        for dir in ["full", "redacted_full", "splits"] {
            fs::create_dir_all(bundle.join(dir)).expect("Failed to create bundle dir");
            fs::write(bundle.join(dir).join(".gitkeep"), "").expect("Failed to write marker");
        }
        fs::create_dir_all(bundle.join("templates")).expect("Failed to create templates dir");
        fs::write(bundle.join("templates").join("index.html"), "<h1>patronus</h1>")
            .expect("Failed to write template");
    }

    /// Lines appended by stub programs and the fake tmux, in call order.
    pub(crate) fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log_file)
            .unwrap_or_default()
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect()
    }

    /// Calls made to stub programs only.
    pub(crate) fn program_calls(&self) -> Vec<String> {
        self.calls().into_iter().filter(|line| !line.starts_with("tmux ")).collect()
    }

    /// Build a command for invoking the compiled `patronus` binary.
    pub(crate) fn cli(&self) -> Command {
        let path = format!(
            "{}:{}",
            self.tmux.bin_dir.display(),
            std::env::var("PATH").unwrap_or_default()
        );
        let mut cmd = Command::cargo_bin("patronus").expect("Failed to locate patronus binary");
        cmd.current_dir(self.root.path())
            .env("HOME", &self.home)
            .env("PATRONUS_PREFIX", &self.prefix)
            .env("PATH", path)
            .env_remove("PATRONUS_HOME")
            .env_remove("PATRONUS_LOG");
        cmd
    }
}
