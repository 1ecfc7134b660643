use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// TestHarness provides an isolated advent project: a temporary directory
/// with `.advent/config.md`, an `inputs/` tree and its own HOME so the
/// developer's global config never leaks into a test.
pub struct TestHarness {
    pub dir: TempDir,
    #[allow(dead_code)]
    pub config_path: PathBuf,
    pub inputs_dir: PathBuf,
    pub advent_binary: PathBuf,
}

impl TestHarness {
    /// Creates a new test harness with default configuration.
    /// Sets up:
    /// - Temporary directory (auto-cleaned on drop)
    /// - .advent/config.md with an empty frontmatter
    /// - inputs/ directory
    /// - home/ directory used as HOME
    pub fn new() -> Self {
        Self::with_config("---\n---\n\n# Advent\n")
    }

    /// Creates a test harness with custom config content.
    pub fn with_config(config_content: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path();

        let config_path = base_path.join(".advent/config.md");
        let inputs_dir = base_path.join("inputs");

        fs::create_dir_all(base_path.join(".advent")).expect("Failed to create .advent dir");
        fs::create_dir_all(&inputs_dir).expect("Failed to create inputs dir");
        fs::create_dir_all(base_path.join("home")).expect("Failed to create home dir");
        fs::write(&config_path, config_content).expect("Failed to write config");

        TestHarness {
            dir: temp_dir,
            config_path,
            inputs_dir,
            advent_binary: PathBuf::from(env!("CARGO_BIN_EXE_advent")),
        }
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes an input file using the default layout.
    pub fn write_input(&self, year: u16, day: u8, content: &str) -> PathBuf {
        let path = self
            .inputs_dir
            .join(year.to_string())
            .join(format!("day{:02}.txt", day));
        fs::create_dir_all(path.parent().expect("input path has a parent"))
            .expect("Failed to create year dir");
        fs::write(&path, content).expect("Failed to write input");
        path
    }

    /// Writes a global config file under the harness HOME.
    #[allow(dead_code)]
    pub fn write_global_config(&self, content: &str) {
        let path = self.path().join("home/.config/advent/config.md");
        fs::create_dir_all(path.parent().expect("config path has a parent"))
            .expect("Failed to create global config dir");
        fs::write(path, content).expect("Failed to write global config");
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.advent_binary);
        command
            .current_dir(self.path())
            .env("HOME", self.path().join("home"))
            .env("NO_COLOR", "1")
            .env_remove("ADVENT_INPUTS")
            .env_remove("ADVENT_QUIET")
            .env_remove("RUST_LOG");
        command
    }

    /// Executes the advent binary with the given arguments in the harness directory.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .output()
            .expect("Failed to run advent")
    }

    /// Like [`run`](Self::run) with extra environment variables.
    #[allow(dead_code)]
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> Output {
        let mut command = self.command();
        for (key, value) in env {
            command.env(key, value);
        }
        command.args(args).output().expect("Failed to run advent")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
