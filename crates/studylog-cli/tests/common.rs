use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated CLI environment: every fixture gets its own data directory.
pub struct TestFixture {
    data_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            data_dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("studylog").expect("Failed to find studylog binary");
        cmd.arg("--data-dir").arg(self.data_dir.path());
        cmd
    }

    pub fn data_path(&self) -> &std::path::Path {
        self.data_dir.path()
    }

    /// Run a command and parse its stdout as JSON.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run studylog");
        assert!(
            output.status.success(),
            "command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
    }
}
