//! Common test utilities for bundlemap integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch working directory for running the binary
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// bundlemap command running inside `workspace`, isolated from the caller's environment
#[allow(deprecated)]
pub fn bundlemap_cmd(workspace: &TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("bundlemap").expect("Failed to find bundlemap binary");
    cmd.current_dir(&workspace.path)
        .env_remove("BUNDLEMAP_REGISTRY")
        .env_remove("BUNDLEMAP_LOG");
    cmd
}
