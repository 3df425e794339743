//! Test environment management
//!
//! Provides isolated test directories with automatic cleanup using RAII.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Configuration for test environment
#[derive(Debug, Clone, Default)]
pub struct TestConfig {
    /// Custom prefix for test directories
    pub prefix: Option<String>,
}

/// Isolated test environment, removed on drop
pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    /// Create a new test environment with default config
    pub fn new() -> Result<Self> {
        Self::with_config(TestConfig::default())
    }

    pub fn with_config(config: TestConfig) -> Result<Self> {
        let prefix = config.prefix.as_deref().unwrap_or("targetscreen-test");
        let temp_dir =
            TempDir::with_prefix(prefix).context("Failed to create temporary directory")?;

        std::fs::create_dir_all(temp_dir.path().join("inputs"))?;
        std::fs::create_dir_all(temp_dir.path().join("outputs"))?;

        Ok(Self { temp_dir })
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn inputs_dir(&self) -> PathBuf {
        self.root().join("inputs")
    }

    pub fn outputs_dir(&self) -> PathBuf {
        self.root().join("outputs")
    }

    /// Write `contents` to `inputs/<name>` and return the path
    pub fn create_input_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.inputs_dir().join(name);
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Path under `outputs/`; nothing is created
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.outputs_dir().join(name)
    }

    pub fn read_to_string(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = self.root().join(path);
        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))
    }
}
