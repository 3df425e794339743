//! Test utilities for the targetscreen workspace
//!
//! Common helpers shared by the integration tests of every crate.
//!
//! # Features
//!
//! - **Test Environment**: isolated temp directories with automatic cleanup
//! - **Fixtures**: deterministic sequences, FASTA text and metadata CSV
//! - **Assertions**: invariants every retained screening record must satisfy

pub mod assertions;
pub mod environment;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::{assert_record_invariants, assert_screening_table};
pub use environment::{TestConfig, TestEnvironment};
pub use fixtures::{metadata_csv, random_dna, TestSequence, PERFECT_REPEAT};

// Re-export test dependencies for convenience
pub use anyhow::{Context, Result};
pub use tempfile;

/// Initialize test logging (safe to call from every test)
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Run a test with a clean environment
///
/// # Example
/// ```rust
/// use targetscreen_test::with_test_env;
///
/// with_test_env(|env| {
///     let path = env.create_input_file("meta.csv", "Comparison #,Region,Sequence\n")?;
///     assert!(path.exists());
///     Ok(())
/// })
/// .unwrap();
/// ```
pub fn with_test_env<F, R>(f: F) -> Result<R>
where
    F: FnOnce(&TestEnvironment) -> Result<R>,
{
    let env = TestEnvironment::new()?;
    f(&env)
}
