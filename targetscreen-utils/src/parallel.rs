//! Parallel processing utilities

use anyhow::{Context, Result};

/// Worker count for a `--threads` value (0 = all available cores)
pub fn effective_threads(threads: usize) -> usize {
    if threads == 0 {
        num_cpus::get()
    } else {
        threads
    }
}

/// Configure the global rayon pool, returning the thread count in use
pub fn configure_thread_pool(threads: usize) -> Result<usize> {
    let threads = effective_threads(threads);

    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("Failed to configure the global thread pool")?;

    tracing::debug!("Configured rayon pool with {} thread(s)", threads);
    Ok(threads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_effective_threads() {
        assert_eq!(effective_threads(3), 3);
        assert_eq!(effective_threads(0), num_cpus::get());
        assert!(effective_threads(0) > 0);
    }

    #[test]
    #[serial]
    fn test_configure_thread_pool_with_specific_count() {
        // The global pool can only be built once per process
        if let Ok(threads) = configure_thread_pool(2) {
            assert_eq!(threads, 2);
            assert_eq!(rayon::current_num_threads(), 2);
        }
    }

    #[test]
    #[serial]
    fn test_second_configuration_fails() {
        let _ = configure_thread_pool(1);
        assert!(configure_thread_pool(1).is_err());
    }
}
