//! Test utilities and helpers
//!
//! Shared by integration tests so that tracing is initialised exactly once.

use std::sync::Once;

/// Global test initialization
static TEST_INIT: Once = Once::new();

/// Initialize test environment once for all tests.
///
/// Honours `RUST_LOG` when set, otherwise only errors are printed.
pub fn init_test_env() {
    TEST_INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error"));

        // Another harness may already have installed a subscriber
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_env_is_safe_to_call_multiple_times() {
        init_test_env();
        init_test_env();
        init_test_env();
    }
}
