// crates/test-utils/src/lib.rs

//! Shared fixtures for scalegroup integration tests: input and observed-state
//! builders, a recording provider, and tracing setup.

pub mod builders;
pub mod fake_provider;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use scalegroup::logging::LOG_ENV;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Upper bound for any single reconciler call in tests.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Install a test-captured subscriber once per test binary.
///
/// Honors the same `SCALEGROUP_LOG` filter as the binary, defaulting to
/// `scalegroup=debug` so failing tests show reconciler decisions.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new("scalegroup=debug"));

        // Another harness may already own the global subscriber.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Await `fut`, panicking if it takes longer than [`TEST_TIMEOUT`].
pub async fn with_timeout<F: Future>(fut: F) -> F::Output {
    match tokio::time::timeout(TEST_TIMEOUT, fut).await {
        Ok(output) => output,
        Err(_) => panic!("test future did not finish within {TEST_TIMEOUT:?}"),
    }
}
