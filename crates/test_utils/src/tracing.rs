//! Log capture for tests
//!
//! Installs a global `tracing` subscriber once per test binary. The filter
//! comes from `RUST_LOG` and defaults to `warn`.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

/// Initializes test logging; safe to call from every test
pub fn init_test_tracing() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
