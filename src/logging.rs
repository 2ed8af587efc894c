// SPDX-License-Identifier: MPL-2.0
//! Logging setup.
//!
//! Log output goes to stderr through `tracing-subscriber`. The filter comes
//! from `SPOTS_LOG`, then `RUST_LOG`, then [`DEFAULT_FILTER`]:
//!
//! ```text
//! SPOTS_LOG=spots=debug spots
//! ```

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const ENV_LOG: &str = "SPOTS_LOG";

/// Filter used when neither environment variable is set or valid.
pub const DEFAULT_FILTER: &str = "spots=info";

/// Builds the filter from the environment.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn init_twice_does_not_panic() {
        init();
        init();
    }
}
