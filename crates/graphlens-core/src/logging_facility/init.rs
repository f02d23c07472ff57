//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for CI log collection
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    fn default_directive(&self) -> &'static str {
        match self {
            Profile::Development => "graphlens_core=debug",
            Profile::Production => "graphlens_core=info",
            Profile::Test => "off",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Only the first call installs a subscriber; later calls are no-ops.
/// `RUST_LOG` overrides the profile's default filter.
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
/// - **Test**: Bare registry; use `init_test_capture()` to collect events
///
/// # Example
///
/// ```
/// use graphlens_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()));
        // A subscriber installed elsewhere (e.g. by test capture) wins.
        let _ = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .finish()
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init(),
        };
    });
}
