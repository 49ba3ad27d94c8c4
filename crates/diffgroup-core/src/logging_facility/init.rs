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
    /// JSON structured output for production
    Production,
    /// Bare registry; tests install their own capture layer
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Default filter directive for a profile when `RUST_LOG` is unset
fn default_directive(profile: Profile) -> &'static str {
    match profile {
        Profile::Development => "diffgroup=debug,diffgroup_core=debug,diffgroup_cli=debug",
        Profile::Production | Profile::Test => {
            "diffgroup=info,diffgroup_core=info,diffgroup_cli=info"
        }
    }
}

/// Initialize the logging facility
///
/// This function should be called once at application startup. Logs go to
/// stderr so that stdout stays free for results. `RUST_LOG` overrides the
/// profile's default filter.
///
/// # Example
///
/// ```
/// use diffgroup_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(profile)));
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .init();
            }
            Profile::Test => {
                // Another subscriber may already be installed by a capture layer
                let _ = tracing_subscriber::registry().try_init();
            }
        }
    });
}
