//! Subscriber installation for binaries.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(2))?;
//! tracing::debug!(target: "syncfilter::filter", "rule added");
//! ```

use std::env;
use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::VerbosityConfig;

/// Builds the event filter for `config`.
///
/// `rust_log` overrides the verbose level when it holds a valid directive
/// list. An invalid or empty override is ignored.
#[must_use]
pub fn env_filter(config: VerbosityConfig, rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(config.directive()))
}

/// Installs a global subscriber that writes formatted events to stderr.
///
/// The filter comes from [`env_filter`], reading the override from the
/// `RUST_LOG` environment variable.
///
/// # Errors
///
/// Fails if a global subscriber has already been installed.
pub fn init_tracing(config: VerbosityConfig) -> Result<(), TryInitError> {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(config, rust_log.as_deref());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true),
        )
        .try_init()
}
