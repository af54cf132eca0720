#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` turns the `-v` count given to a syncfilter binary into a
//! [`tracing_subscriber::EnvFilter`] and installs a formatting subscriber that
//! writes diagnostics to standard error.
//!
//! # Design
//!
//! - [`VerbosityConfig`] maps a verbose level to a filter directive.
//! - [`init_tracing`] installs the global subscriber. A `RUST_LOG` value that
//!   parses takes precedence over the verbose level.
//! - [`env_filter`] builds the filter without touching global state.
//!
//! # Examples
//!
//! ```
//! use logging::VerbosityConfig;
//!
//! let config = VerbosityConfig::from_verbose_level(2);
//! assert_eq!(config.directive(), "debug");
//! ```

mod config;
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use tracing_bridge::{env_filter, init_tracing};
