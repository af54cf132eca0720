#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `syncfilter` command. It loads one or more rule files
//! plus inline rules into a single [`filters::FilterChain`] and prints, for
//! every path on the command line, whether the chain excludes it, includes
//! it, both, or neither.
//!
//! # Design
//!
//! [`run`] takes the argument list and output handles explicitly so the
//! binary and the tests share one code path. It returns the process status
//! and never panics on bad input; [`exit_code_from`] converts that status
//! into a [`std::process::ExitCode`].
//!
//! # Exit status
//!
//! | Code | Meaning |
//! |---|---|
//! | 0 | success |
//! | 1 | a rule file could not be read, a rule was rejected, or the output could not be written |
//! | 2 | invalid command-line usage |
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(
//!     ["syncfilter", "--rule", "-N:*.tmp", "notes.tmp", "main.rs"],
//!     &mut stdout,
//!     &mut stderr,
//! );
//!
//! assert_eq!(status, 0);
//! assert_eq!(String::from_utf8(stdout).unwrap(), "excluded\tnotes.tmp\n-\tmain.rs\n");
//! ```

mod frontend;

pub use frontend::{exit_code_from, run};
