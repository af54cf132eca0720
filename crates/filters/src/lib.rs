#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` decides, for each entry a synchronization client discovers while
//! scanning a directory tree, whether the entry is matched by the directory's
//! exclusion rules and whether it is matched by its inclusion rules. Rules are
//! read from a line-oriented rule file and can target either an entry's bare
//! name or its full relative path, using shell wildcards or extended regular
//! expressions.
//!
//! # Design
//!
//! - [`Filter`] is one compiled rule: pattern text, axis ([`FilterType`]),
//!   inheritance flag, and a matcher for its [`FilterStrategy`].
//! - [`FilterClass`] holds the rules of one direction, path rules ahead of
//!   name rules, and answers "does any applicable rule match?".
//! - [`FilterChain`] owns an exclusion class and an inclusion class, parses
//!   rule lines with [`parse_rule`], and reloads whole rule files atomically.
//! - [`read_lines`] is the line source used by [`FilterChain::load`].
//!
//! # Rule syntax
//!
//! ```text
//! # comment
//! -N:*.tmp          exclude names matching *.tmp in this directory only
//! -p:build/*        exclude paths under build/, inherited by subdirectories
//! +nr:^keep_.*$     include names matching the regex, inherited
//! ```
//!
//! See [`parse_rule`] for the full grammar.
//!
//! # Invariants
//!
//! - Path rules are evaluated before name rules; the first match wins.
//! - Exclusions and inclusions are evaluated independently. The chain never
//!   resolves a conflict between them.
//! - Regular expressions must match the whole candidate.
//! - A failed [`FilterChain::load`] leaves the previous rules in place.
//!
//! # Errors
//!
//! [`SyntaxError`] covers every way a rule line can be rejected, including
//! regular expressions that fail to compile. [`LoadError`] adds I/O failures
//! from the line source.
//!
//! # Examples
//!
//! ```
//! use filters::{Candidate, FilterChain};
//!
//! let mut chain = FilterChain::new();
//! chain.add("-N:*.tmp")?;
//! chain.add("-p:build/out")?;
//! chain.add("+nr:^keep_.*$")?;
//!
//! let entry = Candidate::new("out", "build/out");
//! assert!(chain.excluded(&entry, false));
//! assert!(!chain.excluded(&Candidate::new("out", "elsewhere/out"), false));
//! assert!(chain.included(&Candidate::from_path("keep_me"), true));
//! # Ok::<(), filters::SyntaxError>(())
//! ```
//!
//! # See also
//!
//! - [`debug_filter`] for the diagnostic events emitted with the `tracing`
//!   feature.
//! - [`globset`] and [`regex`] for the matching primitives used internally.

mod action;
mod candidate;
mod chain;
mod class;
pub mod debug_filter;
mod decision;
mod error;
mod glob;
mod lines;
mod parse;
mod rule;

pub use action::FilterAction;
pub use candidate::Candidate;
pub use chain::FilterChain;
pub use class::FilterClass;
pub use decision::Verdict;
pub use error::{LoadError, PatternError, SyntaxError, SyntaxErrorKind};
pub use lines::{read_lines, read_lines_from_path};
pub use parse::{ParsedRule, parse_rule};
pub use rule::{Filter, FilterStrategy, FilterType};
