//! Rule line grammar.
//!
//! A rule line has the shape `<sign>[axis][strategy]:<pattern>`:
//!
//! | Token | Values |
//! |---|---|
//! | sign | `-` exclusion, `+` inclusion |
//! | axis | `N` name (not inherited), `n` name (inherited), `p` path; anything else is an inherited name rule and is not consumed |
//! | strategy | `g` glob, `r` regex; anything else is glob and is not consumed |
//!
//! A `:` must follow the optional tokens. The pattern is everything after it,
//! kept verbatim, and must contain at least one byte other than ASCII
//! whitespace (space, `\t`, `\n`, `\v`, `\f`, `\r`). Unicode spaces such as
//! U+00A0 count as pattern text.
//! There is no uppercase path token; `-P:x` is a missing-separator error.

use std::str::FromStr;

use crate::debug_filter::trace_syntax_error;
use crate::{Filter, FilterAction, FilterStrategy, FilterType, SyntaxError, SyntaxErrorKind};

/// A rule line parsed and compiled, ready to be stored in a chain.
#[derive(Clone, Debug)]
pub struct ParsedRule {
    action: FilterAction,
    filter: Filter,
}

impl ParsedRule {
    /// Returns whether the rule is an exclusion or an inclusion.
    #[must_use]
    pub const fn action(&self) -> FilterAction {
        self.action
    }

    /// Returns the compiled rule.
    #[must_use]
    pub const fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Splits the rule into its action and compiled filter.
    #[must_use]
    pub fn into_parts(self) -> (FilterAction, Filter) {
        (self.action, self.filter)
    }
}

impl FromStr for ParsedRule {
    type Err = SyntaxError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_rule(line)
    }
}

/// Parses and compiles a single rule line.
///
/// # Errors
///
/// Returns [`SyntaxError`] when the sign is not `-`/`+`, the `:` separator is
/// missing, the pattern is blank, or the pattern fails to compile.
///
/// # Examples
///
/// ```
/// use filters::{FilterAction, FilterStrategy, FilterType, parse_rule};
///
/// let rule = parse_rule("-Nr:^core\\.[0-9]+$")?;
/// assert_eq!(rule.action(), FilterAction::Exclude);
/// assert_eq!(rule.filter().kind(), FilterType::Name);
/// assert_eq!(rule.filter().strategy(), FilterStrategy::Regex);
/// assert!(!rule.filter().inheritable());
/// # Ok::<(), filters::SyntaxError>(())
/// ```
pub fn parse_rule(line: &str) -> Result<ParsedRule, SyntaxError> {
    parse_rule_inner(line).inspect_err(|error| trace_syntax_error(line, error.kind()))
}

fn parse_rule_inner(line: &str) -> Result<ParsedRule, SyntaxError> {
    let bytes = line.as_bytes();
    let mut pos = 0;

    let action = bytes
        .first()
        .copied()
        .and_then(FilterAction::from_sign)
        .ok_or_else(|| SyntaxError::new(line, SyntaxErrorKind::InvalidAction))?;
    pos += 1;

    let (kind, inheritable) = match bytes.get(pos) {
        Some(b'N') => {
            pos += 1;
            (FilterType::Name, false)
        }
        Some(b'n') => {
            pos += 1;
            (FilterType::Name, true)
        }
        Some(b'p') => {
            pos += 1;
            (FilterType::Path, true)
        }
        _ => (FilterType::Name, true),
    };

    let strategy = match bytes.get(pos) {
        Some(b'g') => {
            pos += 1;
            FilterStrategy::Glob
        }
        Some(b'r') => {
            pos += 1;
            FilterStrategy::Regex
        }
        _ => FilterStrategy::Glob,
    };

    if bytes.get(pos) != Some(&b':') {
        return Err(SyntaxError::new(line, SyntaxErrorKind::MissingSeparator));
    }
    pos += 1;

    // Every token consumed so far is ASCII, so `pos` is a char boundary.
    let pattern = &line[pos..];
    if is_blank(pattern) {
        return Err(SyntaxError::new(line, SyntaxErrorKind::EmptyPattern));
    }

    let filter = Filter::with_strategy(pattern, inheritable, kind, strategy)
        .map_err(|error| SyntaxError::new(line, error))?;

    Ok(ParsedRule { action, filter })
}

/// Returns `true` if `text` holds nothing but ASCII whitespace.
///
/// Unlike [`u8::is_ascii_whitespace`] this includes vertical tab.
pub(crate) fn is_blank(text: &str) -> bool {
    text.bytes()
        .all(|byte| matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r'))
}
