use std::io;

use thiserror::Error;

/// Error produced when a rule's pattern cannot be compiled into a matcher.
#[derive(Clone, Debug, Error)]
pub enum PatternError {
    /// The pattern is not a valid extended regular expression.
    #[error("invalid regular expression: {0}")]
    Regex(#[source] regex::Error),
    /// The translated wildcard was rejected by the glob compiler.
    #[error("invalid wildcard: {0}")]
    Glob(#[source] globset::Error),
}

/// Classification describing why a rule line was rejected.
#[derive(Clone, Debug, Error)]
pub enum SyntaxErrorKind {
    /// The line does not start with `-` or `+`.
    #[error("rule must start with '-' or '+'")]
    InvalidAction,
    /// The optional axis and strategy tokens are not followed by `:`.
    #[error("expected ':' before the pattern")]
    MissingSeparator,
    /// Nothing but whitespace follows the `:` separator.
    #[error("pattern is empty")]
    EmptyPattern,
    /// The pattern failed to compile.
    #[error(transparent)]
    InvalidPattern(#[from] PatternError),
}

/// Error returned when a rule line cannot be parsed.
///
/// Grammar violations and pattern compilation failures share this type so
/// callers see a single failure signal; [`kind`](Self::kind) carries the
/// specific cause for diagnostics.
#[derive(Clone, Debug, Error)]
#[error("syntax error parsing '{line}': {kind}")]
pub struct SyntaxError {
    line: String,
    #[source]
    kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub(crate) fn new(line: &str, kind: impl Into<SyntaxErrorKind>) -> Self {
        Self {
            line: line.to_owned(),
            kind: kind.into(),
        }
    }

    /// Returns the rejected rule line.
    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Returns the reason the line was rejected.
    #[must_use]
    pub const fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }
}

/// Error returned by [`FilterChain::load`](crate::FilterChain::load) and its
/// variants. The chain is left unchanged whenever this is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The line source could not be read.
    #[error("failed to read filter rules: {0}")]
    Io(#[from] io::Error),
    /// One of the rule lines was rejected.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl LoadError {
    /// Returns the syntax error when the load failed on a rule line.
    #[must_use]
    pub const fn syntax_error(&self) -> Option<&SyntaxError> {
        match self {
            Self::Syntax(error) => Some(error),
            Self::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn syntax_error_preserves_line_and_kind() {
        let error = SyntaxError::new("x:foo", SyntaxErrorKind::InvalidAction);

        assert_eq!(error.line(), "x:foo");
        assert!(matches!(error.kind(), SyntaxErrorKind::InvalidAction));
        assert!(error.to_string().contains("x:foo"));
        assert!(error.to_string().contains("'-' or '+'"));
    }

    #[test]
    fn pattern_error_is_reachable_through_source_chain() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let error = SyntaxError::new("-r:(", PatternError::Regex(regex_err.clone()));

        let kind = error.source().expect("kind is the source");
        assert!(kind.to_string().contains("invalid regular expression"));
        assert_eq!(
            kind.source().expect("regex error").to_string(),
            regex_err.to_string()
        );
    }

    #[test]
    fn load_error_exposes_syntax_error() {
        let error = LoadError::from(SyntaxError::new("-", SyntaxErrorKind::MissingSeparator));
        assert_eq!(error.syntax_error().map(SyntaxError::line), Some("-"));

        let io = LoadError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(io.syntax_error().is_none());
        assert!(io.to_string().starts_with("failed to read filter rules"));
    }
}
