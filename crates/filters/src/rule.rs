use std::fmt;

use globset::GlobMatcher;
use regex::Regex;

use crate::PatternError;
use crate::glob::compile_wildcard;

/// Which component of a candidate entry a rule is tested against.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FilterType {
    /// The entry's final path component.
    Name,
    /// The entry's full path relative to the directory defining the rule.
    Path,
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("NAME"),
            Self::Path => f.write_str("PATH"),
        }
    }
}

/// Pattern language used by a rule.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FilterStrategy {
    /// Shell-style wildcards (`*`, `?`) matched byte by byte.
    Glob,
    /// Extended regular expression evaluated as a full-string match.
    Regex,
}

impl fmt::Display for FilterStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Glob => f.write_str("GLOB"),
            Self::Regex => f.write_str("REGEX"),
        }
    }
}

#[derive(Clone, Debug)]
enum Matcher {
    Glob(GlobMatcher),
    Regex(Regex),
}

/// A compiled, immutable rule.
///
/// A filter pairs the pattern text with the axis it applies to, whether it is
/// inherited by descendant directories, and the compiled matcher for its
/// strategy. Filters are created by [`FilterChain`](crate::FilterChain) while
/// parsing rule lines, but can also be built directly through
/// [`glob`](Self::glob) and [`regex`](Self::regex).
///
/// # Examples
///
/// ```
/// use filters::{Filter, FilterStrategy, FilterType};
///
/// let filter = Filter::glob("*.log", true, FilterType::Path)?;
/// assert!(filter.matches("var/app.log"));
/// assert_eq!(filter.strategy(), FilterStrategy::Glob);
/// assert_eq!(filter.to_string(), "PATH/GLOB:*.log");
/// # Ok::<(), filters::PatternError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Filter {
    text: String,
    inheritable: bool,
    kind: FilterType,
    matcher: Matcher,
}

impl Filter {
    /// Builds a wildcard rule.
    ///
    /// Every character other than `*` and `?` matches itself. Wildcards
    /// consume UTF-8 bytes, so `?` matches one byte rather than one character.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Glob`] if the glob compiler rejects the
    /// translated wildcard.
    pub fn glob(
        text: impl Into<String>,
        inheritable: bool,
        kind: FilterType,
    ) -> Result<Self, PatternError> {
        let text = text.into();
        let glob = compile_wildcard(&text).map_err(PatternError::Glob)?;
        Ok(Self {
            text,
            inheritable,
            kind,
            matcher: Matcher::Glob(glob),
        })
    }

    /// Builds a regular expression rule.
    ///
    /// The expression must match the entire candidate; `a` does not match
    /// `cat`.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Regex`] when `text` is not a valid regular
    /// expression.
    pub fn regex(
        text: impl Into<String>,
        inheritable: bool,
        kind: FilterType,
    ) -> Result<Self, PatternError> {
        let text = text.into();
        let regex = compile_anchored(&text).map_err(PatternError::Regex)?;
        Ok(Self {
            text,
            inheritable,
            kind,
            matcher: Matcher::Regex(regex),
        })
    }

    /// Builds a rule using the requested strategy.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the pattern fails to compile.
    pub fn with_strategy(
        text: impl Into<String>,
        inheritable: bool,
        kind: FilterType,
        strategy: FilterStrategy,
    ) -> Result<Self, PatternError> {
        match strategy {
            FilterStrategy::Glob => Self::glob(text, inheritable, kind),
            FilterStrategy::Regex => Self::regex(text, inheritable, kind),
        }
    }

    /// Returns `true` if `candidate` matches this rule's pattern.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        match &self.matcher {
            Matcher::Glob(glob) => glob.is_match(candidate),
            Matcher::Regex(regex) => regex.is_match(candidate),
        }
    }

    /// Returns the pattern text as written in the rule line.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the rule applies to descendant directories.
    #[must_use]
    pub const fn inheritable(&self) -> bool {
        self.inheritable
    }

    /// Returns the axis the rule is tested against.
    #[must_use]
    pub const fn kind(&self) -> FilterType {
        self.kind
    }

    /// Returns the pattern language of the rule.
    #[must_use]
    pub fn strategy(&self) -> FilterStrategy {
        match self.matcher {
            Matcher::Glob(_) => FilterStrategy::Glob,
            Matcher::Regex(_) => FilterStrategy::Regex,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}:{}", self.kind, self.strategy(), self.text)
    }
}

/// Compiles `pattern` so that it only matches whole candidates.
///
/// The bare pattern must compile on its own; `a)|(b` is rejected even though
/// its anchored form would parse. A pattern that ends inside an `(?x)`
/// comment would swallow the closing anchor, so it is retried with a newline
/// ending the comment first. The retry only runs when the first form fails,
/// which means `x` mode is still active at the end and the newline is ignored.
fn compile_anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(pattern)?;
    Regex::new(&format!("^(?:{pattern})$"))
        .or_else(|error| Regex::new(&format!("^(?:{pattern}\n)$")).map_err(|_| error))
}
