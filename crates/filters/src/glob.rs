//! Wildcard matching on top of [`globset`].
//!
//! Rule files use plain shell wildcards: `*` matches any run of bytes
//! (including `/`), `?` matches exactly one byte, and every other character
//! matches itself. Matching is on UTF-8 bytes, so a non-ASCII character such
//! as `é` takes one `?` per byte. `globset` understands a richer syntax, so the
//! pattern is rewritten before compilation so that only `*` and `?` keep a
//! special meaning.

use globset::{GlobBuilder, GlobMatcher};

/// Characters that `globset` would otherwise interpret.
const GLOB_METACHARACTERS: &[char] = &['[', ']', '{', '}', ','];

/// Compiles `pattern` into a case-sensitive wildcard matcher.
pub(crate) fn compile_wildcard(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    let glob = GlobBuilder::new(&translate_wildcard(pattern))
        .literal_separator(false)
        .backslash_escape(false)
        .case_insensitive(false)
        .build()?;
    Ok(glob.compile_matcher())
}

/// Rewrites a wildcard pattern into equivalent `globset` syntax.
///
/// Consecutive `*` collapse into one so `globset` never sees a recursive
/// `**` token; metacharacters become single-character classes.
pub(crate) fn translate_wildcard(pattern: &str) -> String {
    let mut glob = String::with_capacity(pattern.len() + 8);
    let mut previous_star = false;

    for ch in pattern.chars() {
        if ch == '*' {
            if !previous_star {
                glob.push('*');
            }
            previous_star = true;
            continue;
        }
        previous_star = false;

        if GLOB_METACHARACTERS.contains(&ch) {
            glob.push('[');
            glob.push(ch);
            glob.push(']');
        } else {
            glob.push(ch);
        }
    }

    glob
}
