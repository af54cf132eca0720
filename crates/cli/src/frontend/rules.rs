use std::io;
use std::path::{Path, PathBuf};

use filters::{FilterChain, SyntaxError, read_lines_from_path};
use thiserror::Error;
use tracing::debug;

/// Failure to assemble the rule chain from the command line.
#[derive(Debug, Error)]
pub(crate) enum RulesError {
    #[error("failed to read rule file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Builds one chain from every rule file, in order, followed by the inline
/// rules. Nothing is installed unless every line is accepted.
pub(crate) fn load_chain(
    files: &[PathBuf],
    inline: &[String],
) -> Result<FilterChain, RulesError> {
    let mut lines = Vec::new();
    for path in files {
        lines.extend(read_rule_file(path)?);
    }
    lines.extend_from_slice(inline);

    let mut chain = FilterChain::new();
    chain.load_lines(&lines)?;
    debug!(
        files = files.len(),
        exclusions = chain.exclusions().len(),
        inclusions = chain.inclusions().len(),
        "rules loaded"
    );
    Ok(chain)
}

fn read_rule_file(path: &Path) -> Result<Vec<String>, RulesError> {
    let lines = read_lines_from_path(path).map_err(|source| RulesError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), lines = lines.len(), "read rule file");
    Ok(lines)
}

/// Strips leading `./` components and trailing separators so command-line
/// paths line up with the relative paths rules are written against.
pub(crate) fn normalize_path(path: &str) -> &str {
    let mut path = path;
    while let Some(rest) = path.strip_prefix("./") {
        path = rest.trim_start_matches('/');
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { path } else { trimmed }
}
