//! Line source for rule files.
//!
//! Splits a byte stream into the non-blank lines handed to
//! [`FilterChain::load`](crate::FilterChain::load). Both `\n` and `\r` end a
//! line, so LF, CRLF, and bare CR files read the same. Lines are returned
//! exactly as written; only lines made up entirely of ASCII whitespace are
//! dropped.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::parse::is_blank;

/// Reads every non-blank line from `reader`.
///
/// # Errors
///
/// Propagates read errors from `reader`, and reports
/// [`io::ErrorKind::InvalidData`] if the stream is not valid UTF-8.
///
/// # Examples
///
/// ```
/// let lines = filters::read_lines("-N:*.tmp\r\n\r\n  \n# note\n".as_bytes())?;
/// assert_eq!(lines, ["-N:*.tmp", "# note"]);
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn read_lines<R: Read>(mut reader: R) -> io::Result<Vec<String>> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(split_lines(&contents))
}

/// Opens `path` and reads its non-blank lines.
///
/// # Errors
///
/// Returns the error from opening or reading the file.
pub fn read_lines_from_path(path: &Path) -> io::Result<Vec<String>> {
    read_lines(File::open(path)?)
}

fn split_lines(contents: &str) -> Vec<String> {
    contents
        .split(['\n', '\r'])
        .filter(|line| !is_blank(line))
        .map(str::to_owned)
        .collect()
}
