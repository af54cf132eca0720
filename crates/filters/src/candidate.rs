/// A directory entry presented to the engine for classification.
///
/// `name` is the entry's final path component and `path` its full path
/// relative to the directory whose rules are being applied. Name rules are
/// tested against the former, path rules against the latter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Candidate<'a> {
    name: &'a str,
    path: &'a str,
}

impl<'a> Candidate<'a> {
    /// Pairs an entry name with its relative path.
    #[must_use]
    pub const fn new(name: &'a str, path: &'a str) -> Self {
        Self { name, path }
    }

    /// Builds a candidate from a `/`-separated relative path, taking the
    /// final component as the name.
    ///
    /// ```
    /// use filters::Candidate;
    ///
    /// let entry = Candidate::from_path("build/out/app.o");
    /// assert_eq!(entry.name(), "app.o");
    /// assert_eq!(entry.path(), "build/out/app.o");
    /// ```
    #[must_use]
    pub fn from_path(path: &'a str) -> Self {
        let name = path.rsplit('/').next().unwrap_or(path);
        Self { name, path }
    }

    /// Returns the entry's final path component.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the entry's relative path.
    #[must_use]
    pub const fn path(&self) -> &'a str {
        self.path
    }
}
