use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::debug_filter::{trace_load_committed, trace_load_rolled_back, trace_rule_added};
use crate::{
    Candidate, FilterAction, FilterClass, LoadError, ParsedRule, SyntaxError, Verdict,
    parse_rule, read_lines,
};

/// Exclusion and inclusion rules for one synchronized directory.
///
/// A chain owns two independent [`FilterClass`]es. Rules are added one line at
/// a time with [`add`](Self::add) or replaced wholesale with
/// [`load`](Self::load). A load either installs every rule from its source or
/// leaves the chain exactly as it was.
///
/// Queries borrow the chain immutably and reloads borrow it mutably, so a
/// chain shared between a scanning thread and a reloading thread must sit
/// behind a lock such as [`std::sync::RwLock`].
///
/// # Examples
///
/// ```
/// use filters::{Candidate, FilterChain};
///
/// let mut chain = FilterChain::new();
/// chain.load("# artifacts\n-N:*.tmp\n-p:build/*\n".as_bytes())?;
///
/// assert!(chain.excluded(&Candidate::from_path("notes.tmp"), false));
/// assert!(chain.excluded(&Candidate::from_path("build/app.o"), false));
/// assert!(!chain.excluded(&Candidate::from_path("src/main.rs"), false));
///
/// // `-N` rules stay local to the directory that defines them.
/// assert!(!chain.excluded(&Candidate::from_path("notes.tmp"), true));
/// # Ok::<(), filters::LoadError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct FilterChain {
    exclusions: FilterClass,
    inclusions: FilterClass,
}

impl FilterChain {
    /// Creates a chain with no rules.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exclusions: FilterClass::new(),
            inclusions: FilterClass::new(),
        }
    }

    /// Parses `line` and appends the resulting rule.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError`] if the line is malformed or its pattern does
    /// not compile. The chain is unchanged in that case.
    pub fn add(&mut self, line: &str) -> Result<(), SyntaxError> {
        let rule = parse_rule(line)?;
        self.insert(rule);
        Ok(())
    }

    /// Appends an already parsed rule.
    pub fn insert(&mut self, rule: ParsedRule) {
        let (action, filter) = rule.into_parts();
        trace_rule_added(action, &filter);
        match action {
            FilterAction::Exclude => self.exclusions.add(filter),
            FilterAction::Include => self.inclusions.add(filter),
        }
    }

    /// Removes every exclusion and inclusion rule.
    pub fn clear(&mut self) {
        self.exclusions.clear();
        self.inclusions.clear();
    }

    /// Returns `true` if neither rule set holds any rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exclusions.is_empty() && self.inclusions.is_empty()
    }

    /// Returns the combined number of exclusion and inclusion rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exclusions.len() + self.inclusions.len()
    }

    /// Returns the exclusion rules.
    #[must_use]
    pub const fn exclusions(&self) -> &FilterClass {
        &self.exclusions
    }

    /// Returns the inclusion rules.
    #[must_use]
    pub const fn inclusions(&self) -> &FilterClass {
        &self.inclusions
    }

    /// Returns `true` if an applicable exclusion rule matches `candidate`.
    #[must_use]
    pub fn excluded(&self, candidate: &Candidate<'_>, only_inheritable: bool) -> bool {
        self.exclusions.matches(candidate, only_inheritable)
    }

    /// Returns `true` if an applicable inclusion rule matches `candidate`.
    #[must_use]
    pub fn included(&self, candidate: &Candidate<'_>, only_inheritable: bool) -> bool {
        self.inclusions.matches(candidate, only_inheritable)
    }

    /// Evaluates both rule sets and reports the rules that matched.
    #[must_use]
    pub fn explain(&self, candidate: &Candidate<'_>, only_inheritable: bool) -> Verdict<'_> {
        Verdict::new(
            self.exclusions.matching_rule(candidate, only_inheritable),
            self.inclusions.matching_rule(candidate, only_inheritable),
        )
    }

    /// Replaces the rule set with the rules read from `reader`.
    ///
    /// Blank lines are ignored and lines starting with `#` are comments.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the source cannot be read and
    /// [`LoadError::Syntax`] for the first rejected line. On error the chain
    /// keeps the rules it had before the call.
    pub fn load<R: Read>(&mut self, reader: R) -> Result<(), LoadError> {
        let lines = read_lines(reader).inspect_err(|error| trace_load_rolled_back(error))?;
        self.load_lines(lines)?;
        Ok(())
    }

    /// Replaces the rule set with the rules in the file at `path`.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_file(&mut self, path: &Path) -> Result<(), LoadError> {
        let file = File::open(path).inspect_err(|error| trace_load_rolled_back(error))?;
        self.load(file)
    }

    /// Replaces the rule set with `lines`, all or nothing.
    ///
    /// Lines starting with `#` are skipped. Blank lines are not filtered
    /// here and are rejected like any other malformed rule.
    ///
    /// # Errors
    ///
    /// Returns the [`SyntaxError`] for the first rejected line; the chain is
    /// left untouched.
    pub fn load_lines<I, S>(&mut self, lines: I) -> Result<(), SyntaxError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut staged = Self::new();

        for line in lines {
            let line = line.as_ref();
            if line.starts_with('#') {
                continue;
            }
            staged
                .add(line)
                .inspect_err(|error| trace_load_rolled_back(error))?;
        }

        trace_load_committed(staged.exclusions.len(), staged.inclusions.len());
        *self = staged;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FilterStrategy, FilterType, SyntaxErrorKind};

    fn chain(lines: &[&str]) -> FilterChain {
        let mut chain = FilterChain::new();
        for line in lines {
            chain.add(line).expect("rule parses");
        }
        chain
    }

    #[test]
    fn new_chain_is_empty() {
        let chain = FilterChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
    }

    #[test]
    fn add_routes_by_sign() {
        let chain = chain(&["-:a", "+:b", "-p:c"]);
        assert_eq!(chain.exclusions().len(), 2);
        assert_eq!(chain.inclusions().len(), 1);
    }

    #[test]
    fn failed_add_leaves_chain_untouched() {
        let mut chain = chain(&["-:keep"]);
        for line in ["", "x:foo", "-:", "- :", "-r:("] {
            assert!(chain.add(line).is_err(), "{line:?}");
        }
        assert_eq!(chain.len(), 1);
        assert!(chain.excluded(&Candidate::from_path("keep"), false));
    }

    #[test]
    fn insert_accepts_pre_parsed_rules() {
        let mut chain = FilterChain::new();
        chain.insert(parse_rule("+nr:^keep_.*$").expect("parses"));

        let rule = &chain.inclusions().name_rules()[0];
        assert_eq!(rule.strategy(), FilterStrategy::Regex);
        assert!(chain.included(&Candidate::from_path("keep_me"), true));
    }

    #[test]
    fn load_replaces_previous_rules() {
        let mut chain = chain(&["-:old"]);
        chain.load("-:new\n".as_bytes()).expect("loads");

        assert!(!chain.excluded(&Candidate::from_path("old"), false));
        assert!(chain.excluded(&Candidate::from_path("new"), false));
    }

    #[test]
    fn load_skips_comments_and_blank_lines() {
        let mut chain = FilterChain::new();
        chain
            .load("# heading\n\n-N:*.tmp\n   \n#-:ignored\n".as_bytes())
            .expect("loads");

        assert_eq!(chain.len(), 1);
        assert!(!chain.excluded(&Candidate::from_path("ignored"), false));
    }

    #[test]
    fn indented_comment_is_not_a_comment() {
        let mut chain = chain(&["-:keep"]);
        let error = chain.load("  # note\n".as_bytes()).unwrap_err();

        assert!(matches!(
            error.syntax_error().map(SyntaxError::kind),
            Some(SyntaxErrorKind::InvalidAction)
        ));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn failed_load_restores_previous_rules() {
        let mut chain = chain(&["-N:secret", "+p:docs/*"]);
        let error = chain
            .load("-:new\n+:fresh\nbogus\n-:later\n".as_bytes())
            .unwrap_err();

        assert_eq!(error.syntax_error().map(SyntaxError::line), Some("bogus"));
        assert_eq!(chain.len(), 2);
        assert!(chain.excluded(&Candidate::from_path("secret"), false));
        assert!(chain.included(&Candidate::from_path("docs/a"), true));
        assert!(!chain.excluded(&Candidate::from_path("new"), false));
        assert!(!chain.included(&Candidate::from_path("fresh"), false));
    }

    #[test]
    fn load_of_empty_source_clears_rules() {
        let mut chain = chain(&["-:a", "+:b"]);
        chain.load("\n\n# only comments\n".as_bytes()).expect("loads");
        assert!(chain.is_empty());
    }

    #[test]
    fn load_lines_does_not_filter_blank_lines() {
        let mut chain = chain(&["-:keep"]);
        assert!(chain.load_lines(["-:a", ""]).is_err());
        assert_eq!(chain.len(), 1);

        chain.load_lines(vec![String::from("-:a"), String::from("#x")]).expect("loads");
        assert_eq!(chain.len(), 1);
        assert!(chain.excluded(&Candidate::from_path("a"), false));
    }

    #[test]
    fn load_reports_io_errors() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk on fire"))
            }
        }

        let mut chain = chain(&["-:keep"]);
        let error = chain.load(Broken).unwrap_err();

        assert!(matches!(error, LoadError::Io(_)));
        assert!(chain.excluded(&Candidate::from_path("keep"), false));
    }

    #[test]
    fn load_file_reads_rules_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(".syncfilter");
        std::fs::write(&path, "-p:build/*\n").expect("write");

        let mut chain = FilterChain::new();
        chain.load_file(&path).expect("loads");
        assert!(chain.excluded(&Candidate::from_path("build/x"), false));

        let error = chain.load_file(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(error, LoadError::Io(_)));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn explain_reports_both_directions() {
        let chain = chain(&["-N:x", "+N:x"]);
        let verdict = chain.explain(&Candidate::from_path("x"), false);

        assert_eq!(verdict.status(), "both");
        assert_eq!(
            verdict.exclusion().map(|rule| rule.kind()),
            Some(FilterType::Name)
        );
        assert_eq!(chain.explain(&Candidate::from_path("x"), true).status(), "-");
    }

    #[test]
    fn clear_is_idempotent() {
        let mut chain = chain(&["-:a", "+p:b"]);
        chain.clear();
        chain.clear();

        assert!(chain.is_empty());
        assert!(!chain.excluded(&Candidate::from_path("a"), false));
        assert!(!chain.included(&Candidate::from_path("b"), false));
    }

    #[test]
    fn chain_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FilterChain>();
    }
}
