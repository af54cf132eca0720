use crate::debug_filter::{trace_rule_matched, trace_rule_skipped};
use crate::{Candidate, Filter, FilterType};

/// Ordered rules of one direction (all exclusions or all inclusions).
///
/// Rules are partitioned by axis. Evaluation tests every path rule before any
/// name rule; within each list rules are tried in insertion order and the
/// first match wins. Duplicates are kept.
#[derive(Clone, Debug, Default)]
pub struct FilterClass {
    paths: Vec<Filter>,
    names: Vec<Filter>,
}

impl FilterClass {
    /// Creates an empty class.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            paths: Vec::new(),
            names: Vec::new(),
        }
    }

    /// Appends `filter` to the list selected by its axis.
    pub fn add(&mut self, filter: Filter) {
        match filter.kind() {
            FilterType::Name => self.names.push(filter),
            FilterType::Path => self.paths.push(filter),
        }
    }

    /// Drops every rule.
    pub fn clear(&mut self) {
        self.names.clear();
        self.paths.clear();
    }

    /// Returns `true` if the class holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.paths.is_empty()
    }

    /// Returns the total number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len() + self.paths.len()
    }

    /// Returns the path rules in insertion order.
    #[must_use]
    pub fn path_rules(&self) -> &[Filter] {
        &self.paths
    }

    /// Returns the name rules in insertion order.
    #[must_use]
    pub fn name_rules(&self) -> &[Filter] {
        &self.names
    }

    /// Iterates over every rule in evaluation order (path rules first).
    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.paths.iter().chain(self.names.iter())
    }

    /// Returns `true` if any applicable rule matches `candidate`.
    ///
    /// When `only_inheritable` is set, rules not marked inheritable are
    /// skipped. This is the mode used when an ancestor directory's rules are
    /// applied to one of its descendants.
    #[must_use]
    pub fn matches(&self, candidate: &Candidate<'_>, only_inheritable: bool) -> bool {
        self.matching_rule(candidate, only_inheritable).is_some()
    }

    /// Returns the first rule that matches `candidate`, honouring the same
    /// evaluation order as [`matches`](Self::matches).
    #[must_use]
    pub fn matching_rule(
        &self,
        candidate: &Candidate<'_>,
        only_inheritable: bool,
    ) -> Option<&Filter> {
        first_match(&self.paths, candidate.path(), only_inheritable)
            .or_else(|| first_match(&self.names, candidate.name(), only_inheritable))
    }
}

fn first_match<'a>(
    rules: &'a [Filter],
    subject: &str,
    only_inheritable: bool,
) -> Option<&'a Filter> {
    rules.iter().find(|rule| {
        if only_inheritable && !rule.inheritable() {
            trace_rule_skipped(rule);
            return false;
        }

        let matched = rule.matches(subject);
        if matched {
            trace_rule_matched(subject, rule);
        }
        matched
    })
}
