//! DEBUG_FILTER tracing for rule parsing, reloads, and evaluation.
//!
//! Every function in this module is purely observational: it never changes
//! the outcome of an operation. Events are emitted through [`tracing`] when
//! the `tracing` feature is enabled and compile to inline no-ops otherwise.
//!
//! # Examples
//!
//! ```rust,ignore
//! use filters::debug_filter::{FilterTracer, trace_rule_matched};
//!
//! let mut tracer = FilterTracer::new();
//!
//! trace_rule_matched("a.tmp", &rule);
//! tracer.record_evaluation(true, false);
//!
//! tracer.summary();
//! ```

use crate::{Filter, FilterAction};

/// Target name for tracing events.
#[cfg(feature = "tracing")]
const FILTER_TARGET: &str = "syncfilter::filter";

// ============================================================================
// Tracing functions (feature-gated)
// ============================================================================

/// Traces a rule being added to the exclusion or inclusion set.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_rule_added(action: FilterAction, rule: &Filter) {
    tracing::debug!(
        target: FILTER_TARGET,
        action = %action,
        rule = %rule,
        inheritable = rule.inheritable(),
        "filter_rule_added"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_rule_added(_action: FilterAction, _rule: &Filter) {}

/// Traces a rule line rejected by the parser.
///
/// # Arguments
///
/// * `line` - The rejected rule line
/// * `reason` - Human-readable cause (bad sign, missing `:`, bad pattern...)
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_syntax_error(line: &str, reason: &dyn std::fmt::Display) {
    tracing::debug!(
        target: FILTER_TARGET,
        line = %line,
        reason = %reason,
        "filter_syntax_error"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_syntax_error(_line: &str, _reason: &dyn std::fmt::Display) {}

/// Traces a non-inheritable rule skipped while evaluating an ancestor's
/// rules against a descendant.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_rule_skipped(rule: &Filter) {
    tracing::trace!(
        target: FILTER_TARGET,
        rule = %rule,
        "filter_rule_skipped_uninheritable"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_rule_skipped(_rule: &Filter) {}

/// Traces the rule that matched a candidate string.
///
/// # Arguments
///
/// * `candidate` - The name or path the rule was tested against
/// * `rule` - The first rule that matched
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_rule_matched(candidate: &str, rule: &Filter) {
    tracing::debug!(
        target: FILTER_TARGET,
        candidate = %candidate,
        rule = %rule,
        "filter_rule_matched"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_rule_matched(_candidate: &str, _rule: &Filter) {}

/// Traces a reload that replaced the live rule set.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_load_committed(exclusions: usize, inclusions: usize) {
    tracing::debug!(
        target: FILTER_TARGET,
        exclusions = exclusions,
        inclusions = inclusions,
        "filter_load_committed"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_load_committed(_exclusions: usize, _inclusions: usize) {}

/// Traces a reload abandoned because of an unreadable source or a rejected
/// line. The previous rule set stays live.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_load_rolled_back(reason: &dyn std::fmt::Display) {
    tracing::warn!(
        target: FILTER_TARGET,
        reason = %reason,
        "filter_load_rolled_back"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_load_rolled_back(_reason: &dyn std::fmt::Display) {}

/// Traces summary statistics for a classification session.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_filter_summary(
    total_evaluated: usize,
    total_excluded: usize,
    total_included: usize,
) {
    tracing::info!(
        target: FILTER_TARGET,
        total_evaluated = total_evaluated,
        total_excluded = total_excluded,
        total_included = total_included,
        "filter_summary"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_filter_summary(
    _total_evaluated: usize,
    _total_excluded: usize,
    _total_included: usize,
) {
}

// ============================================================================
// FilterTracer - stateful tracer for aggregating classification statistics
// ============================================================================

/// Aggregates statistics across many classifications.
///
/// Exclusion and inclusion are tracked separately because the chain answers
/// both questions independently; one entry may count towards both.
///
/// # Examples
///
/// ```
/// # use filters::debug_filter::FilterTracer;
/// let mut tracer = FilterTracer::new();
///
/// tracer.record_evaluation(true, false);
/// tracer.record_evaluation(false, true);
/// tracer.record_evaluation(false, false);
///
/// tracer.summary();
/// assert_eq!(tracer.total_evaluated(), 3);
/// assert_eq!(tracer.total_excluded(), 1);
/// assert_eq!(tracer.total_included(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterTracer {
    total_evaluated: usize,
    total_excluded: usize,
    total_included: usize,
}

impl FilterTracer {
    /// Creates a new tracer with zero counts.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_evaluated: 0,
            total_excluded: 0,
            total_included: 0,
        }
    }

    /// Records the outcome of classifying one entry.
    pub fn record_evaluation(&mut self, excluded: bool, included: bool) {
        self.total_evaluated += 1;
        if excluded {
            self.total_excluded += 1;
        }
        if included {
            self.total_included += 1;
        }
    }

    /// Emits a summary trace event with the accumulated statistics.
    pub fn summary(&self) {
        trace_filter_summary(
            self.total_evaluated,
            self.total_excluded,
            self.total_included,
        );
    }

    /// Resets all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the number of entries classified.
    #[must_use]
    pub const fn total_evaluated(&self) -> usize {
        self.total_evaluated
    }

    /// Returns the number of entries matched by an exclusion rule.
    #[must_use]
    pub const fn total_excluded(&self) -> usize {
        self.total_excluded
    }

    /// Returns the number of entries matched by an inclusion rule.
    #[must_use]
    pub const fn total_included(&self) -> usize {
        self.total_included
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilterType;

    fn rule() -> Filter {
        Filter::glob("*.tmp", false, FilterType::Name).expect("glob")
    }

    #[test]
    fn tracer_starts_empty() {
        let tracer = FilterTracer::new();
        assert_eq!(tracer.total_evaluated(), 0);
        assert_eq!(tracer.total_excluded(), 0);
        assert_eq!(tracer.total_included(), 0);
    }

    #[test]
    fn tracer_counts_both_directions_independently() {
        let mut tracer = FilterTracer::new();
        tracer.record_evaluation(true, true);
        tracer.record_evaluation(true, false);
        tracer.record_evaluation(false, false);

        assert_eq!(tracer.total_evaluated(), 3);
        assert_eq!(tracer.total_excluded(), 2);
        assert_eq!(tracer.total_included(), 1);
    }

    #[test]
    fn reset_clears_counts() {
        let mut tracer = FilterTracer::new();
        tracer.record_evaluation(true, true);
        tracer.reset();

        assert_eq!(tracer.total_evaluated(), 0);
        assert_eq!(tracer.total_excluded(), 0);
        assert_eq!(tracer.total_included(), 0);
    }

    #[test]
    fn trace_functions_do_not_panic() {
        let rule = rule();

        trace_rule_added(FilterAction::Exclude, &rule);
        trace_rule_added(FilterAction::Include, &rule);
        trace_syntax_error("x:foo", &"rule must start with '-' or '+'");
        trace_rule_skipped(&rule);
        trace_rule_matched("a.tmp", &rule);
        trace_load_committed(3, 1);
        trace_load_rolled_back(&"syntax error");
        trace_filter_summary(10, 4, 2);
        trace_filter_summary(0, 0, 0);
    }
}
