use crate::Filter;

/// Outcome of evaluating one entry against both rule sets.
///
/// Produced by [`FilterChain::explain`](crate::FilterChain::explain). The
/// chain answers exclusion and inclusion independently; an entry may be
/// matched by both, and deciding which wins is left to the caller.
#[derive(Clone, Copy, Debug)]
pub struct Verdict<'a> {
    exclusion: Option<&'a Filter>,
    inclusion: Option<&'a Filter>,
}

impl<'a> Verdict<'a> {
    pub(crate) const fn new(
        exclusion: Option<&'a Filter>,
        inclusion: Option<&'a Filter>,
    ) -> Self {
        Self {
            exclusion,
            inclusion,
        }
    }

    /// Returns `true` if an exclusion rule matched.
    #[must_use]
    pub const fn excluded(&self) -> bool {
        self.exclusion.is_some()
    }

    /// Returns `true` if an inclusion rule matched.
    #[must_use]
    pub const fn included(&self) -> bool {
        self.inclusion.is_some()
    }

    /// Returns the first exclusion rule that matched, if any.
    #[must_use]
    pub const fn exclusion(&self) -> Option<&'a Filter> {
        self.exclusion
    }

    /// Returns the first inclusion rule that matched, if any.
    #[must_use]
    pub const fn inclusion(&self) -> Option<&'a Filter> {
        self.inclusion
    }

    /// Short status token: `excluded`, `included`, `both`, or `-`.
    #[must_use]
    pub const fn status(&self) -> &'static str {
        match (self.excluded(), self.included()) {
            (true, true) => "both",
            (true, false) => "excluded",
            (false, true) => "included",
            (false, false) => "-",
        }
    }
}
