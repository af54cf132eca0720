use std::fmt;

/// Rule set a parsed rule is routed into.
///
/// The leading sign of a rule line selects the action: `-` registers an
/// exclusion and `+` registers an inclusion. The two sets are evaluated
/// independently; the chain never resolves precedence between them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FilterAction {
    /// Exclude matching entries from synchronization (`-`).
    Exclude,
    /// Include matching entries in synchronization (`+`).
    Include,
}

impl FilterAction {
    /// Maps a rule line's leading sign to an action.
    #[must_use]
    pub const fn from_sign(sign: u8) -> Option<Self> {
        match sign {
            b'-' => Some(Self::Exclude),
            b'+' => Some(Self::Include),
            _ => None,
        }
    }

    /// Returns the sign character that introduces rules of this action.
    #[must_use]
    pub const fn sign(self) -> char {
        match self {
            Self::Exclude => '-',
            Self::Include => '+',
        }
    }
}

impl fmt::Display for FilterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exclude => f.write_str("exclusion"),
            Self::Include => f.write_str("inclusion"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FilterAction;

    #[test]
    fn display_variants_matches_expected_tokens() {
        let cases = [
            (FilterAction::Exclude, "exclusion"),
            (FilterAction::Include, "inclusion"),
        ];

        for (action, expected) in cases {
            assert_eq!(action.to_string(), expected);
        }
    }

    #[test]
    fn from_sign_accepts_only_plus_and_minus() {
        assert_eq!(FilterAction::from_sign(b'-'), Some(FilterAction::Exclude));
        assert_eq!(FilterAction::from_sign(b'+'), Some(FilterAction::Include));
        for sign in [b'x', b'#', b' ', b':', b'N'] {
            assert_eq!(FilterAction::from_sign(sign), None, "sign {}", sign as char);
        }
    }

    #[test]
    fn sign_round_trips_through_from_sign() {
        for action in [FilterAction::Exclude, FilterAction::Include] {
            assert_eq!(FilterAction::from_sign(action.sign() as u8), Some(action));
        }
    }
}
