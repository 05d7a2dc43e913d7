//! Match policy applied to the recognized text.

use std::fmt;

/// Query sentinel: the image is expected to contain no text.
pub const EXPECT_EMPTY: &str = "vuoto";

/// Query sentinel: the image is expected to contain any text at all.
pub const EXPECT_ANY: &str = "non-vuoto";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchPolicy {
    ExpectEmpty,
    ExpectAny,
    Contains(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Failure,
}

impl MatchPolicy {
    pub fn from_query(query: &str) -> Self {
        match query {
            EXPECT_EMPTY => Self::ExpectEmpty,
            EXPECT_ANY => Self::ExpectAny,
            _ => Self::Contains(query.to_string()),
        }
    }

    /// Evaluate against the recognized text. Whitespace around the
    /// text never counts; containment is case-insensitive.
    pub fn evaluate(&self, recognized: &str) -> Verdict {
        let trimmed = recognized.trim();
        let matched = match self {
            Self::ExpectEmpty => trimmed.is_empty(),
            Self::ExpectAny => !trimmed.is_empty(),
            Self::Contains(needle) => trimmed.to_lowercase().contains(&needle.to_lowercase()),
        };
        if matched { Verdict::Success } else { Verdict::Failure }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectEmpty => write!(f, "expect empty output"),
            Self::ExpectAny => write!(f, "expect non-empty output"),
            Self::Contains(needle) => write!(f, "contains '{needle}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sentinel_matches_whitespace_only_output() {
        let policy = MatchPolicy::from_query("vuoto");
        assert_eq!(policy, MatchPolicy::ExpectEmpty);
        assert_eq!(policy.evaluate("  \n\t "), Verdict::Success);
        assert_eq!(policy.evaluate(""), Verdict::Success);
        assert_eq!(policy.evaluate("some text"), Verdict::Failure);
    }

    #[test]
    fn any_sentinel_requires_output() {
        let policy = MatchPolicy::from_query("non-vuoto");
        assert_eq!(policy, MatchPolicy::ExpectAny);
        assert_eq!(policy.evaluate("anything"), Verdict::Success);
        assert_eq!(policy.evaluate("  \n "), Verdict::Failure);
    }

    #[test]
    fn containment_is_case_insensitive() {
        let policy = MatchPolicy::from_query("Ciao");
        assert_eq!(policy.evaluate("ciao mondo"), Verdict::Success);
        assert_eq!(policy.evaluate("CIAO MONDO\n"), Verdict::Success);
        assert_eq!(policy.evaluate("arrivederci"), Verdict::Failure);
    }

    #[test]
    fn literal_sentinel_text_is_not_contained() {
        // 'vuoto' as a query is always the sentinel, never a literal.
        let policy = MatchPolicy::from_query("vuoto");
        assert_eq!(policy.evaluate("vuoto"), Verdict::Failure);
    }

    #[test]
    fn non_sentinel_query_is_literal() {
        let policy = MatchPolicy::from_query("Vuoto totale");
        assert_eq!(policy, MatchPolicy::Contains("Vuoto totale".to_string()));
        assert_eq!(policy.evaluate("VUOTO TOTALE"), Verdict::Success);
    }
}
