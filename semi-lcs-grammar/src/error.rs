use std::fmt;

/// Errors raised while validating or querying a grammar (§7).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GrammarError {
    /// A rule referenced a child index past the end of the rule table.
    DanglingReference {
        /// The rule that held the dangling reference.
        rule: u32,
        /// The out-of-range child index it referenced.
        reference: u32,
    },
    /// The rule set is not acyclic: following child references from
    /// `final_rule` eventually revisits a rule already on the path.
    Cycle {
        /// A rule index participating in the cycle.
        rule: u32,
    },
    /// `final_rule` does not index any rule in the set.
    UnknownFinalRule {
        /// The offending `final_rule` value.
        final_rule: u32,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::DanglingReference { rule, reference } => {
                write!(f, "rule {rule} references unknown rule {reference}")
            }
            GrammarError::Cycle { rule } => write!(f, "grammar is not acyclic at rule {rule}"),
            GrammarError::UnknownFinalRule { final_rule } => {
                write!(f, "final_rule {final_rule} does not index any rule")
            }
        }
    }
}

impl std::error::Error for GrammarError {}
