//! Sequence patterns for command bindings.
//!
//! Only two shapes of pattern exist, so a full regex engine is overkill:
//! a pattern either has to equal the whole pending sequence, or merely
//! terminate it.

/// Matching rule for one binding, applied to the space-joined pending
/// sequence after every appended token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// The pending sequence must equal this string exactly.
    Exact(&'static str),
    /// The pending sequence must end with this string. Used for the abort
    /// bindings, which fire no matter what prefix is already pending.
    Suffix(&'static str),
}

impl Pattern {
    pub fn matches(self, sequence: &str) -> bool {
        match self {
            Pattern::Exact(p) => sequence == p,
            Pattern::Suffix(p) => sequence.ends_with(p),
        }
    }
}
