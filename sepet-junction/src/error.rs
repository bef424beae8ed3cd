use std::fmt;

/// Typed errors for junction parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JunctionError {
    /// A character that belongs to no token appeared in the input.
    UnexpectedToken { found: char, at: usize },
    /// Parentheses did not balance.
    UnbalancedParens,
    /// The input held no tokens at all.
    EmptyExpression,
    /// Tokens appeared in an order the grammar does not allow, e.g. two
    /// adjacent atoms or a dangling operator.
    MalformedExpression { at: usize },
}

impl fmt::Display for JunctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JunctionError::UnexpectedToken { found, at } => {
                write!(f, "unexpected character '{}' at offset {}", found, at)
            }
            JunctionError::UnbalancedParens => {
                write!(f, "unbalanced parentheses")
            }
            JunctionError::EmptyExpression => {
                write!(f, "empty expression")
            }
            JunctionError::MalformedExpression { at } => {
                write!(f, "malformed expression at offset {}", at)
            }
        }
    }
}

impl std::error::Error for JunctionError {}
