//! Error types for URI parsing.

use std::fmt;

/// Errors that can occur when parsing a URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
///
/// The grammar accepts almost any string, so the only way to fail is to hit
/// a character no segment can claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Character that no component of the grammar can contain
    UnexpectedChar {
        /// The unexpected character
        char: char,
        /// Byte position in `ParseError::input`
        position: usize,
    },
}

impl ParseErrorKind {
    /// Moves the reported position `offset` bytes to the right.
    pub(crate) fn shifted(self, offset: usize) -> Self {
        match self {
            Self::UnexpectedChar { char, position } => Self::UnexpectedChar {
                char,
                position: position + offset,
            },
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI {:?}: ", self.input)?;
        match &self.kind {
            ParseErrorKind::UnexpectedChar { char, position } => {
                write!(
                    f,
                    "unexpected character {char:?} at position {position}; no URI component may contain it"
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}
