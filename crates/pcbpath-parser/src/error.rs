use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("unknown path command '{0}'")]
    UnknownCommand(char),
    #[error("path must start with a moveto, found '{0}'")]
    MissingMoveTo(char),
    #[error("expected a number")]
    ExpectedNumber,
    #[error("arc radius must not be negative")]
    NegativeRadius,
    #[error("expected an arc flag (0 or 1)")]
    ExpectedFlag,
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
}

/// The path text does not match the SVG path grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at offset {position} near \"{context}\"")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Byte offset into the input.
    pub position: usize,
    /// A short slice of the input starting at `position`.
    pub context: String,
}

const CONTEXT_CHARS: usize = 12;

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, input: &str, position: usize) -> Self {
        let context = input
            .get(position..)
            .unwrap_or_default()
            .chars()
            .take(CONTEXT_CHARS)
            .collect();
        Self {
            kind,
            position,
            context,
        }
    }
}
