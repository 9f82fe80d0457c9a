use crate::error::LexError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a grammar violation found while parsing.
///
/// Each variant names the construct the parser expected and what it actually
/// found. Parsing is atomic: any of these aborts the whole `parse` call and
/// no partial tree escapes.
pub enum SyntaxError {
    /// Found a token that does not fit the grammar at this position.
    UnexpectedToken {
        /// Description of the expected construct.
        expected: String,
        /// The token encountered.
        found:    String,
    },
    /// Reached the end of input while a construct was still open.
    UnexpectedEndOfInput {
        /// Description of the expected construct.
        expected: String,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        found: String,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "Expected {expected} but found {found}.")
            },

            Self::UnexpectedEndOfInput { expected } => {
                write!(f, "Expected {expected} but reached the end of input.")
            },

            Self::UnexpectedTrailingTokens { found } => {
                write!(f,
                       "Extra tokens after expression. Check your input: {found}")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// The parser pulls tokens lazily, so a lexing failure can show up in the
/// middle of a parse; it is carried here unchanged.
pub enum ParseError {
    /// The lexer met an unrecognized character.
    Lex(LexError),
    /// The token sequence violated the grammar.
    Syntax(SyntaxError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Syntax(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}
