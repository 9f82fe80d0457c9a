/// Represents a failure to recognize a character in the input text.
///
/// This is the only way the lexer can fail. The error carries the offending
/// character and its byte offset into the scanned text, and surfaces
/// unchanged through any parse that pulls tokens lazily.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    /// The character no token pattern matched.
    pub character: char,
    /// Byte offset of the character in the input.
    pub offset:    usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Unrecognized character '{}' at offset {}.",
               self.character, self.offset)
    }
}

impl std::error::Error for LexError {}
