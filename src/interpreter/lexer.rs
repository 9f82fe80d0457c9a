use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the input text.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in an arithmetic expression.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Times,
    /// `/`
    #[token("/")]
    Divide,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// Whitespace between tokens; matched and discarded, never emitted.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Whitespace,
}

/// The kind of a token, with any payload stripped.
///
/// This is the closed set of alternatives the parser probes against: probing
/// asks "is the next token a number?" without caring which number.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// An integer literal.
    Number,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl Token {
    /// Returns the kind of this token.
    ///
    /// ## Example
    /// ```
    /// use treecalc::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Number(7).kind(), TokenKind::Number);
    /// assert_eq!(Token::Plus.kind(), TokenKind::Plus);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Times => TokenKind::Times,
            Self::Divide => TokenKind::Divide,
            Self::LeftParen => TokenKind::LeftParen,
            Self::RightParen => TokenKind::RightParen,
            Self::Whitespace => unreachable!(),
        }
    }
}

impl std::fmt::Display for Token {
    /// Writes the token as it appeared in the input.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Times => write!(f, "*"),
            Self::Divide => write!(f, "/"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Whitespace => write!(f, " "),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "a number"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Times => write!(f, "'*'"),
            Self::Divide => write!(f, "'/'"),
            Self::LeftParen => write!(f, "'('"),
            Self::RightParen => write!(f, "')'"),
        }
    }
}

/// A lazy, single-pass token stream over borrowed input text.
///
/// Yields each recognized token in order, skipping whitespace, until the text
/// is exhausted or an unrecognized character is met. The stream is not
/// restartable; scanning the same text again means calling
/// [`tokenize`](crate::tokenize) again.
pub struct Lexer<'a> {
    inner:  logos::Lexer<'a, Token>,
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a token stream over `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { inner:  Token::lexer(text),
               failed: false, }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    /// An error ends the stream: after yielding a `LexError` the iterator is
    /// exhausted, rather than resuming past the bad character.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.inner.next()? {
            Ok(token) => Some(Ok(token)),
            Err(()) => {
                self.failed = true;
                let offset = self.inner.span().start;
                let character = self.inner.slice().chars().next().unwrap_or('\0');
                Some(Err(LexError { character, offset }))
            },
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digits do not fit in an `i64`, which fails the
/// match and surfaces as a lexing error at that position.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
