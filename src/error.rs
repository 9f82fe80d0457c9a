/// Lexing errors.
///
/// Defines the error raised when the lexer meets a character that no token
/// pattern recognizes.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token sequence into
/// a tree: syntax mistakes, unexpected tokens, unbalanced parentheses,
/// trailing input, and lexing failures surfaced through the parser.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the error types that can be raised while folding a tree into a
/// value, such as division by zero.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::{ParseError, SyntaxError};
