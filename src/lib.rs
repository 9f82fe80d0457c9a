//! # treecalc
//!
//! treecalc is an integer arithmetic expression interpreter written in Rust.
//! It scans an expression into tokens, parses the tokens into a tree by
//! recursive descent, and folds the tree through pluggable visitors: an
//! evaluator producing a signed integer (with floor division), and a printer
//! producing the expression in prefix (Lisp) notation.
//!
//! Data flows strictly one way: text → tokens → tree → result. No state
//! survives a call, so independent parses and evaluations never interfere.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator type that represent
/// the syntactic structure of an expression as a tree. The tree is built by
/// the parser and traversed by visitors.
///
/// # Responsibilities
/// - Defines the two expression shapes: integer literals and binary
///   operations with exclusively owned children.
/// - Encodes precedence and associativity purely in tree shape.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while scanning,
/// parsing, or evaluating an expression. Every error is fatal to the call
/// that raised it: nothing is logged, swallowed, or retried.
///
/// # Responsibilities
/// - Defines error types for each phase (lexer, parser, evaluator).
/// - Carries the detail a caller needs: offending character and offset,
///   expected construct versus found token, and so on.
/// - Implements the standard error traits for each type.
pub mod error;
/// Orchestrates the pipeline from text to result.
///
/// This module ties together the lexer, parser, visitor dispatch, and the two
/// concrete visitors. Each stage consumes only the output of the one before
/// it; nothing is passed back up.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, evaluator, and printer.
/// - Provides the entry points for tokenizing, parsing, evaluating, and
///   rendering expressions.
pub mod interpreter;

pub use crate::interpreter::{
    evaluator::evaluate, lexer::Lexer, parser::parse, printer::render_prefix,
};

/// Returns a lazy token stream over `text`.
///
/// Tokens are produced on demand, left to right, always taking the longest
/// match at the current position; whitespace is discarded. The stream is a
/// single-pass iterator: each item is a token, or the lexing error that ended
/// the scan.
///
/// # Examples
/// ```
/// use treecalc::{interpreter::lexer::Token, tokenize};
///
/// let tokens: Result<Vec<_>, _> = tokenize("3 + 4 * 5").collect();
/// assert_eq!(tokens.unwrap(),
///            vec![Token::Number(3),
///                 Token::Plus,
///                 Token::Number(4),
///                 Token::Times,
///                 Token::Number(5)]);
///
/// // Empty input is an empty stream, not an error.
/// assert_eq!(tokenize("").count(), 0);
///
/// // An unrecognized character ends the stream with an error.
/// let err = tokenize("2 + x").last().unwrap().unwrap_err();
/// assert_eq!(err.character, 'x');
/// assert_eq!(err.offset, 4);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Lexer<'_> {
    Lexer::new(text)
}

/// Returns the result of parsing and evaluating an expression.
///
/// This is the convenience entry point covering the whole pipeline. For
/// access to the tree itself, use [`parse`] with [`evaluate`] or
/// [`render_prefix`].
///
/// # Errors
/// Returns an error if the text fails to scan or parse, or if evaluation
/// divides by zero.
///
/// # Examples
/// ```
/// use treecalc::get_result;
///
/// assert_eq!(get_result("2 + 3 * 4").unwrap(), 14);
///
/// // 'x' is not part of the language.
/// assert!(get_result("2 + x").is_err());
/// ```
pub fn get_result(source: &str) -> Result<i64, Box<dyn std::error::Error>> {
    let tree = parse(source)?;
    Ok(evaluate(&tree)?)
}
