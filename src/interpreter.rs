/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer (tokenizer) reads the raw input text and produces a lazy stream
/// of tokens, each corresponding to a meaningful element of an arithmetic
/// expression: integer literals, operators, and parentheses. This is the
/// first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into classified tokens, taking the
///   longest match at each position and discarding whitespace.
/// - Parses integer literals into their numeric value.
/// - Reports lexical errors for characters no pattern recognizes.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token stream produced by the lexer with one token
/// of lookahead and constructs an AST that represents the structure of a
/// single expression. Precedence and left associativity are encoded directly
/// in the tree shape.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes by recursive descent.
/// - Validates the grammar, rejecting unbalanced parentheses, misplaced
///   operators, and trailing input.
/// - Surfaces lexing failures unchanged when tokens are pulled lazily.
pub mod parser;
/// The visitor module decouples tree traversal from tree shape.
///
/// A visitor supplies one handler per AST variant; `Expr::accept` routes each
/// node to the matching handler. New operations over the tree are added by
/// writing a new visitor, never by modifying the node types.
///
/// # Responsibilities
/// - Defines the `Visitor` trait with a handler per `Expr` variant.
/// - Dispatches nodes exhaustively, so an incomplete visitor is a compile
///   error rather than a runtime failure.
pub mod visitor;
/// The evaluator module folds a tree into a single integer.
///
/// The evaluator is a concrete visitor that applies each node's operator to
/// its recursively evaluated operands, left before right, using floor
/// division for `/`.
///
/// # Responsibilities
/// - Computes the integer result of a parsed expression.
/// - Reports division by zero.
pub mod evaluator;
/// The printer module renders a tree in prefix (Lisp) notation.
///
/// The printer is a concrete visitor that produces a fully parenthesized
/// prefix string, writing `//` for division to signal its floor semantics.
/// It performs no numeric computation and cannot fail.
///
/// # Responsibilities
/// - Renders `Expr` trees as prefix-notation strings.
pub mod printer;
