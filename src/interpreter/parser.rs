use crate::{
    ast::{BinaryOperator, Expr},
    error::{ParseError, SyntaxError},
    interpreter::lexer::{Lexer, Token, TokenKind},
};

/// Result type used by the parser.
///
/// All parsing functions return either a value of type `T` or a `ParseError`
/// describing the failure.
pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser over a lazy token stream.
///
/// The parser holds exactly one token of lookahead: `current` is the token
/// most recently consumed and `lookahead` the one about to be. Advancing
/// shifts the lookahead into `current` and pulls the next token from the
/// lexer, with `None` standing in for the end of input.
///
/// All cursor state lives inside a single `parse` call, so independent parses
/// never interfere with each other.
struct Parser<'a> {
    tokens:    Lexer<'a>,
    current:   Option<Token>,
    lookahead: Option<Token>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self { tokens:    Lexer::new(text),
               current:   None,
               lookahead: None, }
    }

    /// Shifts the lookahead into `current` and pulls the next token.
    ///
    /// A lexing failure in the pulled token surfaces here, unchanged.
    fn advance(&mut self) -> ParseResult<()> {
        let next = self.tokens.next().transpose()?;
        self.current = std::mem::replace(&mut self.lookahead, next);
        Ok(())
    }

    /// Consumes the lookahead token when its kind matches `kind`.
    ///
    /// Returns `true` and advances on a match; otherwise leaves the cursor
    /// untouched and returns `false`.
    fn accept(&mut self, kind: TokenKind) -> ParseResult<bool> {
        if self.lookahead.is_some_and(|tok| tok.kind() == kind) {
            self.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Like [`accept`](Self::accept), but a mismatch is a syntax error naming
    /// the expected kind and what was actually found.
    fn expect(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.accept(kind)? {
            return Ok(());
        }
        Err(self.unexpected(&kind.to_string()))
    }

    /// Builds the syntax error for a lookahead that fits nothing.
    fn unexpected(&self, expected: &str) -> ParseError {
        let expected = expected.to_string();
        match self.lookahead {
            Some(token) => SyntaxError::UnexpectedToken { expected,
                                                          found: token.to_string() }.into(),
            None => SyntaxError::UnexpectedEndOfInput { expected }.into(),
        }
    }

    /// Parses a whole expression and rejects anything left over.
    ///
    /// The grammar entry point. Primes the lookahead, descends, and then
    /// requires the token stream to be exhausted: `"2 + 3)"` parses a
    /// complete sum and still fails on the dangling `)`.
    fn parse(&mut self) -> ParseResult<Expr> {
        self.advance()?;
        let expr = self.expr()?;
        if let Some(token) = self.lookahead {
            return Err(SyntaxError::UnexpectedTrailingTokens { found: token.to_string() }.into());
        }
        Ok(expr)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`
    ///
    /// Each iteration folds the accumulated result into the `left` slot of a
    /// new node, which is exactly what makes chains like `8 - 3 - 2` group as
    /// `(8 - 3) - 2`.
    fn expr(&mut self) -> ParseResult<Expr> {
        let mut left = self.term()?;
        loop {
            let op = if self.accept(TokenKind::Plus)? {
                BinaryOperator::Add
            } else if self.accept(TokenKind::Minus)? {
                BinaryOperator::Sub
            } else {
                break;
            };
            let right = self.term()?;
            left = Expr::binary_op(op, left, right);
        }
        Ok(left)
    }

    /// Parses multiplication and division expressions.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    ///
    /// Left-associative, same fold as [`expr`](Self::expr). Sitting one level
    /// below `expr` is what nests `*`/`/` subtrees inside `+`/`-` ones.
    fn term(&mut self) -> ParseResult<Expr> {
        let mut left = self.factor()?;
        loop {
            let op = if self.accept(TokenKind::Times)? {
                BinaryOperator::Mul
            } else if self.accept(TokenKind::Divide)? {
                BinaryOperator::Div
            } else {
                break;
            };
            let right = self.factor()?;
            left = Expr::binary_op(op, left, right);
        }
        Ok(left)
    }

    /// Parses a number literal or a parenthesized sub-expression.
    ///
    /// The rule is: `factor := NUMBER | "(" expr ")"`
    fn factor(&mut self) -> ParseResult<Expr> {
        if let Some(Token::Number(value)) = self.lookahead {
            self.advance()?;
            return Ok(Expr::Number { value });
        }
        if self.accept(TokenKind::LeftParen)? {
            let expr = self.expr()?;
            self.expect(TokenKind::RightParen)?;
            return Ok(expr);
        }
        Err(self.unexpected("a number or '('"))
    }
}

/// Parses `text` into an expression tree.
///
/// Tokens are pulled from the lexer on demand; the call either returns a
/// complete valid tree or fails, never a partial one.
///
/// # Parameters
/// - `text`: The full expression text.
///
/// # Returns
/// The root node of the parsed tree.
///
/// # Errors
/// - `ParseError::Lex` when the text contains an unrecognized character.
/// - `ParseError::Syntax` when the token sequence violates the grammar:
///   a token where none fits, a missing `)`, trailing tokens after a complete
///   expression, or running out of input early (the empty string included).
///
/// ## Example
/// ```
/// use treecalc::{parse, render_prefix};
///
/// let tree = parse("2 + 3 * 4").unwrap();
/// assert_eq!(render_prefix(&tree), "(+ 2 (* 3 4))");
///
/// assert!(parse("2 + (3 + * 4)").is_err());
/// assert!(parse("").is_err());
/// ```
pub fn parse(text: &str) -> ParseResult<Expr> {
    Parser::new(text).parse()
}
