/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` covers the two shapes an expression can take: an integer literal
/// leaf, or a binary operation over two sub-expressions. Children are owned
/// exclusively by their parent (`Box`), so a tree is a strict hierarchy with
/// a single root reference and no sharing.
///
/// A tree produced by the parser is never mutated afterwards; visitors
/// traverse it by shared reference only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal, such as `42`.
    Number {
        /// The literal value.
        value: i64,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a `BinaryOp` node, boxing both children.
    ///
    /// ## Example
    /// ```
    /// use treecalc::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary_op(BinaryOperator::Add,
    ///                           Expr::Number { value: 2 },
    ///                           Expr::Number { value: 3 });
    /// assert_eq!(treecalc::evaluate(&sum).unwrap(), 5);
    /// ```
    #[must_use]
    pub fn binary_op(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }
}

/// Represents a binary operator.
///
/// The tree shape already encodes precedence and grouping, so the operator
/// itself carries no binding information.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Floor division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
