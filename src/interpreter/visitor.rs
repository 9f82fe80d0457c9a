use crate::ast::{BinaryOperator, Expr};

/// A traversal strategy over expression trees.
///
/// A visitor supplies one handler per [`Expr`] variant and chooses its own
/// output type `T`. Operations over the tree are added by implementing this
/// trait on a new type; the `Expr` variants themselves never change for a new
/// operation.
///
/// Handlers receive children as plain `&Expr` and decide themselves whether
/// and in which order to recurse (via [`Expr::accept`]).
pub trait Visitor<T> {
    /// Handles a `Number` leaf.
    fn visit_number(&mut self, value: i64) -> T;
    /// Handles a `BinaryOp` node.
    fn visit_binary_op(&mut self, op: BinaryOperator, left: &Expr, right: &Expr) -> T;
}

impl Expr {
    /// Routes this node to the visitor handler matching its variant.
    ///
    /// The match is exhaustive over the closed variant set, so a visitor
    /// missing a handler is a compile error; there is no runtime "no handler
    /// found" fallback.
    ///
    /// ## Example
    /// ```
    /// use treecalc::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::visitor::Visitor,
    /// };
    ///
    /// /// Counts the nodes of a tree.
    /// struct NodeCount;
    ///
    /// impl Visitor<usize> for NodeCount {
    ///     fn visit_number(&mut self, _value: i64) -> usize {
    ///         1
    ///     }
    ///
    ///     fn visit_binary_op(&mut self, _op: BinaryOperator, left: &Expr, right: &Expr) -> usize {
    ///         1 + left.accept(&mut NodeCount) + right.accept(&mut NodeCount)
    ///     }
    /// }
    ///
    /// let tree = treecalc::parse("2 + 3 * 4").unwrap();
    /// assert_eq!(tree.accept(&mut NodeCount), 5);
    /// ```
    pub fn accept<T>(&self, visitor: &mut dyn Visitor<T>) -> T {
        match self {
            Self::Number { value } => visitor.visit_number(*value),
            Self::BinaryOp { op, left, right } => visitor.visit_binary_op(*op, left, right),
        }
    }
}
