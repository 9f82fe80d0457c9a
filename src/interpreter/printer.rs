use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::visitor::Visitor,
};

/// A visitor that renders a tree in fully parenthesized prefix notation.
///
/// Every binary node becomes `(op left right)`. Division prints as `//`, the
/// floor-division symbol, so the rendered form reads back with the same
/// semantics the evaluator applies. No arithmetic is performed and rendering
/// a well-formed tree cannot fail.
pub struct LispPrinter;

impl Visitor<String> for LispPrinter {
    fn visit_number(&mut self, value: i64) -> String {
        value.to_string()
    }

    fn visit_binary_op(&mut self, op: BinaryOperator, left: &Expr, right: &Expr) -> String {
        let symbol = match op {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "//",
        };
        let left = left.accept(self);
        let right = right.accept(self);
        format!("({symbol} {left} {right})")
    }
}

/// Renders a tree as a prefix-notation string.
///
/// Operands appear in the same left-to-right order as in the original text;
/// the nesting mirrors the tree, which in turn mirrors precedence and
/// grouping.
///
/// # Parameters
/// - `expr`: The root of the tree to render.
///
/// # Returns
/// The fully parenthesized prefix string.
///
/// ## Example
/// ```
/// use treecalc::{parse, render_prefix};
///
/// let tree = parse("2 + (3 + 4) * 5").unwrap();
/// assert_eq!(render_prefix(&tree), "(+ 2 (* (+ 3 4) 5))");
///
/// let tree = parse("7 / 2").unwrap();
/// assert_eq!(render_prefix(&tree), "(// 7 2)");
/// ```
#[must_use]
pub fn render_prefix(expr: &Expr) -> String {
    expr.accept(&mut LispPrinter)
}
