use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::visitor::Visitor,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// A visitor that folds a tree into a single integer.
///
/// Operands are evaluated left before right. Division is floor division:
/// the quotient is rounded toward negative infinity, so `(0 - 7) / 2` is
/// `-4`, not `-3`. A failure in any subtree propagates through every
/// enclosing frame; no partial result is returned.
pub struct Evaluator;

impl Visitor<EvalResult<i64>> for Evaluator {
    fn visit_number(&mut self, value: i64) -> EvalResult<i64> {
        Ok(value)
    }

    fn visit_binary_op(&mut self, op: BinaryOperator, left: &Expr, right: &Expr) -> EvalResult<i64> {
        let left = left.accept(self)?;
        let right = right.accept(self)?;

        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(floor_div(left, right))
            },
        }
    }
}

/// Divides rounding toward negative infinity.
///
/// `i64` division truncates toward zero; when the signs differ and there is a
/// remainder, the truncated quotient sits one above the floor.
const fn floor_div(left: i64, right: i64) -> i64 {
    let quotient = left / right;
    let remainder = left % right;
    if remainder != 0 && (remainder < 0) != (right < 0) {
        quotient - 1
    } else {
        quotient
    }
}

/// Evaluates a tree to its integer value.
///
/// Evaluation is a pure function of the tree: it never mutates it, and
/// evaluating the same tree twice yields the same result.
///
/// # Parameters
/// - `expr`: The root of the tree to evaluate.
///
/// # Returns
/// The computed integer.
///
/// # Errors
/// Returns `EvalError::DivisionByZero` when a division's right operand
/// evaluates to zero.
///
/// ## Example
/// ```
/// use treecalc::{evaluate, parse};
///
/// let tree = parse("2 + (3 + 4) * 5").unwrap();
/// assert_eq!(evaluate(&tree).unwrap(), 37);
///
/// // Division by zero is an evaluation error, not a parse error.
/// let tree = parse("5 / 0").unwrap();
/// assert!(evaluate(&tree).is_err());
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    expr.accept(&mut Evaluator)
}
