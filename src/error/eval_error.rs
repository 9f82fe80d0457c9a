#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Evaluation is a pure fold over the tree; the only failure a well-formed
/// tree can produce is an attempt to divide by zero.
pub enum EvalError {
    /// Attempted to divide by zero.
    DivisionByZero,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
        }
    }
}

impl std::error::Error for EvalError {}
