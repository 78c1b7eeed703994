use thiserror::Error;

use crate::interpreter::environment::EnvironmentError;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A name could not be declared, read or assigned.
    #[error("Error on line {line}: {source}.")]
    Name {
        /// What went wrong in the environment.
        source: EnvironmentError,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// The left side of `dans` was not a variable name.
    #[error("Error on line {line}: Cannot assign to a {target}; the assignee must be an identifier.")]
    InvalidAssignmentTarget {
        /// The kind of expression found on the left side.
        target: &'static str,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// The truncated right operand of `%` was zero.
    #[error("Error on line {line}: Modulo by zero.")]
    ModuloByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operand of `%` is not finite, or does not fit in a 64-bit integer
    /// once truncated.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Attaches a source line to an environment failure.
    #[must_use]
    pub const fn name(source: EnvironmentError, line: usize) -> Self {
        Self::Name { source, line }
    }
}
