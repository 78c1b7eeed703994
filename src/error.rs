use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into an AST.
/// Unrecognized input found by the scanner is reported here as well, since the
/// scanner itself never fails.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, including
/// scope failures reported by the environment.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the parse-then-evaluate pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The source did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while being evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
