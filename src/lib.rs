//! # francois
//!
//! francois is a small scripting language with French keywords, written in
//! Rust. Source text is scanned into tokens, parsed into an abstract syntax
//! tree and evaluated against a lexically scoped environment.
//!
//! ```text
//! met prix dans 12.5 fin
//! const quantite dans 4 fin
//! { total : prix * quantite, reste : 7 % 3 }
//! ```

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

use tracing::debug;

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one closed enum per syntactic category.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the environment and
/// value representations.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

pub use crate::{
    ast::Program,
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        environment::Environment,
        lexer::{Token, TokenKind, tokenize},
        value::Value,
    },
};
use crate::interpreter::parser::statement::parse_program;

/// Parses source text into a [`Program`].
///
/// # Errors
/// Returns the first [`ParseError`] encountered. No partial program is
/// returned.
///
/// # Examples
/// ```
/// use francois::produce_ast;
///
/// let program = produce_ast("met a dans 5 fin a").unwrap();
/// assert_eq!(program.body.len(), 2);
///
/// assert!(produce_ast("const x fin").is_err());
/// ```
pub fn produce_ast(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source);
    let mut iter = tokens.iter().peekable();
    parse_program(&mut iter)
}

/// Evaluates a program against an environment and returns the value of its
/// last statement.
///
/// # Errors
/// Returns the first [`RuntimeError`] raised. Bindings made before the error
/// remain in `env`.
pub fn evaluate(program: &Program, env: &mut Environment) -> Result<Value, RuntimeError> {
    interpreter::evaluator::core::evaluate(program, env)
}

/// Parses and evaluates `source` in `env`.
///
/// This is what a REPL calls once per input line, reusing the same
/// environment so variables persist between lines.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use francois::{Environment, Value, run};
///
/// let mut env = Environment::new();
///
/// run("met a dans 5 fin", &mut env).unwrap();
/// assert_eq!(run("a + 1", &mut env).unwrap(), Value::Numeric(6.0));
///
/// // Example with an intentional error (unknown variable).
/// assert!(run("b", &mut env).is_err());
/// ```
pub fn run(source: &str, env: &mut Environment) -> Result<Value, Error> {
    let program = produce_ast(source)?;
    debug!(statements = program.body.len(), "evaluating program");
    Ok(evaluate(&program, env)?)
}
