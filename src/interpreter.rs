/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic, and reads and writes variables through the
/// environment.
///
/// # Responsibilities
/// - Evaluates every AST node variant.
/// - Reports runtime errors such as unknown variables or modulo by zero.
pub mod evaluator;
/// The environment module stores variable bindings.
///
/// Scopes form a tree rooted at the session's global scope. Declarations go
/// into the current scope; reads and assignments resolve outward to the root.
pub mod environment;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a number, identifier, keyword, operator or delimiter.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and
///   line.
/// - Recognises the language keywords.
/// - Never fails: unrecognized input is passed on as `Undefined` tokens.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into AST nodes with recursive descent, one function per
///   precedence tier.
/// - Validates syntax, reporting errors with location info.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
pub mod value;
