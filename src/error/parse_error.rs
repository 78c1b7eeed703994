use thiserror::Error;

/// Represents all errors that can occur during parsing.
///
/// Every variant names what the parser expected and what it found, plus the
/// line it was found on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input in the middle of a construct.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The token stream ran out before its `Eof` token. Streams built by
    /// [`tokenize`](crate::tokenize) always end with one.
    #[error("Token stream ended before its end-of-input token.")]
    TruncatedTokenStream,
    /// The scanner could not classify this text.
    #[error("Error on line {line}: Unrecognized input '{text}'.")]
    UnrecognizedToken {
        /// The unrecognized text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric literal could not be converted to a number.
    #[error("Error on line {line}: Invalid numeric literal '{text}'.")]
    InvalidNumber {
        /// The literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}: Expected closing parenthesis ')', found {found}.")]
    ExpectedClosingParen {
        /// The token encountered instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A closing brace `}` was expected but not found.
    #[error("Error on line {line}: Expected closing brace '}}', found {found}.")]
    ExpectedClosingBrace {
        /// The token encountered instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A closing bracket `]` was expected but not found.
    #[error("Error on line {line}: Expected closing bracket ']', found {found}.")]
    ExpectedClosingBracket {
        /// The token encountered instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An identifier was required, e.g. after `met` or `.`.
    #[error("Error on line {line}: Expected identifier, found {found}.")]
    ExpectedIdentifier {
        /// The token encountered instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A declaration was not terminated by `fin`.
    #[error("Error on line {line}: Expected 'fin' after declaration, found {found}.")]
    ExpectedEndOfStatement {
        /// The token encountered instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `const` declarations must have an initializer.
    #[error("Error on line {line}: Constant '{name}' must be initialized with 'dans'.")]
    MissingConstantInitializer {
        /// The constant's name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An object literal had no properties.
    #[error("Error on line {line}: Object literals need at least one property.")]
    EmptyObject {
        /// The source line where the error occurred.
        line: usize,
    },
}
