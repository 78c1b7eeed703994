use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_next, next_token, parse_identifier, unexpected},
        },
    },
};

/// Parses statements until the end-of-input token.
///
/// The end-of-input token itself is left in the stream.
///
/// # Errors
/// The first error from any statement; nothing parsed before it is returned.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a Token>
{
    let mut body = Vec::new();

    while let Some(&token) = tokens.peek()
          && token.kind != TokenKind::Eof
    {
        let statement = parse_statement(tokens)?;
        debug!(line = statement.line_number(), ?statement, "parsed statement");
        body.push(statement);
    }

    Ok(Program { body })
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable declaration (`met` or `const`).
/// - an expression used as a statement, optionally followed by `fin`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    if let Some(statement) = parse_variable_declaration(tokens)? {
        return Ok(statement);
    }

    let expr = parse_expression(tokens)?;
    if let Some(&token) = tokens.peek()
       && token.kind == TokenKind::EndOfStatement
    {
        tokens.next();
    }

    Ok(Statement::Expression(expr))
}

/// Parses a variable declaration statement.
///
/// A declaration has one of the forms:
///
/// ```text
///     met <identifier> fin
///     met <identifier> dans <expression> fin
///     const <identifier> dans <expression> fin
/// ```
///
/// The first form binds null. A constant must always be initialized.
///
/// If the next token is not `met` or `const`, this function returns
/// `Ok(None)` and does not consume any input.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is missing,
/// - a `const` is terminated without an initializer,
/// - neither `dans` nor `fin` follows the identifier,
/// - the initializer is malformed or not followed by `fin`.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token>
{
    let constant = match tokens.peek() {
        Some(token) if token.kind == TokenKind::Local => false,
        Some(token) if token.kind == TokenKind::Const => true,
        _ => return Ok(None),
    };
    let line = next_token(tokens)?.line;

    let name = parse_identifier(tokens)?.text.clone();

    let token = next_token(tokens)?;
    let value = match token.kind {
        TokenKind::EndOfStatement => {
            if constant {
                return Err(ParseError::MissingConstantInitializer { name, line });
            }
            None
        },
        TokenKind::Assignment => {
            let value = parse_expression(tokens)?;
            expect_next(tokens, TokenKind::EndOfStatement, |found| {
                ParseError::ExpectedEndOfStatement { found: found.to_string(),
                                                     line:  found.line, }
            })?;
            Some(value)
        },
        _ => return Err(unexpected(token, "'dans' or 'fin'")),
    };

    Ok(Some(Statement::VariableDeclaration { constant,
                                             name,
                                             value,
                                             line }))
}
