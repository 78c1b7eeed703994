use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_next, next_token, parse_comma_separated, unexpected},
        },
    },
};

/// Parses member accesses followed by any number of call argument lists.
///
/// `f(x)(y)` is a call whose callee is the call `f(x)`.
///
/// Grammar:
/// ```text
///     call_member := member ("(" arguments ")")*
/// ```
pub(crate) fn parse_call_member<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut node = parse_member(tokens)?;

    while let Some(&open) = tokens.peek()
          && open.kind == TokenKind::OpenParen
    {
        tokens.next();
        let arguments =
            parse_comma_separated(tokens, parse_expression, TokenKind::CloseParen, |found| {
                ParseError::ExpectedClosingParen { found: found.to_string(),
                                                   line:  found.line, }
            })?;
        node = Expr::Call { callee: Box::new(node),
                            arguments,
                            line: open.line };
    }

    Ok(node)
}

/// Parses a left-associative chain of member accesses.
///
/// 1. **Dotted access** `object.name`: the property must be an identifier.
/// 2. **Computed access** `object[expression]`: any expression, closed by `]`.
///
/// Grammar:
/// ```text
///     member := primary ("." identifier | "[" expression "]")*
/// ```
///
/// # Errors
/// - `ExpectedIdentifier` if a `.` is not followed by an identifier.
/// - `ExpectedClosingBracket` if a `[` is never closed.
fn parse_member<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut node = parse_primary(tokens)?;

    loop {
        let Some(&token) = tokens.peek() else {
            break;
        };
        let (property, computed) = match token.kind {
            TokenKind::Dot => {
                tokens.next();
                let name = expect_next(tokens, TokenKind::Identifier, |found| {
                               ParseError::ExpectedIdentifier { found: found.to_string(),
                                                                line:  found.line, }
                           })?;
                (Expr::Identifier { name: name.text.clone(),
                                    line: name.line, },
                 false)
            },
            TokenKind::OpenBracket => {
                tokens.next();
                let property = parse_expression(tokens)?;
                expect_next(tokens, TokenKind::CloseBracket, |found| {
                    ParseError::ExpectedClosingBracket { found: found.to_string(),
                                                         line:  found.line, }
                })?;
                (property, true)
            },
            _ => break,
        };
        node = Expr::Member { object: Box::new(node),
                              property: Box::new(property),
                              computed,
                              line: token.line };
    }

    Ok(node)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := identifier
///              | "null"
///              | number
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = next_token(tokens)?;

    match token.kind {
        TokenKind::Identifier => Ok(Expr::Identifier { name: token.text.clone(),
                                                       line: token.line, }),
        TokenKind::Null => Ok(Expr::NullLiteral { line: token.line }),
        TokenKind::Number => parse_numeric_literal(token),
        TokenKind::OpenParen => {
            let expr = parse_expression(tokens)?;
            expect_next(tokens, TokenKind::CloseParen, |found| {
                ParseError::ExpectedClosingParen { found: found.to_string(),
                                                   line:  found.line, }
            })?;
            Ok(expr)
        },
        _ => Err(unexpected(token, "an expression")),
    }
}

/// Converts a number token into an `Expr::NumericLiteral`.
///
/// # Errors
/// `InvalidNumber` if the text is not a valid `f64` literal.
fn parse_numeric_literal(token: &Token) -> ParseResult<Expr> {
    let value = token.text
                     .parse::<f64>()
                     .map_err(|_| ParseError::InvalidNumber { text: token.text.clone(),
                                                              line: token.line, })?;
    Ok(Expr::NumericLiteral { value,
                              line: token.line })
}
