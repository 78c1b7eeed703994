use std::iter::Peekable;

use crate::{
    ast::{Expr, Property},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_additive,
            core::{ParseResult, parse_expression},
            utils::{expect_next, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses an object literal if one starts here, otherwise an additive
/// expression.
///
/// Grammar: `object_or_additive := object | additive`
pub fn parse_object_or_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(token) if token.kind == TokenKind::OpenBrace => parse_object_literal(tokens),
        _ => parse_additive(tokens),
    }
}

/// Parses an object literal of the form `{ key : value, ... }`.
///
/// At least one property is required and a trailing comma is rejected.
/// Duplicate keys are kept here; the evaluator lets the last one win.
///
/// Grammar: `object := "{" property ("," property)* "}"`.
///
/// # Errors
/// - `EmptyObject` for `{}`.
/// - `ExpectedClosingBrace` if the list is not closed by `}`.
/// - Any error from a property.
fn parse_object_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let open = expect_next(tokens, TokenKind::OpenBrace, |found| {
                   ParseError::UnexpectedToken { expected: "'{'".to_string(),
                                                 found:    found.to_string(),
                                                 line:     found.line, }
               })?;

    let properties = parse_comma_separated(tokens, parse_property, TokenKind::CloseBrace, |found| {
                         ParseError::ExpectedClosingBrace { found: found.to_string(),
                                                            line:  found.line, }
                     })?;
    if properties.is_empty() {
        return Err(ParseError::EmptyObject { line: open.line });
    }

    Ok(Expr::ObjectLiteral { properties,
                             line: open.line })
}

/// Parses one `identifier : expression` property.
fn parse_property<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Property>
    where I: Iterator<Item = &'a Token>
{
    let key = parse_identifier(tokens)?;
    expect_next(tokens, TokenKind::Colon, |found| {
        ParseError::UnexpectedToken { expected: "':' after property name".to_string(),
                                      found:    found.to_string(),
                                      line:     found.line, }
    })?;
    let value = parse_expression(tokens)?;

    Ok(Property { key:   key.text.clone(),
                  value,
                  line:  key.line, })
}
