use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by object literals and call argument lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the `closing` token, to end it.
///
/// An immediately encountered closing token produces an empty list. A comma
/// directly before the closing token is a trailing comma and is rejected by
/// `parse_item`.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token kind that terminates the list.
/// - `unclosed`: Builds the error reported when something other than `,` or
///   `closing` follows an item.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an item is followed by anything but `,` or `closing`.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: TokenKind,
    unclosed: impl Fn(&Token) -> ParseError)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token>
{
    let mut items = Vec::new();
    if let Some(&token) = tokens.peek()
       && token.kind == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        let token = next_token(tokens)?;
        match token.kind {
            TokenKind::Comma => {},
            kind if kind == closing => break,
            _ => return Err(unclosed(token)),
        }
    }
    Ok(items)
}

/// Consumes the next token, which must be of kind `kind`.
///
/// # Errors
/// - `UnrecognizedToken` if the next token is [`TokenKind::Undefined`].
/// - The error built by `otherwise` for any other mismatch.
/// - `TruncatedTokenStream` if the stream is exhausted.
pub(in crate::interpreter::parser) fn expect_next<'a, I>(
    tokens: &mut Peekable<I>,
    kind: TokenKind,
    otherwise: impl FnOnce(&Token) -> ParseError)
    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    let token = next_token(tokens)?;
    match token.kind {
        found if found == kind => Ok(token),
        TokenKind::Undefined => Err(unrecognized(token)),
        _ => Err(otherwise(token)),
    }
}

/// Consumes the next token.
///
/// Reaching the end of the source is reported by the rule that finds the
/// `Eof` token, with that token's line. The stream only runs dry if it was
/// not built by `tokenize`.
///
/// # Errors
/// `TruncatedTokenStream` if the stream is exhausted.
pub(in crate::interpreter::parser) fn next_token<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next().ok_or(ParseError::TruncatedTokenStream)
}

/// Consumes an identifier token and returns it.
///
/// # Errors
/// `ExpectedIdentifier` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    expect_next(tokens, TokenKind::Identifier, |found| {
        ParseError::ExpectedIdentifier { found: found.to_string(),
                                         line:  found.line, }
    })
}

/// Builds the error for a token that cannot appear where `expected` was
/// required.
///
/// Undefined tokens and the end of input get their own variants so that the
/// message names the real problem.
pub(in crate::interpreter::parser) fn unexpected(token: &Token, expected: &str) -> ParseError {
    match token.kind {
        TokenKind::Undefined => unrecognized(token),
        TokenKind::Eof => ParseError::UnexpectedEndOfInput { line: token.line },
        _ => ParseError::UnexpectedToken { expected: expected.to_string(),
                                           found:    token.to_string(),
                                           line:     token.line, },
    }
}

fn unrecognized(token: &Token) -> ParseError {
    ParseError::UnrecognizedToken { text: token.text.clone(),
                                    line: token.line, }
}
