use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::object::parse_object_or_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := assignment`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_assignment(tokens)
}

/// Parses an assignment.
///
/// Assignment is right-associative: `a dans b dans 3` assigns `3` to `b` and
/// then to `a`. The left side is not checked here; any expression is
/// accepted and rejected later if it is not an identifier.
///
/// Grammar: `assignment := object_or_additive ("dans" assignment)?`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An `Expr::Assignment`, or the object/additive expression unchanged when no
/// `dans` follows.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let left = parse_object_or_additive(tokens)?;

    if let Some(&token) = tokens.peek()
       && token.kind == TokenKind::Assignment
    {
        tokens.next();
        let value = parse_assignment(tokens)?;
        return Ok(Expr::Assignment { assignee: Box::new(left),
                                     value:    Box::new(value),
                                     line:     token.line, });
    }

    Ok(left)
}
