use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, member::parse_call_member},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplicative(tokens)?;
    while let Some(&token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && !op.is_multiplicative()
    {
        tokens.next();
        let right = parse_multiplicative(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line: token.line };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`.
///
/// The rule is: `multiplicative := call_member (("*" | "/" | "%") call_member)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_call_member(tokens)?;
    while let Some(&token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && op.is_multiplicative()
    {
        tokens.next();
        let right = parse_call_member(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line: token.line };
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for anything that is not an operator token.
///
/// # Example
/// ```
/// use francois::{
///     ast::BinaryOperator,
///     interpreter::{lexer::tokenize, parser::binary::token_to_binary_operator},
/// };
///
/// let tokens = tokenize("% x");
///
/// assert_eq!(token_to_binary_operator(&tokens[0]), Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(&tokens[1]), None);
/// ```
#[must_use]
pub fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token.kind {
        TokenKind::Operator => token.text.parse().ok(),
        _ => None,
    }
}
