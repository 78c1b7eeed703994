/// Parser entry points and the expression tiers above the operators.
///
/// Defines the `ParseResult` type and the assignment tier, the loosest-binding
/// level of the expression grammar.
pub mod core;

/// Member access, calls and primary expressions.
///
/// The tightest-binding tiers: literals, identifiers, parenthesized
/// expressions, `.`/`[]` access and call argument lists.
pub mod member;

/// Binary operator parsing.
///
/// Implements the multiplicative and additive tiers, both left-associative.
pub mod binary;

/// Object literal parsing.
///
/// Handles `{ key : value, ... }` and otherwise falls through to the additive
/// tier.
pub mod object;

/// Shared parser helpers.
///
/// Comma-separated lists, identifier extraction and error construction.
pub mod utils;

/// Statement parsing.
///
/// Implements variable declarations, expression statements and whole
/// programs.
pub mod statement;
