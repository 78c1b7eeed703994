use std::fmt;

use logos::Logos;
use tracing::trace;

/// Lexeme classes recognised by logos before keyword and literal
/// classification.
///
/// Every character of the input belongs to exactly one class, so the lexer
/// never reports an error for well-formed UTF-8. Whitespace is consumed here
/// and never reaches [`TokenKind`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
enum RawToken {
    /// Spaces, tabs, form feeds, carriage returns and newlines.
    #[regex(r"[ \t\r\f\n]+", |lex| {
        lex.extras.line += lex.slice().matches('\n').count();
        logos::Skip
    })]
    Whitespace,
    /// `+`, `-`, `*`, `/` or `%`.
    #[regex(r"[+\-*/%]")]
    Operator,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `{`
    #[token("{")]
    OpenBrace,
    /// `}`
    #[token("}")]
    CloseBrace,
    /// `[`
    #[token("[")]
    OpenBracket,
    /// `]`
    #[token("]")]
    CloseBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `:`
    #[token(":")]
    Colon,
    /// Any other character followed by the longest run of cased letters and
    /// digits. Classified by [`classify_word`].
    #[regex(r"[^ \t\r\f\n+\-*/%(){}\[\],.:][\p{Cased}0-9]*")]
    Word,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// The closed set of token categories produced by [`tokenize`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// End of input. Always the last token, and only once.
    Eof,
    /// `fin`
    EndOfStatement,
    /// Numeric literal such as `42` or `3.14`.
    Number,
    /// One of `+ - * / %`.
    Operator,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `:`
    Colon,
    /// Variable name.
    Identifier,
    /// `met`
    Local,
    /// `const`
    Const,
    /// `dans`
    Assignment,
    /// `null`
    Null,
    /// A run of characters that is neither a word, a number nor a symbol.
    Undefined,
}

/// Keyword spellings and the token kinds they map to.
///
/// Matching is exact and case-sensitive: `Met` is an identifier.
pub const KEYWORDS: [(&str, TokenKind); 5] = [("met", TokenKind::Local),
                                              ("const", TokenKind::Const),
                                              ("dans", TokenKind::Assignment),
                                              ("null", TokenKind::Null),
                                              ("fin", TokenKind::EndOfStatement)];

/// A single lexical token.
///
/// Tokens keep the exact source text they were produced from; numeric
/// literals are converted by the parser, not here.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    /// The token category.
    pub kind: TokenKind,
    /// The source text of the token. Empty for [`TokenKind::Eof`].
    pub text: String,
    /// The 1-based line the token starts on.
    pub line: usize,
}

impl Token {
    fn new(kind: TokenKind, text: &str, line: usize) -> Self {
        Self { kind,
               text: text.to_string(),
               line }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{self:?}"))
    }
}

/// Converts source text into tokens.
///
/// Scanning never fails. Input that cannot start a valid token is emitted as
/// [`TokenKind::Undefined`] and left for the parser to reject. The returned
/// sequence always ends with exactly one [`TokenKind::Eof`] token.
///
/// # Example
/// ```
/// use francois::{TokenKind, tokenize};
///
/// let kinds: Vec<TokenKind> = tokenize("met x dans 4.5 fin").iter()
///                                                          .map(|t| t.kind)
///                                                          .collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Local,
///             TokenKind::Identifier,
///             TokenKind::Assignment,
///             TokenKind::Number,
///             TokenKind::EndOfStatement,
///             TokenKind::Eof]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = RawToken::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(raw) = lexer.next() {
        let line = lexer.extras.line;
        let kind = match raw {
            Ok(RawToken::Word) => {
                if lexer.slice().bytes().all(|b| b.is_ascii_digit()) {
                    let fraction = fraction_len(lexer.remainder());
                    lexer.bump(fraction);
                }
                classify_word(lexer.slice())
            },
            Ok(raw) => symbol_kind(raw),
            Err(()) => TokenKind::Undefined,
        };
        tokens.push(Token::new(kind, lexer.slice(), line));
    }

    tokens.push(Token::new(TokenKind::Eof, "", lexer.extras.line));
    trace!(count = tokens.len(), "tokenized source");

    tokens
}

/// Returns the token kind for a keyword spelling, if it is one.
#[must_use]
pub fn keyword(word: &str) -> Option<TokenKind> {
    KEYWORDS.iter()
            .find(|(spelling, _)| *spelling == word)
            .map(|(_, kind)| *kind)
}

/// A character is alphabetic when it has distinct upper and lower case forms.
fn is_alphabetic(c: char) -> bool {
    c.to_lowercase().ne(c.to_uppercase())
}

/// Decides what a captured word is.
///
/// Words containing a letter anywhere are keywords or identifiers, so `2x`
/// and `1e5` are identifiers. Other words that parse as an `f64` are numbers,
/// and anything else is undefined.
fn classify_word(word: &str) -> TokenKind {
    if word.chars().any(is_alphabetic) {
        return keyword(word).unwrap_or(TokenKind::Identifier);
    }
    if word.parse::<f64>().is_ok() {
        TokenKind::Number
    } else {
        TokenKind::Undefined
    }
}

/// Length of a `.digits` fraction at the start of `rest`, or zero.
fn fraction_len(rest: &str) -> usize {
    let Some(digits) = rest.strip_prefix('.') else {
        return 0;
    };
    match digits.bytes().take_while(u8::is_ascii_digit).count() {
        0 => 0,
        n => n + 1,
    }
}

const fn symbol_kind(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Operator => TokenKind::Operator,
        RawToken::OpenParen => TokenKind::OpenParen,
        RawToken::CloseParen => TokenKind::CloseParen,
        RawToken::OpenBrace => TokenKind::OpenBrace,
        RawToken::CloseBrace => TokenKind::CloseBrace,
        RawToken::OpenBracket => TokenKind::OpenBracket,
        RawToken::CloseBracket => TokenKind::CloseBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Colon => TokenKind::Colon,
        // Whitespace is skipped by logos and words are classified separately.
        RawToken::Whitespace | RawToken::Word => TokenKind::Undefined,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).iter().map(|t| t.kind).collect()
    }

    fn texts(source: &str) -> Vec<String> {
        tokenize(source).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn empty_input_is_just_eof() {
        assert_eq!(kinds(""), [TokenKind::Eof]);
        assert_eq!(kinds(" \t\n "), [TokenKind::Eof]);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        use TokenKind::{Assignment, Const, EndOfStatement, Eof, Identifier, Local, Null};

        assert_eq!(kinds("met const dans null fin"),
                   [Local, Const, Assignment, Null, EndOfStatement, Eof]);
        assert_eq!(kinds("Met DANS Fin"), [Identifier, Identifier, Identifier, Eof]);
    }

    #[test]
    fn single_character_symbols() {
        use TokenKind::{
            CloseBrace, CloseBracket, CloseParen, Colon, Comma, Dot, Eof, OpenBrace, OpenBracket,
            OpenParen, Operator,
        };

        assert_eq!(kinds("+-*/%(){}[],.:"),
                   [Operator, Operator, Operator, Operator, Operator, OpenParen, CloseParen,
                    OpenBrace, CloseBrace, OpenBracket, CloseBracket, Comma, Dot, Colon, Eof]);
    }

    #[test]
    fn words_are_maximal_runs() {
        assert_eq!(texts("abc+12*x1"), ["abc", "+", "12", "*", "x1", ""]);
        assert_eq!(kinds("x1"), [TokenKind::Identifier, TokenKind::Eof]);
    }

    #[test]
    fn accented_letters_are_alphabetic() {
        assert_eq!(kinds("élève"), [TokenKind::Identifier, TokenKind::Eof]);
    }

    #[test]
    fn decimal_literals_are_one_token() {
        assert_eq!(texts("3.14 + 2"), ["3.14", "+", "2", ""]);
        assert_eq!(kinds("3.14"), [TokenKind::Number, TokenKind::Eof]);
    }

    #[test]
    fn dot_without_fraction_stays_a_dot() {
        assert_eq!(kinds("3.x"),
                   [TokenKind::Number, TokenKind::Dot, TokenKind::Identifier, TokenKind::Eof]);
        assert_eq!(kinds("a.b"),
                   [TokenKind::Identifier, TokenKind::Dot, TokenKind::Identifier, TokenKind::Eof]);
    }

    #[test]
    fn unrecognized_runs_are_undefined() {
        assert_eq!(kinds("= _ §"),
                   [TokenKind::Undefined, TokenKind::Undefined, TokenKind::Undefined, TokenKind::Eof]);
        assert_eq!(texts("= _"), ["=", "_", ""]);
    }

    #[test]
    fn any_letter_makes_a_word_an_identifier() {
        assert_eq!(kinds("1a 2x 1e5 _x @ab"),
                   [TokenKind::Identifier,
                    TokenKind::Identifier,
                    TokenKind::Identifier,
                    TokenKind::Identifier,
                    TokenKind::Identifier,
                    TokenKind::Eof]);
        assert_eq!(kinds("2fin"), [TokenKind::Identifier, TokenKind::Eof]);
    }

    #[test]
    fn scanning_always_ends_with_one_eof() {
        for source in ["", "fin", "((", "€€€", "1 2 3", "\n\n", "met x dans 1 fin ;;"] {
            let tokens = tokenize(source);
            let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();

            assert_eq!(eofs, 1, "source {source:?}");
            assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        }
    }

    #[test]
    fn lines_are_tracked() {
        let lines: Vec<usize> = tokenize("a\nb\n\nc").iter().map(|t| t.line).collect();

        assert_eq!(lines, [1, 2, 4, 4]);
    }
}
