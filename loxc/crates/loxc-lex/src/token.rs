//! Token definitions.
//!
//! A [`Token`] is produced once and never mutated. It carries its kind, the
//! verbatim lexeme, the canonical literal (strings and numbers only), and the
//! line its first character sits on.

use std::fmt;

use loxc_util::Span;

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character tokens
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,

    // One or two character tokens
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    // Literals
    /// A name that is not a reserved word
    Identifier,
    /// A double-quoted string literal
    String,
    /// A decimal number literal
    Number,

    // Keywords
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fun`
    Fun,
    /// `for`
    For,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns the textual name printed in the token stream.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::LeftParen.name(), "LEFT_PAREN");
    /// assert_eq!(TokenKind::BangEqual.name(), "BANG_EQUAL");
    /// assert_eq!(TokenKind::Eof.name(), "EOF");
    /// ```
    pub const fn name(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }

    /// Returns true for reserved words.
    pub fn is_keyword(&self) -> bool {
        KEYWORDS.iter().any(|(_, kind)| kind == self)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every reserved word with the kind it scans to.
pub const KEYWORDS: [(&str, TokenKind); 16] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fun", TokenKind::Fun),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

/// Looks up a reserved word by exact, case-sensitive spelling.
///
/// # Example
///
/// ```
/// use loxc_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("class"), Some(TokenKind::Class));
/// assert_eq!(keyword_from_ident("Class"), None);
/// assert_eq!(keyword_from_ident("classroom"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == ident)
        .map(|(_, kind)| *kind)
}

/// A numeric literal: the parsed value plus its canonical text.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberLiteral {
    /// Parsed value
    pub value: f64,
    /// Canonical decimal text, e.g. `200.0` for `200`
    pub text: String,
}

/// The canonical value carried by a token.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Literal {
    /// No literal; rendered as `null`
    #[default]
    None,
    /// String contents without the quotes
    Str(String),
    /// Number value and canonical text
    Number(NumberLiteral),
}

impl Literal {
    /// Returns true if there is no literal.
    pub fn is_none(&self) -> bool {
        matches!(self, Literal::None)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => f.write_str("null"),
            Literal::Str(s) => f.write_str(s),
            Literal::Number(n) => f.write_str(&n.text),
        }
    }
}

/// A scanned token.
///
/// `Display` renders the `KIND LEXEME LITERAL` line of the token stream.
///
/// # Example
///
/// ```
/// use loxc_lex::token::{Token, TokenKind};
///
/// let eof = Token::eof(3, 10);
/// assert_eq!(eof.kind, TokenKind::Eof);
/// assert_eq!(eof.to_string(), "EOF  null");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// Token kind
    pub kind: TokenKind,
    /// Verbatim source text
    pub lexeme: String,
    /// Canonical literal value
    pub literal: Literal,
    /// Line of the first character (1-based)
    pub line: u32,
    /// Byte range of the lexeme
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Literal,
        line: u32,
        span: Span,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }

    /// Creates the end-of-input token at byte offset `offset`.
    pub fn eof(line: u32, offset: usize) -> Self {
        Self::new(
            TokenKind::Eof,
            String::new(),
            Literal::None,
            line,
            Span::point(offset, line),
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.lexeme, self.literal)
    }
}
