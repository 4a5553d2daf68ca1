use log::{debug, info};
use serde::Serialize;
use std::fmt;
use std::mem;

/// The different kinds of tokens recognized by the PyC scanner.
///
/// Variants without data represent single-character, operator, or keyword
/// tokens.  `STRING(String)` and `NUMBER(i64)` carry their literal values.
/// `IDENTIFIER` is used for user-defined names.
/// `EOF` marks the end of input.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Serialize)]
pub enum TokenType {
    /// '('
    LEFT_PAREN,

    /// ')'
    RIGHT_PAREN,

    /// '{'
    LEFT_BRACE,

    /// '}'
    RIGHT_BRACE,

    /// '['
    LEFT_BRACKET,

    /// ']'
    RIGHT_BRACKET,

    /// ','
    COMMA,

    /// ';'
    SEMICOLON,

    /// ':'
    COLON,

    /// '-'
    MINUS,

    /// '+'
    PLUS,

    /// '/'
    SLASH,

    /// '*'
    STAR,

    /// '%'
    PERCENT,

    /// '='
    EQUAL,

    /// '+='
    PLUS_EQUAL,

    /// '-='
    MINUS_EQUAL,

    /// '*='
    STAR_EQUAL,

    /// '/='
    SLASH_EQUAL,

    /// '=='
    EQUAL_EQUAL,

    /// '!='
    BANG_EQUAL,

    /// '>'
    GREATER,

    /// '>='
    GREATER_EQUAL,

    /// '<'
    LESS,

    /// '<='
    LESS_EQUAL,

    /// A user-defined identifier
    IDENTIFIER,

    /// A string literal (contents without quotes)
    STRING(String),

    /// An integer literal
    #[serde(rename = "NUMBER")]
    NUMBER(i64),

    /// 'int'
    INT,

    /// 'string'
    STRING_KW,

    /// 'array'
    ARRAY,

    /// 'list'
    LIST,

    /// 'dict'
    DICT,

    /// 'func'
    FUNC,

    /// 'if'
    IF,

    /// 'while'
    WHILE,

    /// 'return'
    RETURN,

    /// 'malloc'
    MALLOC,

    /// 'free'
    FREE,

    /// End-of-file marker
    EOF,
}

impl PartialEq for TokenType {
    /// Two TokenTypes are equal if they share the same variant
    /// (ignoring any inner data). Uses `mem::discriminant` to compare.
    fn eq(&self, other: &Self) -> bool {
        debug!("Comparing TokenType: self={:?}, other={:?}", self, other);

        let same: bool = mem::discriminant(self) == mem::discriminant(other);

        debug!("TokenType match result: {}", same);

        same
    }
}

/// A scanned token, including its type, the original lexeme,
/// and the line number where it was found.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Token<'a> {
    /// The category of this token.
    pub token_type: TokenType,

    /// The exact substring from the source that produced this token.
    pub lexeme: &'a str,

    /// 1-based line number in the source.
    pub line: usize,
}

impl<'a> Token<'a> {
    /// Create a new Token with the given type, lexeme, and line.
    /// Also logs its creation at INFO level.
    pub fn new(token_type: TokenType, lexeme: &'a str, line: usize) -> Self {
        info!(
            "Creating new token: type={:?}, lexeme={}, line={}",
            token_type, lexeme, line
        );

        Self {
            token_type,
            lexeme,
            line,
        }
    }
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug!(
            "Formatting token: type={:?}, lexeme={}, line={}",
            self.token_type, self.lexeme, self.line
        );

        // ── 1. decide literal string (may borrow or inline-format) ──────────
        let literal_str: &str = match &self.token_type {
            TokenType::STRING(s) => s,
            TokenType::NUMBER(n) => {
                // integers render without a fractional part
                let mut buf: itoa::Buffer = itoa::Buffer::new();
                let printed: String = buf.format(*n).to_string();
                Box::leak(printed.into_boxed_str())
            }
            _ => "null",
        };

        // ── 2. variant name without payloads ───────────────────────────────
        let variant: &'static str = match self.token_type {
            TokenType::STRING(_) => "STRING",
            TokenType::NUMBER(_) => "NUMBER",
            TokenType::LEFT_PAREN => "LEFT_PAREN",
            TokenType::RIGHT_PAREN => "RIGHT_PAREN",
            TokenType::LEFT_BRACE => "LEFT_BRACE",
            TokenType::RIGHT_BRACE => "RIGHT_BRACE",
            TokenType::LEFT_BRACKET => "LEFT_BRACKET",
            TokenType::RIGHT_BRACKET => "RIGHT_BRACKET",
            TokenType::COMMA => "COMMA",
            TokenType::SEMICOLON => "SEMICOLON",
            TokenType::COLON => "COLON",
            TokenType::MINUS => "MINUS",
            TokenType::PLUS => "PLUS",
            TokenType::SLASH => "SLASH",
            TokenType::STAR => "STAR",
            TokenType::PERCENT => "PERCENT",
            TokenType::EQUAL => "EQUAL",
            TokenType::PLUS_EQUAL => "PLUS_EQUAL",
            TokenType::MINUS_EQUAL => "MINUS_EQUAL",
            TokenType::STAR_EQUAL => "STAR_EQUAL",
            TokenType::SLASH_EQUAL => "SLASH_EQUAL",
            TokenType::EQUAL_EQUAL => "EQUAL_EQUAL",
            TokenType::BANG_EQUAL => "BANG_EQUAL",
            TokenType::GREATER => "GREATER",
            TokenType::GREATER_EQUAL => "GREATER_EQUAL",
            TokenType::LESS => "LESS",
            TokenType::LESS_EQUAL => "LESS_EQUAL",
            TokenType::IDENTIFIER => "IDENTIFIER",
            TokenType::INT => "INT",
            TokenType::STRING_KW => "STRING_KW",
            TokenType::ARRAY => "ARRAY",
            TokenType::LIST => "LIST",
            TokenType::DICT => "DICT",
            TokenType::FUNC => "FUNC",
            TokenType::IF => "IF",
            TokenType::WHILE => "WHILE",
            TokenType::RETURN => "RETURN",
            TokenType::MALLOC => "MALLOC",
            TokenType::FREE => "FREE",
            TokenType::EOF => "EOF",
        };

        info!(
            "Formatted token: {} {} {}",
            variant, self.lexeme, literal_str
        );

        write!(f, "{} {} {}", variant, self.lexeme, literal_str)
    }
}
