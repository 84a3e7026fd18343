use std::fmt::Display;

use super::error::LexicalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Арифметика
    Plus, // +
    Minus, // -
    Star, // *
    Slash, // /

    // Группировка
    LParen, // (
    RParen, // )
    LBrace, // {
    RBrace, // }

    // Присваивание и сравнение
    Assign, // =
    EqualEqual, // ==
    NotEqual, // !=
    Less, // <
    LessEqual, // <=
    Greater, // >
    GreaterEqual, // >=

    // Литералы
    Ident,
    Number,
    String,

    // Ключевые слова
    Print, // print
    Var, // var

    Newline,
    Eof,
    Invalid,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::NotEqual => "NOT_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Ident => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Print => "PRINT",
            TokenKind::Var => "VAR",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Eof => "END_OF_FILE",
            TokenKind::Invalid => "INVALID",
        };

        write!(f, "{name}")
    }
}

/// A classified lexeme. For `Invalid` tokens the lexeme is the diagnostic
/// message rather than source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    pub fn invalid(error: &LexicalError) -> Self {
        Self {
            kind: TokenKind::Invalid,
            lexeme: error.to_string(),
        }
    }

    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind, self.lexeme)
    }
}

pub fn str_to_keyword(word: &str) -> Option<TokenKind> {
    Some(match word {
        "print" => TokenKind::Print,
        "var" => TokenKind::Var,
        _ => return None,
    })
}
