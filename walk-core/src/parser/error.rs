use thiserror::Error;

use crate::utils::prelude::SrcSpan;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseErrorType {
    #[error("Unexpected '}}'")]
    UnexpectedRBrace,
    #[error("Expected statement")]
    ExpectedStatement,
    #[error("Expected newline after statement")]
    ExpectedNewline,
    #[error("Expected newline after '{{'")]
    ExpectedNewlineAfterLBrace,
    #[error("Unterminated block")]
    UnterminatedBlock,
    #[error("Expected variable name after 'var'")]
    ExpectedIdent,
    #[error("Expected '=' after variable name")]
    ExpectedDeclarationAssign,
    #[error("Expected '='")]
    ExpectedAssign,
    #[error("Expected ')'")]
    ExpectedRParen,
    #[error("Expected expression")]
    ExpectedExpression,
    #[error("Invalid number literal `{lexeme}`")]
    InvalidNumber { lexeme: String },
    /// An `INVALID` token from the lexer; the message is its lexeme.
    #[error("{message}")]
    InvalidToken { message: String },
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{error}")]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan
}

impl ParseError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::UnexpectedRBrace => ("No block is open here", vec![]),
            ParseErrorType::ExpectedStatement => (
                "Not the start of a statement",
                vec!["Statements begin with `print`, `var`, `{` or a variable name".into()]
            ),
            ParseErrorType::ExpectedNewline => (
                "Expected a line break here",
                vec!["Each statement must end with a newline".into()]
            ),
            ParseErrorType::ExpectedNewlineAfterLBrace => ("`{` must be the last token on its line", vec![]),
            ParseErrorType::UnterminatedBlock => ("Missing `}`", vec![]),
            ParseErrorType::ExpectedIdent => ("Expected identifier", vec![]),
            ParseErrorType::ExpectedDeclarationAssign
            | ParseErrorType::ExpectedAssign => ("Expected `=`", vec![]),
            ParseErrorType::ExpectedRParen => ("Unclosed parenthesis", vec![]),
            ParseErrorType::ExpectedExpression => (
                "Not the start of an expression",
                vec!["Expressions start with a number, a variable name or `(`".into()]
            ),
            ParseErrorType::InvalidNumber { .. } => ("Invalid number", vec![]),
            ParseErrorType::InvalidToken { .. } => ("Invalid token", vec![]),
        }
    }
}
