use thiserror::Error;

use crate::utils::prelude::SrcSpan;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorType {
    #[error("Unexpected character '{tok}'")]
    UnrecognizedToken { tok: char },
    #[error("Expected '=' after '!'")]
    LoneBang,
    #[error("Unterminated string")]
    UnterminatedString,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{error}")]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan,
}
