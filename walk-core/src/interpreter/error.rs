use thiserror::Error;

use crate::utils::prelude::SrcSpan;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeErrorType {
    #[error("Undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("Variable already declared in this scope: {name}")]
    Redeclaration { name: String },
    #[error("Failed to write output: {err}")]
    Output { err: std::io::ErrorKind },
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{error}")]
pub struct RuntimeError {
    pub error: RuntimeErrorType,
    pub location: SrcSpan,
}

impl RuntimeError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            RuntimeErrorType::UndefinedVariable { .. } => (
                "Not bound in any enclosing scope",
                vec!["Declare it first with `var`".into()]
            ),
            RuntimeErrorType::Redeclaration { .. } => (
                "Already declared in this block",
                vec!["Use `=` to assign to the existing variable".into()]
            ),
            RuntimeErrorType::Output { .. } => ("While printing this value", vec![]),
        }
    }
}
