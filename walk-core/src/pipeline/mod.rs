#[cfg(test)]
mod tests;

use std::{io::Write, path::PathBuf};

use crate::{
    interpreter::Interpreter,
    lexer::prelude::tokenize,
    parser::prelude::{parse_program, Program},
    utils::prelude::Error,
};

pub fn read_source(path: PathBuf) -> Result<String, Error> {
    match std::fs::read_to_string(&path) {
        Ok(src) => Ok(src),
        Err(err) => Err(Error::StdIo { path, err: err.kind() }),
    }
}

/// Lexes and parses `src`. `path` is only used for error reporting.
pub fn parse(path: PathBuf, src: &str) -> Result<Program, Error> {
    let tokens = tokenize(src);
    tracing::debug!(tokens = tokens.len(), "tokenized source");

    let program = match parse_program(tokens) {
        Ok(program) => program,
        Err(error) => {
            return Err(Error::Parse { path, src: src.to_string(), error })
        }
    };
    tracing::debug!(statements = program.statements.len(), "parsed program");

    Ok(program)
}

/// Runs the whole pipeline over `src`, printing to `out`.
pub fn run<W: Write>(path: PathBuf, src: &str, out: W) -> Result<(), Error> {
    let program = parse(path.clone(), src)?;

    match Interpreter::new(out).execute(&program) {
        Ok(()) => Ok(()),
        Err(error) => Err(Error::Runtime { path, src: src.to_string(), error }),
    }
}

pub fn run_file<W: Write>(path: PathBuf, out: W) -> Result<(), Error> {
    let src = read_source(path.clone())?;

    run(path, &src, out)
}
