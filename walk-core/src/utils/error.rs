use std::path::PathBuf;

use termcolor::Buffer;
use thiserror::Error;

use crate::{
    interpreter::RuntimeError,
    parser::prelude::ParseError,
};
use super::diagnostic::{Diagnostic, Label, Location};

/// Failure of a whole run. `Display` gives the bare one-line message;
/// [`Error::pretty`] renders it against the source.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("{error}")]
    Parse {
        path: PathBuf,
        src: String,
        error: ParseError
    },
    #[error("{error}")]
    Runtime {
        path: PathBuf,
        src: String,
        error: RuntimeError
    },
    #[error("Could not read `{}`: {}", .path.display(), .err)]
    StdIo {
        path: PathBuf,
        err: std::io::ErrorKind
    },
    #[error("Failed to write output: {err}")]
    Output {
        err: std::io::ErrorKind
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Output { err: err.kind() }
    }
}

impl Error {
    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();

        match self.pretty(&mut nocolor) {
            Ok(()) => String::from_utf8_lossy(&nocolor.into_inner()).into_owned(),
            Err(_) => self.to_string(),
        }
    }

    pub fn pretty(&self, buf: &mut Buffer) -> std::io::Result<()> {
        use std::io::Write;

        for diagnostic in self.to_diagnostics() {
            diagnostic.write(buf)?;
            writeln!(buf)?;
        }

        Ok(())
    }

    pub fn to_diagnostics(&self) -> Vec<Diagnostic<'_>> {
        match self {
            Error::Parse { path, src, error } => {
                let (label, extra) = error.details();

                vec![Diagnostic {
                    title: format!("Syntax error: {error}"),
                    text: extra.join("\n"),
                    location: Some(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label.to_string()),
                            span: error.span,
                        },
                    }),
                }]
            },
            Error::Runtime { path, src, error } => {
                let (label, extra) = error.details();

                vec![Diagnostic {
                    title: format!("Runtime error: {error}"),
                    text: extra.join("\n"),
                    location: Some(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label.to_string()),
                            span: error.location,
                        },
                    }),
                }]
            },
            Error::StdIo { .. } => {
                vec![Diagnostic {
                    title: "Standard IO error".into(),
                    text: self.to_string(),
                    location: None,
                }]
            },
            Error::Output { .. } => {
                vec![Diagnostic {
                    title: "Output error".into(),
                    text: self.to_string(),
                    location: None,
                }]
            }
        }
    }
}
