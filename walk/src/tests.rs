use std::{io::Write, path::PathBuf};

use clap::{error::ErrorKind, Parser};
use walk_core::utils::prelude::Error;

use super::{emit_tokens, error_line, execute, Cli, Emit};

struct Closed;

impl Write for Closed {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn emitted(emit: Emit, src: &str) -> Result<String, Error> {
    let mut out = Vec::new();
    execute(emit, PathBuf::from("main.walk"), src, &mut out)?;

    Ok(String::from_utf8(out).expect("output is utf8"))
}

fn parse_error_kind(args: &[&str]) -> Option<ErrorKind> {
    Cli::try_parse_from(args.iter().copied()).err().map(|err| err.kind())
}

#[test]
fn test_token_dump() -> Result<(), Error> {
    assert_eq!(
        emitted(Emit::Tokens, "var x = 1\n")?,
        concat!(
            "0..3 VAR \"var\"\n",
            "4..5 IDENTIFIER \"x\"\n",
            "6..7 ASSIGN \"=\"\n",
            "8..9 NUMBER \"1\"\n",
            "9..10 NEWLINE \"\\n\"\n",
            "10..10 END_OF_FILE \"\"\n",
        )
    );

    Ok(())
}

#[test]
fn test_token_dump_keeps_invalid_tokens() -> Result<(), Error> {
    let dump = emitted(Emit::Tokens, "print @\n")?;

    assert!(dump.contains("6..7 INVALID \"Unexpected character '@'\"\n"), "{dump}");

    Ok(())
}

#[test]
fn test_emit_program() -> Result<(), Error> {
    assert_eq!(
        emitted(Emit::Program, "var a = 1 + 2 * 3\n{\n\nprint a\n}\n")?,
        "var a = (1 + (2 * 3))\n{\n    print a\n}\n"
    );

    Ok(())
}

#[test]
fn test_emit_ast() -> Result<(), Error> {
    let ast = emitted(Emit::Ast, "print 1\n")?;

    assert!(ast.starts_with("Program {"), "{ast}");
    assert!(ast.ends_with("}\n"), "{ast}");

    Ok(())
}

#[test]
fn test_emit_run() -> Result<(), Error> {
    assert_eq!(emitted(Emit::Run, "var z = 3\n{\nvar z = 4\nprint z\n}\nprint z\n")?, "4\n3\n");

    Ok(())
}

#[test]
fn test_emit_does_not_execute() -> Result<(), Error> {
    assert_eq!(emitted(Emit::Program, "print missing\n")?, "print missing\n");

    Ok(())
}

#[test]
fn test_closed_output_is_an_error() {
    let broken = Error::Output { err: std::io::ErrorKind::BrokenPipe };

    for emit in [Emit::Tokens, Emit::Ast, Emit::Program] {
        let result = execute(emit, PathBuf::from("main.walk"), "print 1\n", Closed);

        assert_eq!(result, Err(broken.clone()), "{emit:?}");
    }

    let mut out = Closed;
    assert_eq!(
        emit_tokens("var x = 1\n", &mut out).map_err(|err| err.kind()),
        Err(std::io::ErrorKind::BrokenPipe)
    );
}

#[test]
fn test_error_line() {
    let runtime = emitted(Emit::Run, "x = 1\n").unwrap_err();
    assert_eq!(error_line(&runtime), "Error: Undefined variable: x");

    let syntax = emitted(Emit::Program, "}\n").unwrap_err();
    assert_eq!(error_line(&syntax), "Error: Unexpected '}'");

    let broken = Error::Output { err: std::io::ErrorKind::BrokenPipe };
    assert_eq!(error_line(&broken), "Error: Failed to write output: broken pipe");
}

#[test]
fn test_arguments() {
    let cli = Cli::try_parse_from(["walk", "main.walk"]).expect("valid arguments");
    assert_eq!(cli.path, PathBuf::from("main.walk"));
    assert_eq!(cli.emit, Emit::Run);
    assert!(!cli.pretty);
    assert_eq!(cli.verbose, 0);

    let cli = Cli::try_parse_from(["walk", "-vv", "--emit", "tokens", "--pretty", "main.walk"])
        .expect("valid arguments");
    assert_eq!(cli.emit, Emit::Tokens);
    assert!(cli.pretty);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn test_argument_errors() {
    assert_eq!(parse_error_kind(&["walk", "--help"]), Some(ErrorKind::DisplayHelp));
    assert_eq!(parse_error_kind(&["walk", "--version"]), Some(ErrorKind::DisplayVersion));
    assert_eq!(parse_error_kind(&["walk"]), Some(ErrorKind::MissingRequiredArgument));
    assert_eq!(parse_error_kind(&["walk", "--emit", "bytecode", "main.walk"]), Some(ErrorKind::InvalidValue));
}
