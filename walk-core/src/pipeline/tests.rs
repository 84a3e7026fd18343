use std::path::PathBuf;

use crate::{
    parser::prelude::ParseErrorType,
    interpreter::RuntimeErrorType,
    utils::prelude::{Error, SrcSpan},
};

use super::{parse, read_source, run, run_file};

fn script() -> PathBuf {
    PathBuf::from("script.walk")
}

#[test]
fn test_run_prints() -> Result<(), Error> {
    let mut out = Vec::new();

    run(script(), "var x = 5\nprint x + 1\n", &mut out)?;

    assert_eq!(out, b"6\n");

    Ok(())
}

#[test]
fn test_parse_error_keeps_source() {
    let err = run(script(), "}\n", Vec::new()).unwrap_err();

    assert_eq!(err.to_string(), "Unexpected '}'");

    match err {
        Error::Parse { path, src, error } => {
            assert_eq!(path, script());
            assert_eq!(src, "}\n");
            assert_eq!(error.error, ParseErrorType::UnexpectedRBrace);
            assert_eq!(error.span, SrcSpan::from(0, 1));
        },
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_runtime_error() {
    let err = run(script(), "x = 1\n", Vec::new()).unwrap_err();

    assert_eq!(err.to_string(), "Undefined variable: x");
    assert!(matches!(
        err,
        Error::Runtime { ref error, .. } if error.error == RuntimeErrorType::UndefinedVariable { name: "x".into() }
    ));
}

#[test]
fn test_parse_does_not_execute() -> Result<(), Error> {
    let program = parse(script(), "print undefined_name\n")?;

    assert_eq!(program.statements.len(), 1);

    Ok(())
}

#[test]
fn test_missing_file() {
    let path = PathBuf::from("definitely/not/here.walk");

    let err = run_file(path.clone(), Vec::new()).unwrap_err();

    assert_eq!(err, Error::StdIo { path: path.clone(), err: std::io::ErrorKind::NotFound });
    assert_eq!(read_source(path).unwrap_err().to_string(), "Could not read `definitely/not/here.walk`: entity not found");
}

#[test]
fn test_run_file() -> Result<(), Error> {
    let path = std::env::temp_dir().join(format!("walk-pipeline-{}.walk", std::process::id()));
    std::fs::write(&path, "var a = 2\n{\nvar a = 3\nprint a * a\n}\nprint a\n")
        .expect("temp file is writable");

    let mut out = Vec::new();
    let result = run_file(path.clone(), &mut out);
    let _ = std::fs::remove_file(&path);

    result?;
    assert_eq!(String::from_utf8_lossy(&out), "9\n2\n");

    Ok(())
}

#[test]
fn test_pretty_parse_error() {
    let err = run(script(), "print 1\nprint (2\n", Vec::new()).unwrap_err();

    let rendered = err.pretty_string();

    assert!(rendered.contains("Syntax error: Expected ')'"), "{rendered}");
    assert!(rendered.contains("script.walk:2:9"), "{rendered}");
    assert!(rendered.contains("Unclosed parenthesis"), "{rendered}");
}

#[test]
fn test_pretty_runtime_error() {
    let err = run(script(), "var x = 1\nvar x = 2\n", Vec::new()).unwrap_err();

    let rendered = err.pretty_string();

    assert!(rendered.contains("Runtime error: Variable already declared in this scope: x"), "{rendered}");
    assert!(rendered.contains("Already declared in this block"), "{rendered}");
    assert!(rendered.contains("Use `=` to assign to the existing variable"), "{rendered}");
}

#[test]
fn test_pretty_io_error() {
    let err = Error::StdIo { path: PathBuf::from("gone.walk"), err: std::io::ErrorKind::NotFound };

    let rendered = err.pretty_string();

    assert!(rendered.starts_with("error: Standard IO error"), "{rendered}");
    assert!(rendered.contains("Could not read `gone.walk`"), "{rendered}");
}

#[test]
fn test_output_error() {
    let err = Error::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));

    assert_eq!(err, Error::Output { err: std::io::ErrorKind::BrokenPipe });
    assert_eq!(err.to_string(), "Failed to write output: broken pipe");
    assert!(err.pretty_string().starts_with("error: Output error"));
}
