mod cli;
#[cfg(test)]
mod tests;

use std::{
    io::Write,
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::{error::ErrorKind, Parser, ValueEnum};
use cli::{print_failed, print_finished, print_running};
use tracing::Level;
use walk_core::{
    lexer::prelude::tokenize,
    pipeline::{parse, read_source, run},
    utils::prelude::Error,
};

/// Runs a walk script
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Path of source file
    path: PathBuf,
    /// What to do with the source file
    #[arg(long, value_enum, default_value_t = Emit::Run)]
    emit: Emit,
    /// Render errors as annotated source snippets
    #[arg(long, default_value_t = false)]
    pretty: bool,
    /// Log pipeline stages to stderr (-vv for scope tracing)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Execute the program
    Run,
    /// Print the token stream
    Tokens,
    /// Print the syntax tree
    Ast,
    /// Print the parsed program as canonical source
    Program,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();

            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    init_logging(cli.verbose);

    let verbose = cli.verbose > 0;
    if verbose {
        let _ = print_running(&cli.path.display().to_string());
    }
    let start = Instant::now();

    let result = read_source(cli.path.clone())
        .and_then(|src| execute(cli.emit, cli.path.clone(), &src, std::io::stdout().lock()));

    match result {
        Ok(()) => {
            if verbose {
                let _ = print_finished(start.elapsed());
            }

            ExitCode::SUCCESS
        },
        Err(err) => {
            if verbose {
                let _ = print_failed(start.elapsed());
            }
            report(&err, cli.pretty);

            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => return,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_ansi(cli::color_choice() != termcolor::ColorChoice::Never)
        .with_target(false)
        .init();
}

/// Runs the stage selected by `emit` over `src`, writing everything to `out`.
fn execute<W: Write>(emit: Emit, path: PathBuf, src: &str, mut out: W) -> Result<(), Error> {
    match emit {
        Emit::Run => return run(path, src, out),
        Emit::Tokens => emit_tokens(src, &mut out)?,
        Emit::Ast => writeln!(out, "{:#?}", parse(path, src)?)?,
        Emit::Program => write!(out, "{}", parse(path, src)?)?,
    }

    out.flush()?;

    Ok(())
}

/// One `start..end KIND "lexeme"` line per token, `END_OF_FILE` included.
fn emit_tokens<W: Write>(src: &str, out: &mut W) -> std::io::Result<()> {
    for (start, token, end) in tokenize(src) {
        writeln!(out, "{start}..{end} {token}")?;
    }

    Ok(())
}

fn error_line(err: &Error) -> String {
    format!("Error: {err}")
}

fn report(err: &Error, pretty: bool) {
    if !pretty {
        eprintln!("{}", error_line(err));
        return;
    }

    let buf_writer = cli::stderr_buffer_writer();
    let mut buf = buf_writer.buffer();

    let printed = err.pretty(&mut buf).and_then(|()| buf_writer.print(&buf));
    if printed.is_err() {
        eprintln!("{}", error_line(err));
    }
}
