use std::{
    ffi::OsString,
    io::{IsTerminal, Write},
    time::Duration,
};
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Stage reported on stderr when running verbosely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    Running,
    Finished,
    Failed,
}

impl Status {
    fn prefix(self) -> &'static str {
        match self {
            Status::Running => "Running",
            Status::Finished => "Finished",
            Status::Failed => "Failed",
        }
    }

    fn color(self) -> Color {
        match self {
            Status::Running => Color::Magenta,
            Status::Finished => Color::Green,
            Status::Failed => Color::Red,
        }
    }
}

pub(crate) fn print_running(path: &str) -> std::io::Result<()> {
    print_status(Status::Running, path)
}

pub(crate) fn print_finished(duration: Duration) -> std::io::Result<()> {
    print_status(Status::Finished, &format!("in {}", seconds(duration)))
}

pub(crate) fn print_failed(duration: Duration) -> std::io::Result<()> {
    print_status(Status::Failed, &format!("after {}", seconds(duration)))
}

pub fn seconds(duration: Duration) -> String {
    format!("{:.2}s", duration.as_millis() as f32 / 1000.)
}

fn print_status(status: Status, text: &str) -> std::io::Result<()> {
    let buffer_writer = stderr_buffer_writer();
    let mut buffer = buffer_writer.buffer();

    write_status(&mut buffer, status, text)?;
    buffer_writer.print(&buffer)
}

/// Writes `text` behind the status word, right-aligned in 11 columns.
pub(crate) fn write_status<W: WriteColor>(out: &mut W, status: Status, text: &str) -> std::io::Result<()> {
    out.set_color(
        ColorSpec::new()
            .set_intense(true)
            .set_bold(true)
            .set_fg(Some(status.color())),
    )?;
    write!(out, "{: >11}", status.prefix())?;
    out.reset()?;
    writeln!(out, " {text}")
}

pub fn stderr_buffer_writer() -> BufferWriter {
    BufferWriter::stderr(color_choice())
}

pub fn color_choice() -> ColorChoice {
    choose_color(std::env::var_os("FORCE_COLOR"), std::io::stderr().is_terminal())
}

/// A non-empty `FORCE_COLOR` wins; otherwise colour only goes to a terminal.
fn choose_color(force_color: Option<OsString>, is_terminal: bool) -> ColorChoice {
    match force_color {
        Some(force) if !force.is_empty() => ColorChoice::Always,
        _ if is_terminal => ColorChoice::Auto,
        _ => ColorChoice::Never,
    }
}
