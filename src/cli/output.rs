//! User-facing status lines for the CLI.
//!
//! Status goes to stdout unless stdout carries data (the bundle text), in
//! which case it moves to stderr.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStream {
    Stdout,
    Stderr,
}

pub struct StatusPrinter {
    stream: StandardStream,
}

impl StatusPrinter {
    pub fn new(target: StatusStream) -> Self {
        let stream = match target {
            StatusStream::Stdout => {
                StandardStream::stdout(color_choice(atty::is(atty::Stream::Stdout)))
            }
            StatusStream::Stderr => {
                StandardStream::stderr(color_choice(atty::is(atty::Stream::Stderr)))
            }
        };
        Self { stream }
    }

    /// Prints a confirmation line in green.
    pub fn success(&mut self, message: &str) {
        let _ = self
            .stream
            .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
        let _ = writeln!(self.stream, "{message}");
        let _ = self.stream.reset();
    }

    /// Prints an informational line without decoration.
    pub fn note(&mut self, message: &str) {
        let _ = writeln!(self.stream, "{message}");
    }
}

fn color_choice(is_tty: bool) -> ColorChoice {
    if is_tty {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
