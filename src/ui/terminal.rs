//! Plain line-oriented terminal output.

use std::io::{self, Write};

use tracing::warn;

use crate::core::message::Message;
use crate::ui::DisplaySurface;

/// Writes conversation messages to `out` and errors to `err`.
pub struct TerminalSurface<W: Write, E: Write> {
    out: W,
    err: E,
}

impl TerminalSurface<io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> TerminalSurface<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

fn write_message<W: Write>(out: &mut W, message: &Message) -> io::Result<()> {
    writeln!(out, "{}:", message.role().display_name())?;
    for line in message.content().lines() {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;
    out.flush()
}

impl<W: Write, E: Write> DisplaySurface for TerminalSurface<W, E> {
    fn render_message(&mut self, message: &Message) {
        if let Err(e) = write_message(&mut self.out, message) {
            warn!("Failed to write to terminal: {e}");
        }
    }

    fn render_error(&mut self, message: &str) {
        if let Err(e) = writeln!(self.err, "❌ {message}").and_then(|_| self.err.flush()) {
            warn!("Failed to write to terminal: {e}");
        }
    }

    fn render_notice(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{message}").and_then(|_| self.out.flush()) {
            warn!("Failed to write to terminal: {e}");
        }
    }

    fn render_input_prompt(&mut self) {
        if let Err(e) = write!(self.out, "> ").and_then(|_| self.out.flush()) {
            warn!("Failed to write to terminal: {e}");
        }
    }
}
