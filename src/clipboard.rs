// File: src/clipboard.rs
use crate::error::{AppError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::{self, IsTerminal, Write};

/// Anything that can receive copied text.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Copies through the terminal with an OSC 52 escape sequence.
/// Only works when stdout is an interactive terminal that honours OSC 52.
pub struct TerminalClipboard<W: Write> {
    out: W,
    require_tty: bool,
}

impl TerminalClipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: io::stdout(),
            require_tty: true,
        }
    }
}

impl<W: Write> TerminalClipboard<W> {
    /// Writes escape sequences to an arbitrary sink, tty or not.
    pub fn to_writer(out: W) -> Self {
        Self { out, require_tty: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for TerminalClipboard<W> {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.require_tty && !io::stdout().is_terminal() {
            return Err(AppError::Clipboard("stdout is not a terminal".into()));
        }
        write!(self.out, "\x1b]52;c;{}\x07", STANDARD.encode(text))
            .and_then(|_| self.out.flush())
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }
}

/// Keeps copied text in memory; the last entry is the clipboard content.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    history: Vec<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.history.push(text.to_string());
        Ok(())
    }
}

/// A clipboard that is never available, e.g. for headless runs.
#[derive(Debug, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn set_text(&mut self, _text: &str) -> Result<()> {
        Err(AppError::Clipboard("no clipboard in this environment".into()))
    }
}
