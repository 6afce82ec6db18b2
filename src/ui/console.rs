use std::fmt::Display;
use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::style::Stylize;

use crate::error::{CatalogError, CatalogResult};

/// Line-based console: prompts go to `output`, answers come from `input`.
/// Generic so tests can script a session with `Cursor` and capture a `Vec<u8>`.
pub struct Console<R, W> {
    input: R,
    output: W,
    /// Colour escapes are only written when output is an interactive terminal.
    styled: bool,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    /// Colours are enabled only when stdout is a terminal, so piped output
    /// stays plain text.
    pub fn stdio() -> Self {
        let stdout = io::stdout();
        let styled = stdout.is_terminal();
        Self::new(io::stdin().lock(), stdout).styled(styled)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Plain-text console over any reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            styled: false,
        }
    }

    /// Turn colour output on or off.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Print `label` without a newline and read one line. Returns `None` at
    /// end of input. The trailing line break is stripped; other whitespace is
    /// kept as typed.
    pub fn read_line(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed_len);
        Ok(Some(buf))
    }

    /// Like [`Console::read_line`], but running out of input mid-operation is
    /// an error.
    pub fn prompt(&mut self, label: &str) -> CatalogResult<String> {
        self.read_line(label)?.ok_or_else(|| {
            CatalogError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before the prompt was answered",
            ))
        })
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Confirmation line, green on a terminal.
    pub fn success(&mut self, text: &str) -> io::Result<()> {
        if self.styled {
            writeln!(self.output, "{}", text.green())
        } else {
            self.line(text)
        }
    }

    /// Report a failed operation as `Error: <message>`, red on a terminal.
    pub fn error(&mut self, err: &CatalogError) -> io::Result<()> {
        let message = format!("Error: {err}");
        if self.styled {
            writeln!(self.output, "{}", message.red())
        } else {
            self.line(message)
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
