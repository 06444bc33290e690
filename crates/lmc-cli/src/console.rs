//! Console devices implementing the engine's collaborator traits.
//!
//! Input and output are separate devices because the engine borrows both
//! mutably for the length of a cycle. Reads block on the underlying
//! reader with no timeout, matching a synchronous console.

use std::io::{BufRead, StdinLock, Stdout, Write};

use lmc_core::{InputError, InputSource, Notice, OutputSink};

const PROMPT: &str = "Enter a value (-999 to 999): ";

/// Line-based console input device. Prompts on its writer, then blocks
/// for one line per request.
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    reader: R,
    prompt: W,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    /// Console input over the process stdin, prompting on stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Creates an input device over any buffered reader, prompting on
    /// `prompt`.
    #[must_use]
    pub const fn new(reader: R, prompt: W) -> Self {
        Self { reader, prompt }
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn request_integer(&mut self) -> Result<i32, InputError> {
        let _ = write!(self.prompt, "{PROMPT}");
        let _ = self.prompt.flush();

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => Err(InputError::Closed),
            Ok(_) => line.trim().parse().map_err(|_| InputError::Malformed),
        }
    }
}

/// Console output device: printed integers and recoverable notices.
#[derive(Debug)]
pub struct ConsoleOutput<W> {
    writer: W,
}

impl ConsoleOutput<Stdout> {
    /// Console output over the process stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleOutput<W> {
    /// Creates an output device over any writer.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the device, returning the writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for ConsoleOutput<W> {
    fn emit_integer(&mut self, value: i32) {
        let _ = writeln!(self.writer, "Output: {value}");
    }

    fn emit_notice(&mut self, notice: Notice) {
        match notice {
            Notice::InputOutOfRange { .. } => {
                let _ = writeln!(self.writer, "Invalid input. Using 0.");
            }
        }
    }
}
