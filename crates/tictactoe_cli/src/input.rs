//! Console prompting and cell-number parsing.

use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tictactoe_core::CELL_COUNT;
use tracing::{debug, instrument};

/// Message printed for non-numeric or out-of-range input.
pub const INVALID_INPUT: &str = "Invalid Input. Please choose between 1 and 9";

/// Error raised by console reads and writes.
#[derive(Debug, Display, Error)]
pub enum ConsoleError {
    /// The input stream ended before a valid cell number arrived.
    #[display("Input closed before a valid case was entered")]
    Closed,

    /// Reading or writing the console failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),
}

/// Parses a line of user input as a cell number in 1-9.
///
/// Surrounding whitespace is ignored; anything else yields `None`.
pub fn parse_cell(line: &str) -> Option<usize> {
    line.trim()
        .parse::<usize>()
        .ok()
        .filter(|cell| (1..=CELL_COUNT).contains(cell))
}

/// Line-oriented console over any reader and writer.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `reader` and printing to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prints `text` followed by a newline.
    pub fn show(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{}", text).map_err(ConsoleError::Io)
    }

    /// Prompts until the user enters a cell number in 1-9.
    ///
    /// Malformed input prints [`INVALID_INPUT`] and repeats the same prompt.
    /// There is no retry limit.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::Closed`] at end of input, [`ConsoleError::Io`] on
    /// read or write failure.
    #[instrument(skip(self))]
    pub fn read_cell(&mut self, prompt: &str) -> Result<usize, ConsoleError> {
        loop {
            write!(self.writer, "{}:\t", prompt).map_err(ConsoleError::Io)?;
            self.writer.flush().map_err(ConsoleError::Io)?;

            let mut raw = Vec::new();
            let read = self
                .reader
                .read_until(b'\n', &mut raw)
                .map_err(ConsoleError::Io)?;
            if read == 0 {
                return Err(ConsoleError::Closed);
            }
            // Bytes that are not UTF-8 are just malformed input.
            let line = String::from_utf8_lossy(&raw);

            match parse_cell(&line) {
                Some(cell) => return Ok(cell),
                None => {
                    debug!(input = line.trim(), "Rejected input");
                    self.show(INVALID_INPUT)?;
                }
            }
        }
    }
}
