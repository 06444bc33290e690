//! Collaborator interfaces the engine drives for the INP and OUT opcodes.
//!
//! The engine only needs "request an integer" and "emit an integer"; how a
//! host prompts, formats, or buffers is its own policy. Input is
//! synchronous and may block indefinitely.

use core::fmt;

use thiserror::Error;

/// Smallest value the INP opcode accepts without substitution.
pub const INPUT_MIN: i32 = -999;

/// Largest value the INP opcode accepts without substitution.
pub const INPUT_MAX: i32 = 999;

/// Failure to supply a value on request. Always fatal to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InputError {
    /// The input stream ended before a value was supplied.
    #[error("input stream closed")]
    Closed,
    /// The device read something it could not interpret as an integer.
    #[error("input could not be read as an integer")]
    Malformed,
}

/// Recoverable notices the engine surfaces through the output collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Notice {
    /// An INP value fell outside `-999..=999`; logical 0 was substituted.
    InputOutOfRange {
        /// The rejected value as supplied.
        supplied: i32,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputOutOfRange { supplied } => {
                write!(f, "input {supplied} is outside -999..=999, using 0")
            }
        }
    }
}

/// Source of integers for the INP opcode.
pub trait InputSource {
    /// Requests one integer, blocking until it is available.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when no value can be supplied; the engine
    /// treats every input error as fatal.
    fn request_integer(&mut self) -> Result<i32, InputError>;
}

/// Destination for the OUT opcode and for recoverable notices.
pub trait OutputSink {
    /// Emits one logical integer. Assumed infallible by the engine.
    fn emit_integer(&mut self, value: i32);

    /// Surfaces a recoverable notice. Assumed infallible by the engine.
    fn emit_notice(&mut self, notice: Notice);
}
