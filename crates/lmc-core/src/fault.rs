use thiserror::Error;

/// Fatal fault taxonomy for the execution engine.
///
/// A fault latches the machine in [`crate::RunState::Faulted`] and stops
/// the cycle loop; the engine never resumes from one. Recoverable
/// invalid-input handling is not a fault — see [`crate::Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Fault {
    /// Program counter left the addressable range before a fetch.
    #[error("program counter {pc} is outside memory (0..100)")]
    OutOfBounds {
        /// Program counter value that failed the pre-fetch bounds check.
        pc: u16,
    },
    /// Decoded opcode digit is not one of the ten assigned opcodes.
    #[error("invalid opcode {opcode} at address {address}")]
    InvalidOpcode {
        /// Offending opcode digit.
        opcode: u16,
        /// Address of the cell the instruction was fetched from.
        address: u16,
    },
    /// The input collaborator failed to supply a value.
    #[error("input device failed to supply a value")]
    InputUnavailable,
}
