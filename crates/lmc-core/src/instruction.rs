//! Instruction decomposition and the closed opcode dispatch set.
//!
//! A cell value packs `opcode * 100 + operand`. Decomposition produces one
//! of ten tagged instruction cases; nothing derived here outlives the cycle
//! that decoded it.

use core::fmt;

use crate::memory::Address;

/// Operand meaning under the combined input/output opcode (digit 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IoSelect {
    /// Operand 1: request an integer from the input collaborator.
    Input,
    /// Operand 2: emit the accumulator to the output collaborator.
    Output,
    /// Any other operand: permissive no-op, not an error.
    Nop,
}

impl IoSelect {
    /// Classifies an opcode-9 operand.
    #[must_use]
    pub const fn from_operand(operand: u8) -> Self {
        match operand {
            1 => Self::Input,
            2 => Self::Output,
            _ => Self::Nop,
        }
    }
}

/// One decoded instruction, operand already validated as a cell address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Instruction {
    Hlt,
    Add(Address),
    Sub(Address),
    Sta(Address),
    Mul(Address),
    Lda(Address),
    Bra(Address),
    Brz(Address),
    Brp(Address),
    Io(IoSelect),
}

impl Instruction {
    /// Builds an instruction from raw opcode and operand fields.
    ///
    /// `None` for opcode digits outside `0..=9` or operands outside
    /// `0..=99`. Cells bounded to `0..=999` always decompose to valid
    /// fields; this constructor is the seam that lets callers (and tests)
    /// inject fields the packing could never produce.
    #[must_use]
    pub const fn from_fields(opcode: u16, operand: u16) -> Option<Self> {
        let Some(address) = Address::new(operand) else {
            return None;
        };

        Some(match opcode {
            0 => Self::Hlt,
            1 => Self::Add(address),
            2 => Self::Sub(address),
            3 => Self::Sta(address),
            4 => Self::Mul(address),
            5 => Self::Lda(address),
            6 => Self::Bra(address),
            7 => Self::Brz(address),
            8 => Self::Brp(address),
            9 => Self::Io(IoSelect::from_operand(address.value())),
            _ => return None,
        })
    }

    /// Decomposes a cell value into `opcode = cell / 100`,
    /// `operand = cell % 100`.
    #[must_use]
    pub const fn decode(cell: u16) -> Option<Self> {
        Self::from_fields(cell / 100, cell % 100)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hlt => f.write_str("HLT"),
            Self::Add(address) => write!(f, "ADD {address}"),
            Self::Sub(address) => write!(f, "SUB {address}"),
            Self::Sta(address) => write!(f, "STA {address}"),
            Self::Mul(address) => write!(f, "MUL {address}"),
            Self::Lda(address) => write!(f, "LDA {address}"),
            Self::Bra(address) => write!(f, "BRA {address}"),
            Self::Brz(address) => write!(f, "BRZ {address}"),
            Self::Brp(address) => write!(f, "BRP {address}"),
            Self::Io(IoSelect::Input) => f.write_str("INP"),
            Self::Io(IoSelect::Output) => f.write_str("OUT"),
            Self::Io(IoSelect::Nop) => f.write_str("IO"),
        }
    }
}
