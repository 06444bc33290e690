//! Fixed 100-cell memory model and pre-fetch address policy.

use core::fmt;

use thiserror::Error;

use crate::codec::STORED_MODULUS;
use crate::Fault;

/// Number of addressable memory cells.
pub const MEMORY_CELLS: u16 = 100;

/// Validated cell address in `0..100`.
///
/// The only ways to obtain one are [`Address::new`] and instruction
/// decomposition, so every memory access is bounds-checked before it
/// happens rather than at the indexing site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Address(u8);

impl Address {
    /// Validates a raw value as a cell address.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(value: u16) -> Option<Self> {
        if value < MEMORY_CELLS {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    /// Returns the raw address value (`0..=99`).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the array index for this address.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Error raised when a memory image cannot be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LoadError {
    /// The image supplies more cells than the machine has.
    #[error("memory image holds {length} cells, the machine has only 100")]
    ImageTooLong {
        /// Number of cells in the rejected image.
        length: usize,
    },
    /// An image cell is outside the stored representation.
    #[error("cell {address} holds {value}, outside the stored range 0..1000")]
    ValueOutOfRange {
        /// Image position of the rejected cell.
        address: usize,
        /// Rejected cell value.
        value: u16,
    },
}

/// The machine's 100-cell memory, each cell in stored form (`0..=999`).
///
/// Mutated only by the initial load and by the STA and INP opcodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u16; MEMORY_CELLS as usize],
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates a zeroed memory.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_CELLS as usize],
        }
    }

    /// Loads a memory image, zero-filling cells the image does not cover.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ImageTooLong`] for images over 100 cells and
    /// [`LoadError::ValueOutOfRange`] for any cell outside `0..=999`.
    pub fn from_image(image: &[u16]) -> Result<Self, LoadError> {
        if image.len() > usize::from(MEMORY_CELLS) {
            return Err(LoadError::ImageTooLong {
                length: image.len(),
            });
        }

        let mut cells = [0; MEMORY_CELLS as usize];
        for (address, &value) in image.iter().enumerate() {
            if value >= STORED_MODULUS {
                return Err(LoadError::ValueOutOfRange { address, value });
            }
            cells[address] = value;
        }

        Ok(Self { cells })
    }

    /// Reads the cell at `address`.
    #[must_use]
    pub const fn load(&self, address: Address) -> u16 {
        self.cells[address.index()]
    }

    /// Writes a stored-form value (`0..=999`) to the cell at `address`.
    pub const fn store(&mut self, address: Address, value: u16) {
        self.cells[address.index()] = value;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Memory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Memory {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cells = Vec::<u16>::deserialize(deserializer)?;
        Self::from_image(&cells).map_err(serde::de::Error::custom)
    }
}

/// Validates the program counter before a fetch.
///
/// # Errors
///
/// Returns [`Fault::OutOfBounds`] when `pc` is outside `0..100`.
pub const fn validate_fetch(pc: u16) -> Result<Address, Fault> {
    let Some(address) = Address::new(pc) else {
        return Err(Fault::OutOfBounds { pc });
    };
    Ok(address)
}
