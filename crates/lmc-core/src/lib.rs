//! Core interpreter crate for the Little Man Computer.
//!
//! A 100-cell decimal accumulator machine: each cell packs
//! `opcode * 100 + operand`, stored values `0..=999` carry logical signed
//! values `-500..=499`, and the engine runs the fetch–decode–execute cycle
//! until the machine halts or latches a fault. Program loading and console
//! I/O are host concerns behind the collaborator traits in [`io`].

/// Value codec between stored and logical cell representations.
pub mod codec;
pub use codec::{decode, encode, LOGICAL_MAX, LOGICAL_MIN, STORED_MODULUS};

/// Fatal fault taxonomy.
pub mod fault;
pub use fault::Fault;

/// Fixed 100-cell memory model and pre-fetch address policy.
pub mod memory;
pub use memory::{validate_fetch, Address, LoadError, Memory, MEMORY_CELLS};

/// Instruction decomposition and the closed opcode dispatch set.
pub mod instruction;
pub use instruction::{Instruction, IoSelect};

/// Collaborator interfaces for the INP and OUT opcodes.
pub mod io;
pub use io::{InputError, InputSource, Notice, OutputSink, INPUT_MAX, INPUT_MIN};

/// Machine-state model primitives.
pub mod state;
pub use state::{MachineState, RunState};

/// The fetch–decode–execute cycle.
pub mod execute;
pub use execute::{execute_instruction, run, step_one, RunOutcome, StepOutcome};

#[cfg(test)]
use proptest as _;
