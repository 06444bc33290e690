//! The fetch–decode–execute cycle.
//!
//! One cycle: bounds-check the program counter, fetch, advance the counter
//! (before dispatch, so branch opcodes overwrite it with an absolute
//! address), decode, dispatch. Arithmetic goes through the value codec in
//! unbounded logical space and re-encodes with true modular wraparound;
//! overflow past the logical range is machine semantics, not an error.

use crate::codec;
use crate::instruction::{Instruction, IoSelect};
use crate::io::{InputSource, Notice, OutputSink, INPUT_MAX, INPUT_MIN};
use crate::memory::{validate_fetch, Address};
use crate::state::{MachineState, RunState};
use crate::Fault;

/// Outcome of one instruction cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum StepOutcome {
    /// Instruction retired; the machine is still running.
    Retired,
    /// The machine is halted, either because this step retired the halt
    /// opcode or because it was already halted.
    Halted,
    /// A fatal fault is latched.
    Fault {
        /// The latched fault.
        cause: Fault,
    },
}

/// Aggregate result of running a machine to its halt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RunOutcome {
    /// Instructions retired before the halt opcode.
    pub retired: u64,
}

#[derive(Debug, Clone, Copy)]
enum AluOp {
    Add,
    Sub,
    Mul,
}

#[derive(Debug, Clone, Copy)]
enum BranchOp {
    Always,
    IfZero,
    IfNonNegative,
}

/// Runs a single instruction cycle.
///
/// Terminal states absorb further steps: a halted machine keeps reporting
/// [`StepOutcome::Halted`], a faulted machine its latched fault, with no
/// state change in either case.
pub fn step_one(
    machine: &mut MachineState,
    input: &mut dyn InputSource,
    output: &mut dyn OutputSink,
) -> StepOutcome {
    match machine.run_state() {
        RunState::Faulted(cause) => return StepOutcome::Fault { cause },
        RunState::Halted => return StepOutcome::Halted,
        RunState::Running => {}
    }

    let fetch_address = match validate_fetch(machine.pc()) {
        Ok(address) => address,
        Err(cause) => {
            machine.set_run_state(RunState::Faulted(cause));
            return StepOutcome::Fault { cause };
        }
    };

    let cell = machine.memory().load(fetch_address);
    machine.set_pc(machine.pc() + 1);

    let Some(instruction) = Instruction::decode(cell) else {
        let cause = Fault::InvalidOpcode {
            opcode: cell / 100,
            address: u16::from(fetch_address.value()),
        };
        machine.set_run_state(RunState::Faulted(cause));
        return StepOutcome::Fault { cause };
    };

    execute_instruction(machine, instruction, input, output)
}

/// Dispatches one already-decoded instruction.
///
/// Public as the injection seam for hosts and tests that bypass memory
/// fetch; [`step_one`] is the normal entry.
pub fn execute_instruction(
    machine: &mut MachineState,
    instruction: Instruction,
    input: &mut dyn InputSource,
    output: &mut dyn OutputSink,
) -> StepOutcome {
    match instruction {
        Instruction::Hlt => {
            machine.set_run_state(RunState::Halted);
            StepOutcome::Halted
        }
        Instruction::Add(address) => execute_alu(machine, address, AluOp::Add),
        Instruction::Sub(address) => execute_alu(machine, address, AluOp::Sub),
        Instruction::Mul(address) => execute_alu(machine, address, AluOp::Mul),
        Instruction::Sta(address) => {
            let stored = machine.accumulator();
            machine.memory_mut().store(address, stored);
            StepOutcome::Retired
        }
        Instruction::Lda(address) => {
            // Stored form moves unconverted; no codec on loads and stores.
            let stored = machine.memory().load(address);
            machine.set_accumulator(stored);
            StepOutcome::Retired
        }
        Instruction::Bra(address) => execute_branch(machine, address, BranchOp::Always),
        Instruction::Brz(address) => execute_branch(machine, address, BranchOp::IfZero),
        Instruction::Brp(address) => execute_branch(machine, address, BranchOp::IfNonNegative),
        Instruction::Io(select) => execute_io(machine, select, input, output),
    }
}

fn execute_alu(machine: &mut MachineState, address: Address, op: AluOp) -> StepOutcome {
    let acc = codec::decode(machine.accumulator());
    let operand = codec::decode(machine.memory().load(address));
    let result = match op {
        AluOp::Add => acc + operand,
        AluOp::Sub => acc - operand,
        AluOp::Mul => acc * operand,
    };
    machine.set_accumulator(codec::encode(result));
    StepOutcome::Retired
}

fn execute_branch(machine: &mut MachineState, address: Address, op: BranchOp) -> StepOutcome {
    let taken = match op {
        BranchOp::Always => true,
        BranchOp::IfZero => codec::decode(machine.accumulator()) == 0,
        // Zero takes the branch: every stored value below 500 does.
        BranchOp::IfNonNegative => codec::decode(machine.accumulator()) >= 0,
    };
    if taken {
        machine.set_pc(u16::from(address.value()));
    }
    StepOutcome::Retired
}

fn execute_io(
    machine: &mut MachineState,
    select: IoSelect,
    input: &mut dyn InputSource,
    output: &mut dyn OutputSink,
) -> StepOutcome {
    match select {
        IoSelect::Input => {
            let supplied = match input.request_integer() {
                Ok(value) => value,
                Err(_) => {
                    let cause = Fault::InputUnavailable;
                    machine.set_run_state(RunState::Faulted(cause));
                    return StepOutcome::Fault { cause };
                }
            };

            let value = if (INPUT_MIN..=INPUT_MAX).contains(&supplied) {
                supplied
            } else {
                output.emit_notice(Notice::InputOutOfRange { supplied });
                0
            };

            machine.set_accumulator(codec::encode(value));
            StepOutcome::Retired
        }
        IoSelect::Output => {
            output.emit_integer(codec::decode(machine.accumulator()));
            StepOutcome::Retired
        }
        IoSelect::Nop => StepOutcome::Retired,
    }
}

/// Runs the machine until it halts or faults.
///
/// # Errors
///
/// Returns the latched [`Fault`] when execution ends in any fatal
/// condition instead of the halt opcode.
pub fn run(
    machine: &mut MachineState,
    input: &mut dyn InputSource,
    output: &mut dyn OutputSink,
) -> Result<RunOutcome, Fault> {
    let mut retired: u64 = 0;

    loop {
        match step_one(machine, input, output) {
            StepOutcome::Retired => retired += 1,
            StepOutcome::Halted => return Ok(RunOutcome { retired }),
            StepOutcome::Fault { cause } => return Err(cause),
        }
    }
}
