//! Whole-machine conformance suite: codec laws and end-to-end programs.

use lmc_core::{
    codec, run, step_one, Fault, InputError, InputSource, MachineState, Memory, Notice,
    OutputSink, RunState, StepOutcome,
};
use proptest::prelude::*;
use rstest as _;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

struct ScriptedInput {
    values: Vec<i32>,
}

impl ScriptedInput {
    fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn request_integer(&mut self) -> Result<i32, InputError> {
        if self.values.is_empty() {
            Err(InputError::Closed)
        } else {
            Ok(self.values.remove(0))
        }
    }
}

#[derive(Default)]
struct RecordingOutput {
    integers: Vec<i32>,
    notices: Vec<Notice>,
}

impl OutputSink for RecordingOutput {
    fn emit_integer(&mut self, value: i32) {
        self.integers.push(value);
    }

    fn emit_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

fn machine_with(image: &[u16]) -> MachineState {
    MachineState::with_memory(Memory::from_image(image).expect("valid image"))
}

/// The original running-total program: read integers until 0, print the
/// total. Cells 10 and 11 are data.
const RUNNING_TOTAL: &[u16] = &[901, 708, 311, 901, 708, 111, 311, 603, 511, 902, 0, 0];

#[test]
fn running_total_program_sums_until_zero() {
    let mut machine = machine_with(RUNNING_TOTAL);
    let mut input = ScriptedInput::new([5, 7, 0]);
    let mut output = RecordingOutput::default();

    let outcome = run(&mut machine, &mut input, &mut output).expect("halts");

    assert_eq!(output.integers, vec![12]);
    assert!(output.notices.is_empty());
    assert_eq!(machine.run_state(), RunState::Halted);
    assert!(outcome.retired > 0);
}

#[test]
fn running_total_handles_negative_contributions() {
    let mut machine = machine_with(RUNNING_TOTAL);
    let mut input = ScriptedInput::new([100, -30, -71, 0]);
    let mut output = RecordingOutput::default();

    run(&mut machine, &mut input, &mut output).expect("halts");

    assert_eq!(output.integers, vec![-1]);
}

#[test]
fn running_total_clamps_out_of_range_input_and_keeps_going() {
    let mut machine = machine_with(RUNNING_TOTAL);
    let mut input = ScriptedInput::new([5, 1500, 7, 0]);
    let mut output = RecordingOutput::default();

    run(&mut machine, &mut input, &mut output).expect("halts");

    // 1500 contributes the substituted 0... except a substituted 0 also
    // ends the loop here, because the program branches on zero.
    assert_eq!(output.integers, vec![5]);
    assert_eq!(
        output.notices,
        vec![Notice::InputOutOfRange { supplied: 1500 }]
    );
}

#[test]
fn exhausted_input_faults_the_machine() {
    let mut machine = machine_with(RUNNING_TOTAL);
    let mut input = ScriptedInput::new([5, 7]);
    let mut output = RecordingOutput::default();

    let fault = run(&mut machine, &mut input, &mut output).expect_err("faults");

    assert_eq!(fault, Fault::InputUnavailable);
    assert_eq!(
        machine.run_state(),
        RunState::Faulted(Fault::InputUnavailable)
    );
}

#[test]
fn countdown_loop_uses_brp_until_negative() {
    // LDA 07, OUT, SUB 08, BRP 01, HLT, data: 2 at 07, 1 at 08.
    // BRP takes the branch on zero, so 0 itself is still emitted.
    let image = &[507, 902, 208, 801, 0, 0, 0, 2, 1];
    let mut machine = machine_with(image);
    let mut input = ScriptedInput::new([]);
    let mut output = RecordingOutput::default();

    run(&mut machine, &mut input, &mut output).expect("halts");

    assert_eq!(output.integers, vec![2, 1, 0]);
}

proptest! {
    #[test]
    fn codec_roundtrip_on_the_logical_range(logical in codec::LOGICAL_MIN..=codec::LOGICAL_MAX) {
        prop_assert_eq!(codec::decode(codec::encode(logical)), logical);
    }

    #[test]
    fn encode_is_total_and_in_range(logical in any::<i32>()) {
        prop_assert!(codec::encode(logical) < codec::STORED_MODULUS);
    }

    #[test]
    fn decode_then_encode_is_identity_on_stored_values(stored in 0..codec::STORED_MODULUS) {
        let logical = codec::decode(stored);
        prop_assert!((codec::LOGICAL_MIN..=codec::LOGICAL_MAX).contains(&logical));
        prop_assert_eq!(codec::encode(logical), stored);
    }

    #[test]
    fn add_matches_the_codec_law_for_any_pair(
        acc in 0..codec::STORED_MODULUS,
        operand in 0..codec::STORED_MODULUS,
    ) {
        // ADD 02 with the operand planted in cell 2.
        let mut machine = machine_with(&[102, 0, operand]);
        machine.set_accumulator(acc);
        let mut input = ScriptedInput::new([]);
        let mut output = RecordingOutput::default();

        let outcome = step_one(&mut machine, &mut input, &mut output);

        prop_assert_eq!(outcome, StepOutcome::Retired);
        let expected = codec::encode(codec::decode(acc) + codec::decode(operand));
        prop_assert_eq!(machine.accumulator(), expected);
    }

    #[test]
    fn mul_matches_the_codec_law_for_any_pair(
        acc in 0..codec::STORED_MODULUS,
        operand in 0..codec::STORED_MODULUS,
    ) {
        let mut machine = machine_with(&[402, 0, operand]);
        machine.set_accumulator(acc);
        let mut input = ScriptedInput::new([]);
        let mut output = RecordingOutput::default();

        step_one(&mut machine, &mut input, &mut output);

        let expected = codec::encode(codec::decode(acc) * codec::decode(operand));
        prop_assert_eq!(machine.accumulator(), expected);
    }
}
