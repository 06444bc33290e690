//! CLI entry point for the `lmc` binary.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use lmc_cli::console::{ConsoleInput, ConsoleOutput};
use lmc_cli::image::parse_image;
use lmc_cli::sample::SAMPLE_PROGRAM;
use lmc_core::{run, Instruction, MachineState, Memory};
#[cfg(test)]
use tempfile as _;
use thiserror as _;

const USAGE_TEXT: &str = "\
Usage: lmc [options] [image]

Runs a Little Man Computer program. With no image path, runs the built-in
running-total demo (reads integers until 0, then prints the total).

Arguments:
  image            Memory-image file: whitespace-separated cell values
                   (000-999), `#` starts a comment

Options:
  -l, --listing    Print the loaded program listing to stderr before running
  -h, --help       Show this help message

Examples:
  lmc
  lmc program.lmc
  lmc -l program.lmc
";

#[derive(Debug, PartialEq, Eq)]
struct RunArgs {
    image: Option<PathBuf>,
    listing: bool,
}

#[derive(Debug)]
enum ParseResult {
    Run(RunArgs),
    Help,
}

fn parse_args(args: impl Iterator<Item = OsString>) -> Result<ParseResult, String> {
    let mut image: Option<PathBuf> = None;
    let mut listing = false;

    for arg in args {
        if arg == "--help" || arg == "-h" {
            return Ok(ParseResult::Help);
        }

        if arg == "--listing" || arg == "-l" {
            listing = true;
            continue;
        }

        if arg.to_string_lossy().starts_with('-') {
            return Err(format!("unknown option: {}", arg.to_string_lossy()));
        }

        if image.is_some() {
            return Err("multiple image paths provided".to_string());
        }
        image = Some(PathBuf::from(arg));
    }

    Ok(ParseResult::Run(RunArgs { image, listing }))
}

fn load_cells(args: &RunArgs) -> Result<Vec<u16>, String> {
    let Some(path) = &args.image else {
        return Ok(SAMPLE_PROGRAM.to_vec());
    };

    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    parse_image(&text).map_err(|e| format!("{}: {e}", path.display()))
}

fn print_listing(cells: &[u16]) {
    for (address, &cell) in cells.iter().enumerate() {
        let mnemonic = Instruction::decode(cell)
            .map_or_else(String::new, |instruction| format!("  {instruction}"));
        eprintln!("{address:02}: {cell:03}{mnemonic}");
    }
}

fn run_program(args: &RunArgs) -> Result<(), i32> {
    let cells = match load_cells(args) {
        Ok(cells) => cells,
        Err(message) => {
            eprintln!("error: {message}");
            return Err(1);
        }
    };

    if args.listing {
        print_listing(&cells);
    }

    let memory = match Memory::from_image(&cells) {
        Ok(memory) => memory,
        Err(e) => {
            eprintln!("error: {e}");
            return Err(1);
        }
    };

    let mut machine = MachineState::with_memory(memory);
    let mut input = ConsoleInput::stdio();
    let mut output = ConsoleOutput::stdio();

    match run(&mut machine, &mut input, &mut output) {
        Ok(_) => Ok(()),
        Err(fault) => {
            eprintln!("error: {fault}");
            Err(1)
        }
    }
}

fn main() {
    let exit_code = match parse_args(env::args_os().skip(1)) {
        Ok(ParseResult::Help) => {
            println!("{USAGE_TEXT}");
            0
        }
        Ok(ParseResult::Run(args)) => match run_program(&args) {
            Ok(()) => 0,
            Err(code) => code,
        },
        Err(error) => {
            eprintln!("error: {error}");
            eprintln!("{USAGE_TEXT}");
            1
        }
    };

    std::process::exit(exit_code);
}
