//! Console host library for the Little Man Computer interpreter.
//!
//! Supplies what the core treats as external collaborators: console input
//! and output devices, the memory-image text format, and the built-in
//! demo program.

/// Console collaborator devices over standard I/O.
pub mod console;
/// Memory-image text format.
pub mod image;
/// Built-in demo program.
pub mod sample;

pub use console::{ConsoleInput, ConsoleOutput};
pub use image::{parse_image, ImageError};
pub use sample::SAMPLE_PROGRAM;

#[cfg(test)]
use tempfile as _;
