//! Formatting boundary for the fmtbot pipeline.
//! The engine is an opaque text-in/text-out transformer keyed by a parser
//! identifier; the shipped implementation pipes content through an external
//! formatter command. The runner rewrites files in place, whole or not at
//! all.

pub mod command_engine;
pub mod engine;
pub mod runner;

pub use command_engine::CommandFormatEngine;
pub use engine::{FormatEngine, FormatError};
pub use runner::format_file;
