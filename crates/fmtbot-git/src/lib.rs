//! Version-control driver for the fmtbot pipeline.
//! Wraps the sequence of external `git` invocations the orchestrator depends
//! on. Every operation is fatal on non-zero exit except the staged-diff
//! probe, whose exit 1 is the expected "changes present" signal.

pub mod driver;

pub use driver::{GitDriver, StagedDiff};
